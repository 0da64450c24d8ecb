use anyhow::Context;
use clap::Parser;
use generator::{build_matrix_pair, GeneratorConfig};
use log::info;
use matcore::algebra::render;
use menu::{ConsoleConfig, MenuRunner};
use std::io::{self, Write};
use std::path::PathBuf;

mod generator;
mod input;
mod menu;

#[derive(Parser)]
#[command(author, version, about = "Interactive console driver for the matrix engine")]
struct Args {
    /// Load console settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the delimiter used when printing matrix rows
    #[arg(long)]
    delimiter: Option<String>,
    /// Multiply a generated matrix pair once and exit
    #[arg(long, default_value_t = false)]
    demo: bool,
    /// Seed for the demo generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    info!(
        "console starting: delimiter {:?}, max_dimension {}",
        config.delimiter, config.max_dimension
    );

    if args.demo {
        return run_demo(&config, args.seed);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = MenuRunner::new(config, stdin.lock(), stdout.lock());
    runner.run()
}

fn run_demo(config: &ConsoleConfig, seed: u64) -> anyhow::Result<()> {
    let generator_config = GeneratorConfig {
        seed,
        ..Default::default()
    };
    let (a, b) = build_matrix_pair(&generator_config)?;
    let product = a.multiply(&b).context("multiplying demo matrices")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_labeled(&mut out, "Matrix A", &a, &config.delimiter)?;
    print_labeled(&mut out, "Matrix B", &b, &config.delimiter)?;
    print_labeled(&mut out, "A * B", &product, &config.delimiter)?;
    Ok(())
}

fn print_labeled<W: Write>(
    out: &mut W,
    label: &str,
    matrix: &matcore::Matrix,
    delimiter: &str,
) -> anyhow::Result<()> {
    writeln!(out, "{} ({}x{}):", label, matrix.height(), matrix.width())?;
    for line in render(Some(matrix), delimiter) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}
