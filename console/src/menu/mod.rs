pub mod config;
pub mod runner;

pub use config::ConsoleConfig;
pub use runner::MenuRunner;
