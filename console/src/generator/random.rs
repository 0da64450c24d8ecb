use anyhow::Context;
use matcore::{Matrix, Row};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a compatible demo matrix pair.
///
/// A is `height x inner`, B is `inner x width`, so A*B is always
/// dimensionally valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub height: usize,
    pub inner: usize,
    pub width: usize,
    pub min_value: i64,
    pub max_value: i64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            height: 2,
            inner: 3,
            width: 2,
            min_value: -9,
            max_value: 9,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    fn normalized_height(&self) -> usize {
        self.height.max(1)
    }

    fn normalized_inner(&self) -> usize {
        self.inner.max(1)
    }

    fn normalized_width(&self) -> usize {
        self.width.max(1)
    }
}

fn random_matrix(
    rng: &mut StdRng,
    height: usize,
    width: usize,
    min_value: i64,
    max_value: i64,
) -> anyhow::Result<Matrix> {
    let rows: Vec<Row> = (0..height)
        .map(|_| (0..width).map(|_| rng.gen_range(min_value..=max_value)).collect())
        .collect();
    Matrix::from_rows(height, width, rows).context("building random demo matrix")
}

/// Builds a seeded (A, B) pair with matching inner dimension.
pub fn build_matrix_pair(config: &GeneratorConfig) -> anyhow::Result<(Matrix, Matrix)> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let a = random_matrix(
        &mut rng,
        config.normalized_height(),
        config.normalized_inner(),
        config.min_value,
        config.max_value,
    )?;
    let b = random_matrix(
        &mut rng,
        config.normalized_inner(),
        config.normalized_width(),
        config.min_value,
        config.max_value,
    )?;
    Ok((a, b))
}
