pub mod random;

pub use random::{build_matrix_pair, GeneratorConfig};
