pub mod matrix;
pub mod ops;
pub mod render;

pub use matrix::{Matrix, Row};
pub use ops::dot_product;
pub use render::render;
