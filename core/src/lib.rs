//! Integer matrix engine for the console linear-algebra workbench.
//!
//! The modules separate the pure algebra (construction, transpose,
//! multiplication, rendering) from the session state that owns the two
//! matrix slots a user fills interactively.

pub mod algebra;
pub mod prelude;
pub mod session;
pub mod telemetry;

pub use algebra::{dot_product, render, Matrix, Row};
pub use prelude::{EngineError, EngineResult, Slot};
pub use session::Session;
