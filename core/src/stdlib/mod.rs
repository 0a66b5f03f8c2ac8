//! Standard library of native functions.
//!
//! Functions are plain `static` [`NativeFunction`](crate::values::function::NativeFunction)
//! values so that tables borrowing them can live in `static` memory too.

pub mod math;

pub use math::{COS, SCIENTIFIC_FUNCTIONS, SIN, TAN};
