//! Public API for the calculator.
//!
//! Three evaluation policies share one [`Calculator`] type:
//!
//! 1. **Basic**: literals and operators only
//! 2. **Scientific**: adds `sin`, `cos` and `tan`
//! 3. **Smart**: evaluates safe expressions directly and retries the rest
//!    on the scientific path
//!
//! # Example
//!
//! ```ignore
//! use smartcalc_core::api::CalculatorFactory;
//!
//! let mut calc = CalculatorFactory::instance().create("smart").unwrap();
//! calc.calculate("sin(0) + 2 * 3").unwrap();
//! assert_eq!(calc.display_result().to_string(), "6.0");
//! ```

pub mod calculator;
pub mod environment;
pub mod factory;
pub mod options;


pub use calculator::{Calculator, CalculatorKind, DisplayResult, NO_RESULT};
pub use environment::Environment;
pub use factory::{CalculatorFactory, InvalidTypeError};
pub use options::{CalculatorOptions, EvaluatorOptions, ParserOptions};
