//! Calculator selection by name.

use thiserror::Error;

use crate::api::{Calculator, CalculatorKind, CalculatorOptions};

/// The requested calculator name is not one of `Basic`, `Scientific` or `Smart`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid calculator type")]
pub struct InvalidTypeError {
    /// The name as given.
    pub name: String,
}

/// Builds calculators from their type name.
#[derive(Debug, Default)]
pub struct CalculatorFactory {
    _private: (),
}

static INSTANCE: CalculatorFactory = CalculatorFactory { _private: () };

impl CalculatorFactory {
    /// The process-wide factory.
    pub fn instance() -> &'static CalculatorFactory {
        &INSTANCE
    }

    /// Create a calculator from a case-insensitive type name.
    pub fn create(&self, name: &str) -> Result<Calculator, InvalidTypeError> {
        self.create_with_options(name, CalculatorOptions::DEFAULT)
    }

    pub fn create_with_options(
        &self,
        name: &str,
        options: CalculatorOptions,
    ) -> Result<Calculator, InvalidTypeError> {
        let kind = name.parse::<CalculatorKind>().inspect_err(|_| {
            tracing::debug!(name, "Unknown calculator type");
        })?;
        tracing::debug!(%kind, "Creating calculator");
        Ok(Calculator::with_options(kind, options))
    }
}
