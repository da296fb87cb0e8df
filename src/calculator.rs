use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("/ by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Four-operation integer calculator.
///
/// Every operation is checked: results that do not fit in an `i64` are reported as
/// `CalculatorError::Overflow` instead of wrapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct Calculator;

impl Calculator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// # Errors
    /// Returns `CalculatorError::Overflow` if the sum does not fit in an `i64`.
    pub const fn add(&self, a: i64, b: i64) -> Result<i64> {
        match a.checked_add(b) {
            Some(v) => Ok(v),
            None => Err(CalculatorError::Overflow),
        }
    }

    /// # Errors
    /// Returns `CalculatorError::Overflow` if the difference does not fit in an `i64`.
    pub const fn subtract(&self, a: i64, b: i64) -> Result<i64> {
        match a.checked_sub(b) {
            Some(v) => Ok(v),
            None => Err(CalculatorError::Overflow),
        }
    }

    /// # Errors
    /// Returns `CalculatorError::Overflow` if the product does not fit in an `i64`.
    pub const fn multiply(&self, a: i64, b: i64) -> Result<i64> {
        match a.checked_mul(b) {
            Some(v) => Ok(v),
            None => Err(CalculatorError::Overflow),
        }
    }

    /// Truncating integer division.
    ///
    /// # Errors
    /// Returns `CalculatorError::DivisionByZero` if `b` is zero.
    /// Returns `CalculatorError::Overflow` for `i64::MIN / -1`.
    pub const fn divide(&self, a: i64, b: i64) -> Result<i64> {
        if b == 0 {
            return Err(CalculatorError::DivisionByZero);
        }
        match a.checked_div(b) {
            Some(v) => Ok(v),
            None => Err(CalculatorError::Overflow),
        }
    }
}
