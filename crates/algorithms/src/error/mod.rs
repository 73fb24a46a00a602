//! Error handling for arithmetic primitives

use ecverify_api::Error as CoreError;
use std::borrow::Cow;
use thiserror::Error;

/// The error type for arithmetic primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Inversion of a value congruent to zero
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// Arithmetic domain that was asked to invert zero
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for arithmetic primitives
pub type Result<T> = core::result::Result<T, Error>;

// Conversion for errors that reach the API boundary unclassified. Decode sites
// classify their own failures; anything arriving here is an internal fault.
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::DivisionByZero { context } => CoreError::DivisionByZero { context },
            Error::Parameter { .. } => CoreError::internal("primitives", err.to_string()),
            Error::Length { context, .. } => CoreError::internal(context, err.to_string()),
        }
    }
}

// Include the validation submodule
pub mod validate;
