//! Error type definitions for signature verification

use thiserror::Error;

/// Result type for ecverify operations
pub type Result<T> = core::result::Result<T, Error>;

/// Primary error type for signature verification
///
/// A signature that is well-formed but does not verify is *not* an error;
/// verifiers report it as `Ok(false)`. These variants cover structurally
/// invalid input and the defensive arithmetic conditions only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Signature bytes have the wrong length or layout, or a component lies
    /// outside `[1, n-1]`
    #[error("Malformed signature: {context}: {message}")]
    MalformedSignature {
        context: &'static str,
        message: String,
    },

    /// Public key bytes have the wrong length, a coordinate is out of range,
    /// or the point is off the curve or the identity
    #[error("Invalid public key: {context}: {message}")]
    InvalidPublicKey {
        context: &'static str,
        message: String,
    },

    /// Modular inverse requested for a value congruent to zero
    #[error("Division by zero: {context}")]
    DivisionByZero { context: &'static str },

    /// An arithmetic invariant was violated
    #[error("Internal error: {context}: {message}")]
    InternalError {
        context: &'static str,
        message: String,
    },
}

impl Error {
    /// Shorthand for a `MalformedSignature` error
    pub fn malformed_signature(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedSignature {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an `InvalidPublicKey` error
    pub fn invalid_public_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidPublicKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an `InternalError`
    pub fn internal(context: &'static str, message: impl Into<String>) -> Self {
        Self::InternalError {
            context,
            message: message.into(),
        }
    }

    /// The context the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::MalformedSignature { context, .. }
            | Self::InvalidPublicKey { context, .. }
            | Self::DivisionByZero { context }
            | Self::InternalError { context, .. } => context,
        }
    }
}
