//! Error handling traits for the ecverify ecosystem

use super::types::{Error, Result};
use core::fmt::Display;

/// Extension trait for classifying lower-level errors at a decode site
///
/// Primitive layers report *what* went wrong (a length, a range check); the
/// decode site knows *which* input was at fault. These adapters attach that
/// classification while keeping the lower-level description as the message.
pub trait ResultExt<T>: Sized {
    /// Classify any error as a malformed signature
    fn or_malformed_signature(self, context: &'static str) -> Result<T>;

    /// Classify any error as an invalid public key
    fn or_invalid_public_key(self, context: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for core::result::Result<T, E>
where
    E: Display,
{
    fn or_malformed_signature(self, context: &'static str) -> Result<T> {
        self.map_err(|e| Error::malformed_signature(context, e.to_string()))
    }

    fn or_invalid_public_key(self, context: &'static str) -> Result<T> {
        self.map_err(|e| Error::invalid_public_key(context, e.to_string()))
    }
}
