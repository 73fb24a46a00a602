//! Public API traits and types for the ecverify library
//!
//! This crate provides the public API surface of the ecverify workspace: the
//! error taxonomy shared by every layer and the trait that signature
//! verifiers implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::SignatureVerifier;

// Re-export trait modules for direct access
pub use traits::signature;
