//! Traits implemented by ecverify algorithms

pub mod signature;

pub use signature::SignatureVerifier;
