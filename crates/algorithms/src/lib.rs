//! Arithmetic primitives for ECDSA verification
//!
//! This crate provides the modular big-integer arithmetic and elliptic-curve
//! point operations that the signature layer builds on. Everything is
//! implemented directly on fixed-size limb arrays; no external big-integer
//! or elliptic-curve library is involved.
//!
//! Field and scalar arithmetic are written as constant-flow code, and the
//! scalar multiplication loop selects in constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::p256;
