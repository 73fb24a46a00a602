//! ECDSA signature verification for NIST curves
//!
//! This module provides ECDSA verification over the NIST P-256 curve.

#[cfg(feature = "der")]
pub mod common;
pub mod p256;

// Re-export P-256 types
pub use p256::{EcdsaP256, EcdsaP256PublicKey, EcdsaP256Signature};
