//! Digital Signature Verification
//!
//! This crate implements ECDSA signature verification over NIST P-256 with
//! SHA-256, on top of the arithmetic in `ecverify-algorithms`.
//!
//! ```
//! use ecverify_sign::EcdsaP256;
//!
//! # fn main() -> ecverify_api::Result<()> {
//! let key = [0u8; 64];
//! let sig = [0u8; 64];
//! // all-zero inputs are rejected at decode time
//! assert!(EcdsaP256::verify_bytes(b"message", &sig, &key).is_err());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::{EcdsaP256, EcdsaP256PublicKey, EcdsaP256Signature};
