//! # ecverify
//!
//! ECDSA signature verification over NIST P-256 with SHA-256, built on
//! from-scratch field, scalar and curve arithmetic.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecverify = "0.3"
//! ```
//!
//! ```
//! use ecverify::prelude::*;
//!
//! # fn check(message: &[u8], sig: &[u8; 64], key: &[u8; 64]) -> Result<bool> {
//! let public_key = EcdsaP256PublicKey::from_bytes(key)?;
//! let signature = EcdsaP256Signature::decode_fixed(sig)?;
//! EcdsaP256::verify(message, &signature, &public_key)
//! # }
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): P-256 field, scalar and point arithmetic
//! - `sign` (default): the ECDSA verifier
//! - `der` (default): ASN.1 DER signature decoding and encoding
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecverify-api`]: Error taxonomy and the verifier trait
//! - [`ecverify-internal`]: Constant-time and endian helpers
//! - [`ecverify-params`]: NIST P-256 domain parameters
//! - [`ecverify-algorithms`]: P-256 arithmetic
//! - [`ecverify-sign`]: ECDSA verification

// Core re-exports (always available)
pub use ecverify_api as api;
pub use ecverify_internal as internal;
pub use ecverify_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecverify_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use ecverify_sign as sign;

/// Common imports for ecverify users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::SignatureVerifier;

    #[cfg(feature = "sign")]
    pub use crate::sign::{EcdsaP256, EcdsaP256PublicKey, EcdsaP256Signature};
}
