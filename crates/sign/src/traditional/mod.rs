//! Traditional signature schemes

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{EcdsaP256, EcdsaP256PublicKey, EcdsaP256Signature};
