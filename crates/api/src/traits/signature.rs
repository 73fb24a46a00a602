//! Digital signature verification traits for ecverify
//!
//! Verification works on decoded values: keys and signatures are parsed and
//! validated once, by their own constructors, so that the verification
//! equation itself never sees structurally invalid input.

use crate::Result;

/// Core trait for signature verification algorithms
///
/// # Outcomes
///
/// - `Ok(true)`: the signature is valid for the message under the key
/// - `Ok(false)`: the signature is well-formed but does not verify
/// - `Err(_)`: an internal arithmetic invariant failed; unreachable for
///   values produced by the implementation's decoders
///
/// Callers should treat `Ok(false)` and every decode error alike ("not
/// authenticated"); the distinction exists for diagnostics.
pub trait SignatureVerifier {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Verify a signature against a message and public key
    ///
    /// # Security Requirements
    ///
    /// - The final comparison must be constant-time
    /// - Must not panic on any decoded input
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}
