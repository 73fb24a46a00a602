//! Reference ECDSA P-256 signer for generating test signatures
//!
//! Built from the library's own scalar and point primitives. It exists only
//! to produce valid `(message, signature, key)` triples for the verifier
//! suites; nonces are supplied by the caller or drawn from a test RNG.

use ecverify_algorithms::ec::p256::{self as ec, Scalar, P256_SCALAR_SIZE};
use ecverify_sign::{EcdsaP256PublicKey, EcdsaP256Signature};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Draw a uniform scalar in `[1, n−1]` by rejection sampling
pub fn random_scalar<R: RngCore>(rng: &mut R) -> Scalar {
    let mut bytes = [0u8; P256_SCALAR_SIZE];
    loop {
        rng.fill_bytes(&mut bytes);
        if let Ok(scalar) = Scalar::new(bytes) {
            return scalar;
        }
    }
}

/// Public key Q = d·G
pub fn public_key(d: &Scalar) -> EcdsaP256PublicKey {
    EcdsaP256PublicKey::from_point(ec::scalar_mult_base_g(d)).expect("non-zero secret")
}

/// Sign a 32-byte digest with an explicit nonce
///
/// Returns `None` when the nonce yields `r = 0` or `s = 0`.
pub fn sign_digest_with_nonce(
    d: &Scalar,
    k: &Scalar,
    digest: &[u8; P256_SCALAR_SIZE],
) -> Option<EcdsaP256Signature> {
    let z = Scalar::from_bytes_reduced(digest);
    let r = Scalar::from_bytes_reduced(&ec::scalar_mult_base_g(k).x_coordinate_bytes());
    let k_inv = k.inv_mod_n().ok()?;
    let s = k_inv.mul_mod_n(&z.add_mod_n(&r.mul_mod_n(d)));
    EcdsaP256Signature::from_scalars(r, s).ok()
}

/// Sign SHA-256(message) with an explicit nonce
pub fn sign_with_nonce(d: &Scalar, k: &Scalar, message: &[u8]) -> Option<EcdsaP256Signature> {
    let mut digest = [0u8; P256_SCALAR_SIZE];
    digest.copy_from_slice(&Sha256::digest(message));
    sign_digest_with_nonce(d, k, &digest)
}

/// Sign SHA-256(message) with a fresh random nonce
pub fn sign<R: RngCore>(rng: &mut R, d: &Scalar, message: &[u8]) -> EcdsaP256Signature {
    loop {
        let k = random_scalar(rng);
        if let Some(signature) = sign_with_nonce(d, &k, message) {
            return signature;
        }
    }
}
