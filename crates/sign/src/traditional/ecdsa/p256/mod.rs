//! ECDSA verification for the NIST P-256 curve
//!
//! This implementation follows FIPS 186-4: Digital Signature Standard (DSS),
//! Section 6.4, with SHA-256 as the message digest.

#[cfg(feature = "der")]
use crate::traditional::ecdsa::common::SignatureComponents;
use ecverify_algorithms::ec::p256 as ec;
use ecverify_api::{Error as ApiError, Result as ApiResult, ResultExt, SignatureVerifier};
use ecverify_internal::constant_time::ct_eq;
#[cfg(feature = "der")]
use ecverify_params::traditional::ecdsa::ECDSA_P256_DER_SIGNATURE_MAX_SIZE;
use ecverify_params::traditional::ecdsa::{ECDSA_P256_PUBLIC_KEY_SIZE, ECDSA_P256_SIGNATURE_SIZE};
use log::{debug, trace};
use sha2::{Digest, Sha256};

const ALGORITHM: &str = "ECDSA-P256";

/// ECDSA signature verification using NIST P-256 curve (secp256r1) and SHA-256
pub struct EcdsaP256;

/// A validated P-256 public key
///
/// Always an affine point on the curve other than the identity. Construct it
/// with [`EcdsaP256PublicKey::from_bytes`] or one of the SEC1 decoders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaP256PublicKey {
    point: ec::Point,
}

/// A decoded P-256 signature with both components in `[1, n−1]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaP256Signature {
    r: ec::Scalar,
    s: ec::Scalar,
}

impl EcdsaP256PublicKey {
    /// Decode a raw 64-byte key `x ∥ y` (big-endian coordinates)
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ECDSA_P256_PUBLIC_KEY_SIZE {
            return Err(ApiError::invalid_public_key(
                "ECDSA-P256 public key",
                format!(
                    "expected {} bytes, got {}",
                    ECDSA_P256_PUBLIC_KEY_SIZE,
                    bytes.len()
                ),
            ));
        }
        let point =
            ec::Point::deserialize_raw(bytes).or_invalid_public_key("ECDSA-P256 public key")?;
        Self::from_point(point)
    }

    /// Decode a SEC1 key: `0x04 ∥ x ∥ y` or `0x02/0x03 ∥ x`
    pub fn from_sec1_bytes(bytes: &[u8]) -> ApiResult<Self> {
        const CONTEXT: &str = "ECDSA-P256 SEC1 public key";
        let point = match ec::Point::detect_format(bytes).or_invalid_public_key(CONTEXT)? {
            ec::PointFormat::Identity => {
                return Err(ApiError::invalid_public_key(
                    CONTEXT,
                    "identity is not a valid public key",
                ))
            }
            ec::PointFormat::Uncompressed => ec::Point::deserialize_uncompressed(bytes),
            ec::PointFormat::Compressed => ec::Point::deserialize_compressed(bytes),
        }
        .or_invalid_public_key(CONTEXT)?;
        Self::from_point(point)
    }

    /// Wrap a curve point, rejecting the identity
    pub fn from_point(point: ec::Point) -> ApiResult<Self> {
        if point.is_identity() {
            return Err(ApiError::invalid_public_key(
                "ECDSA-P256 public key",
                "identity is not a valid public key",
            ));
        }
        Ok(EcdsaP256PublicKey { point })
    }

    /// The underlying curve point
    pub fn point(&self) -> &ec::Point {
        &self.point
    }

    /// Raw 64-byte encoding `x ∥ y`
    pub fn to_bytes(&self) -> [u8; ECDSA_P256_PUBLIC_KEY_SIZE] {
        self.point.serialize_raw()
    }

    /// SEC1 uncompressed encoding `0x04 ∥ x ∥ y`
    pub fn to_sec1_uncompressed(&self) -> [u8; ec::P256_POINT_UNCOMPRESSED_SIZE] {
        self.point.serialize_uncompressed()
    }

    /// SEC1 compressed encoding `0x02/0x03 ∥ x`
    pub fn to_sec1_compressed(&self) -> [u8; ec::P256_POINT_COMPRESSED_SIZE] {
        self.point.serialize_compressed()
    }
}

impl EcdsaP256Signature {
    /// Build a signature from scalars, enforcing `r, s ∈ [1, n−1]`
    pub fn from_scalars(r: ec::Scalar, s: ec::Scalar) -> ApiResult<Self> {
        if r.is_zero() {
            return Err(ApiError::malformed_signature(
                "ECDSA-P256 signature",
                "r is zero",
            ));
        }
        if s.is_zero() {
            return Err(ApiError::malformed_signature(
                "ECDSA-P256 signature",
                "s is zero",
            ));
        }
        Ok(EcdsaP256Signature { r, s })
    }

    /// Decode the fixed 64-byte form `r ∥ s` (big-endian)
    pub fn decode_fixed(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ECDSA_P256_SIGNATURE_SIZE {
            return Err(ApiError::malformed_signature(
                "ECDSA-P256 signature",
                format!(
                    "expected {} bytes, got {}",
                    ECDSA_P256_SIGNATURE_SIZE,
                    bytes.len()
                ),
            ));
        }
        let (r_bytes, s_bytes) = bytes.split_at(ec::P256_SCALAR_SIZE);
        let r = ec::Scalar::deserialize(r_bytes).or_malformed_signature("ECDSA-P256 signature r")?;
        let s = ec::Scalar::deserialize(s_bytes).or_malformed_signature("ECDSA-P256 signature s")?;
        Ok(EcdsaP256Signature { r, s })
    }

    /// Decode an ASN.1 DER `SEQUENCE { INTEGER r, INTEGER s }`
    #[cfg(feature = "der")]
    pub fn decode_der(der: &[u8]) -> ApiResult<Self> {
        if der.len() > ECDSA_P256_DER_SIGNATURE_MAX_SIZE {
            return Err(ApiError::malformed_signature(
                "ECDSA-P256 DER signature",
                format!(
                    "at most {} bytes, got {}",
                    ECDSA_P256_DER_SIGNATURE_MAX_SIZE,
                    der.len()
                ),
            ));
        }
        let components = SignatureComponents::from_der(der)?;
        let r = component_to_scalar(&components.r, "ECDSA-P256 DER signature r")?;
        let s = component_to_scalar(&components.s, "ECDSA-P256 DER signature s")?;
        Ok(EcdsaP256Signature { r, s })
    }

    /// The `r` component
    pub fn r(&self) -> &ec::Scalar {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &ec::Scalar {
        &self.s
    }

    /// Fixed 64-byte encoding `r ∥ s`
    pub fn to_bytes(&self) -> [u8; ECDSA_P256_SIGNATURE_SIZE] {
        let mut out = [0u8; ECDSA_P256_SIGNATURE_SIZE];
        out[..ec::P256_SCALAR_SIZE].copy_from_slice(&self.r.serialize());
        out[ec::P256_SCALAR_SIZE..].copy_from_slice(&self.s.serialize());
        out
    }

    /// Minimal DER encoding, at most 72 bytes
    #[cfg(feature = "der")]
    pub fn to_der(&self) -> ApiResult<Vec<u8>> {
        SignatureComponents {
            r: self.r.serialize().to_vec(),
            s: self.s.serialize().to_vec(),
        }
        .to_der()
    }
}

/// Left-pad a DER magnitude to 32 bytes and range-check it
#[cfg(feature = "der")]
fn component_to_scalar(magnitude: &[u8], context: &'static str) -> ApiResult<ec::Scalar> {
    if magnitude.len() > ec::P256_SCALAR_SIZE {
        return Err(ApiError::malformed_signature(
            context,
            format!("integer wider than {} bytes", ec::P256_SCALAR_SIZE),
        ));
    }
    let mut bytes = [0u8; ec::P256_SCALAR_SIZE];
    bytes[ec::P256_SCALAR_SIZE - magnitude.len()..].copy_from_slice(magnitude);
    ec::Scalar::new(bytes).or_malformed_signature(context)
}

/// Convert a digest to an integer mod n
///
/// Digests longer than 32 bytes keep their leftmost 256 bits; shorter ones
/// are read as a big-endian integer.
fn digest_to_scalar(digest: &[u8]) -> ec::Scalar {
    let mut bytes = [0u8; ec::P256_SCALAR_SIZE];
    if digest.len() >= ec::P256_SCALAR_SIZE {
        bytes.copy_from_slice(&digest[..ec::P256_SCALAR_SIZE]);
    } else {
        bytes[ec::P256_SCALAR_SIZE - digest.len()..].copy_from_slice(digest);
    }
    ec::Scalar::from_bytes_reduced(&bytes)
}

impl SignatureVerifier for EcdsaP256 {
    type PublicKey = EcdsaP256PublicKey;
    type SignatureData = EcdsaP256Signature;

    fn name() -> &'static str {
        ALGORITHM
    }

    /// Verify an ECDSA signature
    ///
    /// Algorithm (FIPS 186-4, Section 6.4):
    /// 1. e = SHA-256(M), z = e mod n
    /// 2. w = s⁻¹ mod n
    /// 3. u₁ = zw mod n and u₂ = rw mod n
    /// 4. (x₁, y₁) = u₁·G + u₂·Q
    /// 5. If (x₁, y₁) = O, reject the signature
    /// 6. Accept the signature if and only if x₁ mod n = r
    ///
    /// Range checks on r and s happen when the signature is decoded.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<bool> {
        trace!("{}: verifying {}-byte message", ALGORITHM, message.len());
        let digest = Sha256::digest(message);
        Self::verify_digest(&digest_to_scalar(&digest), signature, public_key)
    }
}

impl EcdsaP256 {
    /// Verify against a caller-computed message digest
    pub fn verify_prehashed(
        digest: &[u8],
        signature: &EcdsaP256Signature,
        public_key: &EcdsaP256PublicKey,
    ) -> ApiResult<bool> {
        trace!("{}: verifying {}-byte digest", ALGORITHM, digest.len());
        Self::verify_digest(&digest_to_scalar(digest), signature, public_key)
    }

    /// Verify a raw 64-byte `r ∥ s` signature under a raw 64-byte `x ∥ y` key
    ///
    /// Decoding errors are returned as errors; a well-formed signature that
    /// does not verify is `Ok(false)`.
    pub fn verify_bytes(message: &[u8], signature: &[u8], public_key: &[u8]) -> ApiResult<bool> {
        let signature = EcdsaP256Signature::decode_fixed(signature).map_err(log_rejection)?;
        let public_key = EcdsaP256PublicKey::from_bytes(public_key).map_err(log_rejection)?;
        <Self as SignatureVerifier>::verify(message, &signature, &public_key)
    }

    /// Verify a DER-encoded signature under a raw 64-byte `x ∥ y` key
    #[cfg(feature = "der")]
    pub fn verify_der(message: &[u8], signature: &[u8], public_key: &[u8]) -> ApiResult<bool> {
        let signature = EcdsaP256Signature::decode_der(signature).map_err(log_rejection)?;
        let public_key = EcdsaP256PublicKey::from_bytes(public_key).map_err(log_rejection)?;
        <Self as SignatureVerifier>::verify(message, &signature, &public_key)
    }

    fn verify_digest(
        z: &ec::Scalar,
        signature: &EcdsaP256Signature,
        public_key: &EcdsaP256PublicKey,
    ) -> ApiResult<bool> {
        // w = s⁻¹ mod n; s ≠ 0 holds for every decoded signature
        let w = signature
            .s
            .inv_mod_n()
            .map_err(|e| ApiError::internal("ECDSA-P256 verify", e.to_string()))?;

        let u1 = z.mul_mod_n(&w);
        let u2 = signature.r.mul_mod_n(&w);

        let u1g = ec::scalar_mult_base_g(&u1);
        let u2q = ec::scalar_mult(&u2, public_key.point());
        let point = u1g.add(&u2q);

        if point.is_identity() {
            debug!("{}: rejected, u1·G + u2·Q is the identity", ALGORITHM);
            return Ok(false);
        }

        // v = x₁ mod n
        let v = ec::Scalar::from_bytes_reduced(&point.x_coordinate_bytes());
        let valid = ct_eq(v.serialize(), signature.r.serialize());
        if !valid {
            debug!("{}: rejected, x(R) mod n does not match r", ALGORITHM);
        }
        Ok(valid)
    }
}

fn log_rejection(err: ApiError) -> ApiError {
    debug!("{}: rejected input in {}: {}", ALGORITHM, err.context(), err);
    err
}
