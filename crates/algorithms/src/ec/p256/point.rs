//! P-256 elliptic curve point operations

use crate::ec::p256::{
    constants::{
        P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_RAW_SIZE,
        P256_POINT_UNCOMPRESSED_SIZE,
    },
    field::{FieldElement, B_LIMBS},
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use subtle::{Choice, ConditionallySelectable};

/// Format of a serialized elliptic-curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Identity point (all zeros)
    Identity,
    /// Uncompressed: 0x04 ∥ x ∥ y
    Uncompressed,
    /// Compressed: 0x02/0x03 ∥ x
    Compressed,
}

/// Point on the P-256 curve in affine coordinates, or the identity
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian coordinates (X:Y:Z), x = X/Z², y = Y/Z³
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Create a new affine point from big-endian coordinates
    ///
    /// Fails if either coordinate is ≥ p or the point is not on the curve.
    pub fn new_uncompressed(
        x_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x_bytes)
            .map_err(|_| Error::param("P-256 Point", "x-coordinate ≥ field prime"))?;
        let y_fe = FieldElement::from_bytes(y_bytes)
            .map_err(|_| Error::param("P-256 Point", "y-coordinate ≥ field prime"))?;
        Self::from_affine(x_fe, y_fe)
    }

    /// Create a point from field coordinates, checking the curve equation
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        if !Self::is_on_curve(&x, &y) {
            return Err(Error::param("P-256 Point", "Point not on curve"));
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Affine x-coordinate (zero for the identity)
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// Affine y-coordinate (zero for the identity)
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Extract x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Detect serialized point format
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        if bytes.is_empty() {
            return Err(Error::param("P-256 Point", "Empty encoding"));
        }
        match (bytes[0], bytes.len()) {
            (0x00, P256_POINT_UNCOMPRESSED_SIZE) | (0x00, P256_POINT_COMPRESSED_SIZE) => {
                if bytes.iter().all(|&b| b == 0) {
                    Ok(PointFormat::Identity)
                } else {
                    Err(Error::param("P-256 Point", "Invalid identity encoding"))
                }
            }
            (0x04, P256_POINT_UNCOMPRESSED_SIZE) => Ok(PointFormat::Uncompressed),
            (0x02 | 0x03, P256_POINT_COMPRESSED_SIZE) => Ok(PointFormat::Compressed),
            _ => Err(Error::param("P-256 Point", "Unknown or malformed format")),
        }
    }

    /// Serialize as raw coordinates: x ∥ y (identity encodes as all zeros)
    pub fn serialize_raw(&self) -> [u8; P256_POINT_RAW_SIZE] {
        let mut out = [0u8; P256_POINT_RAW_SIZE];
        if self.is_identity() {
            return out;
        }
        out[..P256_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[P256_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize raw coordinates x ∥ y
    ///
    /// The raw form has no identity encoding; all zeros is simply off-curve.
    pub fn deserialize_raw(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 Raw Point", bytes.len(), P256_POINT_RAW_SIZE)?;
        let mut xb = [0u8; P256_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; P256_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[..P256_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[P256_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&xb, &yb)
    }

    /// Serialize this point as uncompressed: 0x04 ∥ x ∥ y
    pub fn serialize_uncompressed(&self) -> [u8; P256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; P256_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out; // all zeros
        }
        out[0] = 0x04;
        out[1..].copy_from_slice(&self.serialize_raw());
        out
    }

    /// Deserialize from uncompressed bytes (0x04 ∥ x ∥ y), or all-zeros for identity
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 Point", bytes.len(), P256_POINT_UNCOMPRESSED_SIZE)?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        if bytes[0] != 0x04 {
            return Err(Error::param(
                "P-256 Point",
                "Invalid prefix for uncompressed",
            ));
        }
        Self::deserialize_raw(&bytes[1..])
    }

    /// Serialize this point in compressed form: 0x02/0x03 ∥ x
    pub fn serialize_compressed(&self) -> [u8; P256_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; P256_POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out; // all zeros
        }
        out[0] = if self.y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Deserialize from compressed bytes (0x02/0x03 ∥ x) or all-zeros for identity
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "P-256 Compressed Point",
            bytes.len(),
            P256_POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != 0x02 && tag != 0x03 {
            return Err(Error::param("P-256 Point", "Invalid compressed prefix"));
        }
        let mut xb = [0u8; P256_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..]);
        let x_fe = FieldElement::from_bytes(&xb)
            .map_err(|_| Error::param("P-256 Point", "Invalid compressed point: x not in field"))?;
        let y_candidate = Self::curve_rhs(&x_fe)
            .sqrt()
            .ok_or_else(|| Error::param("P-256 Point", "Invalid compressed point: no sqrt"))?;
        let want_odd = tag == 0x03;
        let y_final = if y_candidate.is_odd() == want_odd {
            y_candidate
        } else {
            y_candidate.negate()
        };
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_final,
        })
    }

    /// Add two points (group law)
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Double this point: 2P
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Negate this point: −P = (x, −y)
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        Point {
            is_identity: Choice::from(0),
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication: scalar · P
    ///
    /// MSB-first double-and-add. The addition is computed for every bit and
    /// kept or discarded with a constant-time select.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        if self.is_identity() {
            return Self::identity();
        }
        let base = self.to_projective();
        let mut acc = ProjectivePoint::identity();
        for i in (0..256).rev() {
            acc = acc.double();
            let sum = acc.add(&base);
            acc = ProjectivePoint::conditional_select(&acc, &sum, scalar.bit(i));
        }
        acc.to_affine()
    }

    /// Check that (x, y) satisfies y² = x³ − 3x + b
    pub fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        y.square() == Self::curve_rhs(x)
    }

    /// x³ − 3x + b
    fn curve_rhs(x: &FieldElement) -> FieldElement {
        let x3 = x.square().mul(x);
        let a = FieldElement(FieldElement::A_M3);
        let b = FieldElement(B_LIMBS);
        x3.add(&a.mul(x)).add(&b)
    }

    /// Convert affine to Jacobian for intermediate computations
    fn to_projective(self) -> ProjectivePoint {
        if self.is_identity() {
            ProjectivePoint::identity()
        } else {
            ProjectivePoint {
                is_identity: Choice::from(0),
                x: self.x,
                y: self.y,
                z: FieldElement::one(),
            }
        }
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            is_identity: (a.is_identity & !choice) | (b.is_identity & choice),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ProjectivePoint {
    /// Identity in Jacobian form: (0 : 1 : 0)
    pub fn identity() -> Self {
        ProjectivePoint {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Point addition (Jacobian coordinates)
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity.into() {
            return *other;
        }
        if other.is_identity.into() {
            return *self;
        }

        // Z₁², Z₂², Z₁³, Z₂³
        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let z1_cu = z1_sq.mul(&self.z);
        let z2_cu = z2_sq.mul(&other.z);

        let u1 = self.x.mul(&z2_sq); // X₁·Z₂²
        let u2 = other.x.mul(&z1_sq); // X₂·Z₁²
        let s1 = self.y.mul(&z2_cu); // Y₁·Z₂³
        let s2 = other.y.mul(&z1_cu); // Y₂·Z₁³

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            // P + (−P)
            return ProjectivePoint::identity();
        }

        let h2 = h.square();
        let h3 = h2.mul(&h);
        let v = u1.mul(&h2);

        // X₃ = r² − h³ − 2v
        let x3 = r.square().sub(&h3).sub(&v.add(&v));

        // Y₃ = r·(v − X₃) − s1·h³
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&h3));

        // Z₃ = Z₁·Z₂·h
        let z3 = self.z.mul(&other.z).mul(&h);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point doubling (Jacobian coordinates, a = −3)
    pub fn double(&self) -> Self {
        if self.is_identity.into() {
            return *self;
        }
        if self.y.is_zero() {
            return ProjectivePoint::identity();
        }

        //   δ = Z², γ = Y², β = X·γ
        //   α = 3·(X − δ)·(X + δ)
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x.mul(&gamma);

        let alpha = self
            .x
            .sub(&delta)
            .mul(&self.x.add(&delta))
            .mul(&FieldElement::from_u32(3));

        let two_beta = beta.add(&beta);
        let four_beta = two_beta.add(&two_beta);
        let eight_beta = four_beta.add(&four_beta);

        // X₃ = α² − 8β
        let x3 = alpha.square().sub(&eight_beta);

        // Z₃ = (Y + Z)² − γ − δ
        let z3 = self.y.add(&self.z).square().sub(&gamma).sub(&delta);

        // Y₃ = α·(4β − X₃) − 8γ²
        let gamma_sq = gamma.square();
        let two_gamma_sq = gamma_sq.add(&gamma_sq);
        let four_gamma_sq = two_gamma_sq.add(&two_gamma_sq);
        let eight_gamma_sq = four_gamma_sq.add(&four_gamma_sq);
        let y3 = alpha.mul(&four_beta.sub(&x3)).sub(&eight_gamma_sq);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Convert Jacobian back to affine coordinates
    pub fn to_affine(&self) -> Point {
        if self.is_identity.into() {
            return Point::identity();
        }
        // Z = 0 also denotes the point at infinity
        let z_inv = match self.z.invert() {
            Ok(z_inv) => z_inv,
            Err(_) => return Point::identity(),
        };
        let z_inv_sq = z_inv.square();
        let z_inv_cu = z_inv_sq.mul(&z_inv);
        Point {
            is_identity: Choice::from(0),
            x: self.x.mul(&z_inv_sq),
            y: self.y.mul(&z_inv_cu),
        }
    }
}
