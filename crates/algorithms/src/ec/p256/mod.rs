//! NIST P-256 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ − 3x + b over the prime field 𝔽ₚ where:
//! - p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1 (NIST P-256 prime)
//! - n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! The implementation uses:
//! - Schoolbook limb multiplication with NIST fast reduction for 𝔽ₚ
//! - Shift-and-subtract reduction for scalars modulo n
//! - Jacobian projective coordinates for point operations
//! - Double-and-add scalar multiplication with constant-time point selection

mod constants;
mod field;
mod limbs;
mod point;
mod scalar;

pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_RAW_SIZE,
    P256_POINT_UNCOMPRESSED_SIZE, P256_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use ecverify_params::traditional::ecdsa::NIST_P256;
use subtle::Choice;

/// Get the standard base point G of the P-256 curve
pub fn base_point_g() -> Point {
    // standard coordinates are below p
    Point {
        is_identity: Choice::from(0),
        x: FieldElement::from_bytes_reduced(&NIST_P256.g_x),
        y: FieldElement::from_bytes_reduced(&NIST_P256.g_y),
    }
}

/// Scalar multiplication with the base point: scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}
