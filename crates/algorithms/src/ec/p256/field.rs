//! P-256 field arithmetic implementation
//!
//! Elements of 𝔽ₚ with p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1, stored as eight
//! little-endian `u32` limbs and kept fully reduced after every operation.

use crate::ec::p256::constants::P256_FIELD_ELEMENT_SIZE;
use crate::ec::p256::limbs::{adc, mul_wide, sbb};
use crate::error::{Error, Result};
use ecverify_internal::constant_time::{ct_is_zero, ct_select_limbs};
use ecverify_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Number of 32-bit limbs in a field element
const NLIMBS: usize = 8;

/// Curve coefficient b, little-endian limbs
pub(crate) const B_LIMBS: [u32; NLIMBS] = [
    0x27D2_604B,
    0x3BCE_3C3E,
    0xCC53_B0F6,
    0x651D_06B0,
    0x7698_86BC,
    0xB3EB_BD55,
    0xAA3A_93E7,
    0x5AC6_35D8,
];

/// p − 2, big-endian, the Fermat inversion exponent
const P_MINUS_2: [u8; P256_FIELD_ELEMENT_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFD,
];

/// (p + 1) / 4, big-endian; p ≡ 3 (mod 4) so a^((p+1)/4) is a square root
const SQRT_EXP: [u8; P256_FIELD_ELEMENT_SIZE] = [
    0x3F, 0xFF, 0xFF, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// P-256 field element, always in `[0, p)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(ct_select_limbs(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl FieldElement {
    /// The field prime p, little-endian limbs
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0001,
        0xFFFF_FFFF,
    ];

    /// Curve coefficient a = −3 ≡ p − 3
    pub(crate) const A_M3: [u32; NLIMBS] = [
        0xFFFF_FFFC,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0001,
        0xFFFF_FFFF,
    ];

    /// The additive identity
    pub fn zero() -> Self {
        FieldElement([0; NLIMBS])
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Lift a small integer into the field
    pub fn from_u32(value: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = value;
        FieldElement(limbs)
    }

    /// Decode 32 big-endian bytes, rejecting values ≥ p
    pub fn from_bytes(bytes: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = be_bytes_to_limbs(bytes);
        let (_, borrow) = sbb(&limbs, &Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param("FieldElement P-256", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Decode any 32-byte big-endian value, reducing it into `[0, p)`
    ///
    /// 2²⁵⁶ < 2p, so a single conditional subtraction suffices.
    pub fn from_bytes_reduced(bytes: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Self {
        let limbs = be_bytes_to_limbs(bytes);
        let (reduced, borrow) = sbb(&limbs, &Self::MOD_LIMBS);
        FieldElement(ct_select_limbs(
            &limbs,
            &reduced,
            Choice::from((borrow ^ 1) as u8),
        ))
    }

    /// Encode as 32 big-endian bytes
    pub fn to_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Constant-time zero test
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        ct_is_zero(&self.0).into()
    }

    /// Parity of the canonical representative
    #[inline(always)]
    pub fn is_odd(&self) -> bool {
        (self.0[0] & 1) == 1
    }

    /// (self + other) mod p
    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc(&self.0, &other.0);
        let (reduced, borrow) = sbb(&sum, &Self::MOD_LIMBS);
        // reduce when the sum overflowed 2²⁵⁶ or is already ≥ p
        let need_reduce = carry | (borrow ^ 1);
        FieldElement(ct_select_limbs(
            &sum,
            &reduced,
            Choice::from(need_reduce as u8),
        ))
    }

    /// (self − other) mod p
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb(&self.0, &other.0);
        let (wrapped, _) = adc(&diff, &Self::MOD_LIMBS);
        FieldElement(ct_select_limbs(&diff, &wrapped, Choice::from(borrow as u8)))
    }

    /// (self · other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        Self::reduce_wide(mul_wide(&self.0, &other.0))
    }

    /// self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// −self mod p
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Multiplicative inverse by Fermat's little theorem: a^(p−2)
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero {
                context: "P-256 field element",
            });
        }
        Ok(self.pow(&P_MINUS_2))
    }

    /// Square root, if one exists
    ///
    /// Either root may be returned; callers pick the parity they need.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow(&SQRT_EXP);
        if root.square().ct_eq(self).into() {
            Some(root)
        } else {
            None
        }
    }

    /// Left-to-right square-and-multiply; the exponent is a public constant
    fn pow(&self, exp_be: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Self {
        let mut result = Self::one();
        for &byte in exp_be.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// NIST fast reduction of a 512-bit product (FIPS 186-4 D.2.3)
    ///
    /// With the product split into 32-bit words c₀..c₁₅:
    /// t = s₁ + 2s₂ + 2s₃ + s₄ + s₅ − d₁ − d₂ − d₃ − d₄ (mod p).
    #[allow(clippy::needless_range_loop)]
    fn reduce_wide(wide: [u32; 16]) -> Self {
        let c = wide.map(|w| w as i64);

        let s1 = [c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]];
        let s2 = [0, 0, 0, c[11], c[12], c[13], c[14], c[15]];
        let s3 = [0, 0, 0, c[12], c[13], c[14], c[15], 0];
        let s4 = [c[8], c[9], c[10], 0, 0, 0, c[14], c[15]];
        let s5 = [c[9], c[10], c[11], c[13], c[14], c[15], c[13], c[8]];
        let d1 = [c[11], c[12], c[13], 0, 0, 0, c[8], c[10]];
        let d2 = [c[12], c[13], c[14], c[15], 0, 0, c[9], c[11]];
        let d3 = [c[13], c[14], c[15], c[8], c[9], c[10], 0, c[12]];
        let d4 = [c[14], c[15], 0, c[9], c[10], c[11], 0, c[13]];

        let mut acc = [0i64; NLIMBS];
        for i in 0..NLIMBS {
            acc[i] = s1[i] + 2 * s2[i] + 2 * s3[i] + s4[i] + s5[i]
                - d1[i]
                - d2[i]
                - d3[i]
                - d4[i];
        }

        Self::fold(acc)
    }

    /// Normalise signed limb accumulators into `[0, p)`
    ///
    /// A carry `t` out of limb 7 stands for t·2²⁵⁶ ≡ t·(2²²⁴ − 2¹⁹² − 2⁹⁶ + 1).
    /// The initial carry lies in [−4, 6]; after two folds it is zero, so three
    /// fixed passes always suffice.
    fn fold(mut acc: [i64; NLIMBS]) -> Self {
        let mut carry = 0i64;
        for _ in 0..3 {
            carry = 0;
            for limb in acc.iter_mut() {
                let v = *limb + carry;
                *limb = v & 0xFFFF_FFFF;
                carry = v >> 32;
            }
            acc[0] += carry;
            acc[3] -= carry;
            acc[6] -= carry;
            acc[7] += carry;
        }
        debug_assert_eq!(carry, 0);

        let mut limbs = [0u32; NLIMBS];
        for (limb, &a) in limbs.iter_mut().zip(acc.iter()) {
            *limb = a as u32;
        }

        // value < 2²⁵⁶ < 2p: one conditional subtraction
        let (reduced, borrow) = sbb(&limbs, &Self::MOD_LIMBS);
        FieldElement(ct_select_limbs(
            &limbs,
            &reduced,
            Choice::from((borrow ^ 1) as u8),
        ))
    }
}
