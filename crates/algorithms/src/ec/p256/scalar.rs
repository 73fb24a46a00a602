//! P-256 scalar arithmetic operations

use crate::ec::p256::constants::P256_SCALAR_SIZE;
use crate::ec::p256::limbs::{adc, mul_wide, sbb};
use crate::error::{validate, Error, Result};
use ecverify_internal::constant_time::{ct_is_zero, ct_select_limbs};
use ecverify_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

const NLIMBS: usize = 8;

/// P-256 scalar value for use in elliptic curve operations
///
/// Represents an integer modulo the curve order n, stored as little-endian
/// limbs and always fully reduced.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug, PartialEq, Eq)]
pub struct Scalar([u32; NLIMBS]);

impl Scalar {
    /// The curve order n, little-endian limbs
    pub(crate) const N_LIMBS: [u32; NLIMBS] = [
        0xFC63_2551,
        0xF3B9_CAC2,
        0xA717_9E84,
        0xBCE6_FAAD,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0xFFFF_FFFF,
    ];

    /// n − 2, the Fermat inversion exponent
    const N_MINUS_2: [u32; NLIMBS] = [
        0xFC63_254F,
        0xF3B9_CAC2,
        0xA717_9E84,
        0xBCE6_FAAD,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0xFFFF_FFFF,
    ];

    /// Create a new scalar in `[1, n−1]` from big-endian bytes
    ///
    /// Rejects zero and any value ≥ n without reducing.
    pub fn new(data: [u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let scalar = Self::from_bytes(&data)?;
        if scalar.is_zero() {
            return Err(Error::param("P-256 Scalar", "Scalar cannot be zero"));
        }
        Ok(scalar)
    }

    /// Decode big-endian bytes, rejecting values ≥ n (zero is accepted)
    pub fn from_bytes(bytes: &[u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let limbs = be_bytes_to_limbs(bytes);
        let (_, borrow) = sbb(&limbs, &Self::N_LIMBS);
        if borrow == 0 {
            return Err(Error::param("P-256 Scalar", "Value ≥ group order"));
        }
        Ok(Scalar(limbs))
    }

    /// Decode any 256-bit big-endian value, reducing it modulo n
    ///
    /// 2²⁵⁶ < 2n, so a single conditional subtraction suffices.
    pub fn from_bytes_reduced(bytes: &[u8; P256_SCALAR_SIZE]) -> Self {
        let limbs = be_bytes_to_limbs(bytes);
        let (reduced, borrow) = sbb(&limbs, &Self::N_LIMBS);
        Scalar(ct_select_limbs(
            &limbs,
            &reduced,
            Choice::from((borrow ^ 1) as u8),
        ))
    }

    /// Deserialize a scalar from a byte slice, validating length and range
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 Scalar", bytes.len(), P256_SCALAR_SIZE)?;
        let mut scalar_bytes = [0u8; P256_SCALAR_SIZE];
        scalar_bytes.copy_from_slice(bytes);
        Self::new(scalar_bytes)
    }

    /// Serialize the scalar to 32 big-endian bytes
    pub fn serialize(&self) -> [u8; P256_SCALAR_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// The scalar 0
    pub fn zero() -> Self {
        Scalar([0; NLIMBS])
    }

    /// The scalar 1
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Lift a small integer into the scalar field
    pub fn from_u32(value: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = value;
        Scalar(limbs)
    }

    /// Check if the scalar represents zero
    pub fn is_zero(&self) -> bool {
        ct_is_zero(&self.0).into()
    }

    /// Bit `i` of the scalar (bit 0 is least significant)
    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> Choice {
        Choice::from(((self.0[i / 32] >> (i % 32)) & 1) as u8)
    }

    /// Add two scalars modulo n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        let (sum, carry) = adc(&self.0, &other.0);
        let (reduced, borrow) = sbb(&sum, &Self::N_LIMBS);
        let need_reduce = carry | (borrow ^ 1);
        Scalar(ct_select_limbs(
            &sum,
            &reduced,
            Choice::from(need_reduce as u8),
        ))
    }

    /// Subtract scalars modulo n
    pub fn sub_mod_n(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb(&self.0, &other.0);
        let (wrapped, _) = adc(&diff, &Self::N_LIMBS);
        Scalar(ct_select_limbs(&diff, &wrapped, Choice::from(borrow as u8)))
    }

    /// Multiply two scalars modulo n
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        Scalar(Self::reduce_wide(&mul_wide(&self.0, &other.0)))
    }

    /// Square modulo n
    pub fn square(&self) -> Self {
        self.mul_mod_n(self)
    }

    /// Compute multiplicative inverse modulo n
    ///
    /// Uses Fermat's little theorem: a^(n−2) ≡ a^(−1) (mod n).
    pub fn inv_mod_n(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero {
                context: "P-256 Scalar",
            });
        }

        let mut result = Self::one();
        // exponent is public
        for i in (0..256).rev() {
            result = result.square();
            if (Self::N_MINUS_2[i / 32] >> (i % 32)) & 1 == 1 {
                result = result.mul_mod_n(self);
            }
        }
        Ok(result)
    }

    /// Compute the additive inverse modulo n
    pub fn negate(&self) -> Self {
        Self::zero().sub_mod_n(self)
    }

    /// Reduce a 512-bit product modulo n
    ///
    /// Binary long division: the remainder is shifted left one bit at a time
    /// and n subtracted whenever it fits, with a ninth limb holding the bit
    /// shifted out of the top. The remainder stays below n after every step.
    fn reduce_wide(wide: &[u32; 16]) -> [u32; NLIMBS] {
        let mut n9 = [0u32; NLIMBS + 1];
        n9[..NLIMBS].copy_from_slice(&Self::N_LIMBS);

        let mut rem = [0u32; NLIMBS + 1];
        for i in (0..512).rev() {
            let mut carry = (wide[i / 32] >> (i % 32)) & 1;
            for limb in rem.iter_mut() {
                let next = *limb >> 31;
                *limb = (*limb << 1) | carry;
                carry = next;
            }
            let (diff, borrow) = sbb(&rem, &n9);
            rem = ct_select_limbs(&rem, &diff, Choice::from((borrow ^ 1) as u8));
        }

        let mut out = [0u32; NLIMBS];
        out.copy_from_slice(&rem[..NLIMBS]);
        rem.zeroize();
        out
    }
}
