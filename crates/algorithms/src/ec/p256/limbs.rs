//! Carry-propagating limb arithmetic shared by the field and scalar types
//!
//! Limb arrays are little-endian: index 0 holds the least-significant word.

/// N-limb addition with carry
#[inline(always)]
pub(crate) fn adc<const N: usize>(a: &[u32; N], b: &[u32; N]) -> ([u32; N], u32) {
    let mut r = [0u32; N];
    let mut carry = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64) + (b_limb as u64) + carry;
        *r_limb = tmp as u32;
        carry = tmp >> 32;
    }
    (r, carry as u32)
}

/// N-limb subtraction with borrow
///
/// Returns `(a - b mod 2^(32N), borrow)`; `borrow == 1` iff `a < b`.
#[inline(always)]
pub(crate) fn sbb<const N: usize>(a: &[u32; N], b: &[u32; N]) -> ([u32; N], u32) {
    let mut r = [0u32; N];
    let mut borrow = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64)
            .wrapping_sub(b_limb as u64)
            .wrapping_sub(borrow);
        *r_limb = tmp as u32;
        borrow = (tmp >> 63) & 1; // 1 if we wrapped
    }
    (r, borrow as u32)
}

/// Schoolbook 8×8 → 16-limb product
#[inline(always)]
pub(crate) fn mul_wide(a: &[u32; 8], b: &[u32; 8]) -> [u32; 16] {
    let mut wide = [0u32; 16];
    for (i, &a_limb) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &b_limb) in b.iter().enumerate() {
            // (2³²−1) + (2³²−1)² + (2³²−1) = 2⁶⁴ − 1, never overflows
            let tmp = wide[i + j] as u64 + (a_limb as u64) * (b_limb as u64) + carry;
            wide[i + j] = tmp as u32;
            carry = tmp >> 32;
        }
        wide[i + 8] = carry as u32;
    }
    wide
}
