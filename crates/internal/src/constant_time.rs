//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Runs in time independent of the contents (lengths are public).
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns `Choice(1)` iff every limb is zero
pub fn ct_is_zero(limbs: &[u32]) -> Choice {
    let acc = limbs.iter().fold(0u32, |acc, &w| acc | w);
    acc.ct_eq(&0)
}

/// Constant-time limb-array selection
///
/// Returns `a` if `choice` is 0, `b` if `choice` is 1.
pub fn ct_select_limbs<const N: usize>(a: &[u32; N], b: &[u32; N], choice: Choice) -> [u32; N] {
    let mut out = [0u32; N];
    for ((o, x), y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = u32::conditional_select(x, y, choice);
    }
    out
}
