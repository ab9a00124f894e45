//! Composite forms built from two narrower hardware primitives
//! ==========================================================
//! Lane hardware in the middle tiers has no 64-bit rotate or byte reverse,
//! but it does have:
//!
//! * a **32-bit funnel shifter** that shifts the 64-bit concatenation `hi:lo`
//!   and returns one 32-bit half (wrap mode: the amount is taken mod 32);
//! * a **byte permute** that picks any four bytes out of the 8-byte pool
//!   `y:x` according to a nibble selector.
//!
//! The functions below model those two instructions exactly and derive the
//! wide primitives from them. The models are portable, so the same code runs
//! on the host where it is checked against [`crate::reference`].

use crate::reference::{compose64, hi32, lo32};

// ---------------------------------------------------------------------------
// Hardware building blocks
// ---------------------------------------------------------------------------

/// Left funnel shift: high word of `(hi:lo) << (n mod 32)`.
#[inline(always)]
pub fn funnel_shl(lo: u32, hi: u32, n: u32) -> u32 {
    ((compose64(lo, hi) << (n & 31)) >> 32) as u32
}

/// Right funnel shift: low word of `(hi:lo) >> (n mod 32)`.
#[inline(always)]
pub fn funnel_shr(lo: u32, hi: u32, n: u32) -> u32 {
    (compose64(lo, hi) >> (n & 31)) as u32
}

/// Byte permute. Result byte `i` is byte `(selector >> 4i) & 7` of the pool
/// `y:x`, where bytes 0..4 come from `x` and 4..8 from `y`.
#[inline(always)]
pub fn byte_perm(x: u32, y: u32, selector: u32) -> u32 {
    let pool = compose64(x, y);
    let mut out = 0u32;
    for i in 0..4u32 {
        let idx = (selector >> (4 * i)) & 0x7;
        let byte = (pool >> (idx * 8)) as u8;
        out |= (byte as u32) << (8 * i);
    }
    out
}

/// Selector that reverses the four bytes of `x`.
pub const REVERSE_SELECTOR: u32 = 0x0123;

// ---------------------------------------------------------------------------
// Rotates
// ---------------------------------------------------------------------------

// With both sources equal the funnel shifter is a plain 32-bit rotate.

#[inline(always)]
pub fn rotl32(x: u32, n: u32) -> u32 {
    funnel_shl(x, x, n)
}

#[inline(always)]
pub fn rotr32(x: u32, n: u32) -> u32 {
    funnel_shr(x, x, n)
}

/// 64-bit rotate from two funnel shifts. Amounts of 32 and above swap the
/// halves first; the shifter's wrap mode supplies the remaining `n - 32`.
#[inline(always)]
pub fn rotl64(x: u64, n: u32) -> u64 {
    let (lo, hi) = (lo32(x), hi32(x));
    if n < 32 {
        compose64(funnel_shl(hi, lo, n), funnel_shl(lo, hi, n))
    } else {
        compose64(funnel_shl(lo, hi, n), funnel_shl(hi, lo, n))
    }
}

#[inline(always)]
pub fn rotr64(x: u64, n: u32) -> u64 {
    let (lo, hi) = (lo32(x), hi32(x));
    if n < 32 {
        compose64(funnel_shr(lo, hi, n), funnel_shr(hi, lo, n))
    } else {
        compose64(funnel_shr(hi, lo, n), funnel_shr(lo, hi, n))
    }
}

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn swab32(x: u32) -> u32 {
    byte_perm(x, x, REVERSE_SELECTOR)
}

/// Input `77665544 33221100`, output `00112233 44556677`: each half is
/// reversed by one permute and the halves trade places.
#[inline(always)]
pub fn swab64(x: u64) -> u64 {
    compose64(
        byte_perm(hi32(x), 0, REVERSE_SELECTOR),
        byte_perm(lo32(x), 0, REVERSE_SELECTOR),
    )
}
