//! Public primitives
//! =================
//! The operations hash kernels compose. Each one forwards to the kernel
//! table resolved for this build ([`crate::config::PLAN`]); because that
//! table is a constant, the call folds to the selected implementation.
//!
//! All operations are pure and keep the width of their operands. Rotate
//! amounts must satisfy `0 <= n < width`; this is not checked.

use crate::config::PLAN;
use crate::dispatch::Kernels;

/// Kernel table for the current build.
pub const ACTIVE: Kernels = Kernels::from_plan(&PLAN);

// ---------------------------------------------------------------------------
// Rotates
// ---------------------------------------------------------------------------

/// Circular left rotate of a 32-bit word.
#[inline(always)]
pub fn rotl32(x: u32, n: u32) -> u32 {
    (ACTIVE.rotl32)(x, n)
}

/// Circular right rotate of a 32-bit word.
#[inline(always)]
pub fn rotr32(x: u32, n: u32) -> u32 {
    (ACTIVE.rotr32)(x, n)
}

/// Circular left rotate of a 64-bit word.
///
/// ```
/// assert_eq!(lanebits::rotl64(0x0123_4567_89AB_CDEF, 8), 0x2345_6789_ABCD_EF01);
/// ```
#[inline(always)]
pub fn rotl64(x: u64, n: u32) -> u64 {
    (ACTIVE.rotl64)(x, n)
}

/// Circular right rotate of a 64-bit word.
#[inline(always)]
pub fn rotr64(x: u64, n: u32) -> u64 {
    (ACTIVE.rotr64)(x, n)
}

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn swab32(x: u32) -> u32 {
    (ACTIVE.swab32)(x)
}

/// ```
/// assert_eq!(lanebits::swab64(0x0123_4567_89AB_CDEF), 0xEFCD_AB89_6745_2301);
/// ```
#[inline(always)]
pub fn swab64(x: u64) -> u64 {
    (ACTIVE.swab64)(x)
}

// ---------------------------------------------------------------------------
// Half words
// ---------------------------------------------------------------------------

/// Joins two halves; `lo` ends up in bits 0..32.
#[inline(always)]
pub fn compose64(lo: u32, hi: u32) -> u64 {
    (ACTIVE.compose64)(lo, hi)
}

#[inline(always)]
pub fn lo32(x: u64) -> u32 {
    (ACTIVE.lo32)(x)
}

#[inline(always)]
pub fn hi32(x: u64) -> u32 {
    (ACTIVE.hi32)(x)
}

/// Overwrites the low half of `x`.
#[inline(always)]
pub fn replace_lo(x: u64, lo: u32) -> u64 {
    (ACTIVE.replace_lo)(x, lo)
}

/// Overwrites the high half of `x`.
#[inline(always)]
pub fn replace_hi(x: u64, hi: u32) -> u64 {
    (ACTIVE.replace_hi)(x, hi)
}

// ---------------------------------------------------------------------------
// XOR and fused combinators
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn xor2(a: u64, b: u64) -> u64 {
    (ACTIVE.xor2)(a, b)
}

#[inline(always)]
pub fn xor3(a: u64, b: u64, c: u64) -> u64 {
    (ACTIVE.xor3)(a, b, c)
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn xor8(a: u64, b: u64, c: u64, d: u64, e: u64, f: u64, g: u64, h: u64) -> u64 {
    (ACTIVE.xor8)(a, b, c, d, e, f, g, h)
}

/// `((c ^ b) & a) ^ c`, the select step of Whirlpool-style rounds.
#[inline(always)]
pub fn xandx(a: u64, b: u64, c: u64) -> u64 {
    (ACTIVE.xandx)(a, b, c)
}

/// `(a & b) | ((a | b) & c)`, bitwise majority.
#[inline(always)]
pub fn andor(a: u64, b: u64, c: u64) -> u64 {
    (ACTIVE.andor)(a, b, c)
}

// ---------------------------------------------------------------------------
// Width-masked identity and shifts
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn mask32(x: u32) -> u32 {
    (ACTIVE.mask32)(x)
}

#[inline(always)]
pub fn mask64(x: u64) -> u64 {
    (ACTIVE.mask64)(x)
}

/// Left shift by `n mod 64`, truncated to 64 bits.
#[inline(always)]
pub fn shl_masked(x: u64, n: u32) -> u64 {
    (ACTIVE.shl_masked)(x, n)
}

/// Right shift by `n mod 64`.
#[inline(always)]
pub fn shr_masked(x: u64, n: u32) -> u64 {
    (ACTIVE.shr_masked)(x, n)
}
