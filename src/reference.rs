//! Portable reference formulas
//! ===========================
//! Every primitive written with nothing but shifts, masks, `|`, `^` and `&`.
//! This is the host execution path and the oracle every accelerated variant
//! is checked against, so clarity wins over speed here.
//!
//! Rotate amounts must satisfy `0 <= n < width`; nothing here validates it.

// ---------------------------------------------------------------------------
// Width masks
// ---------------------------------------------------------------------------

pub const MASK32: u32 = 0xFFFF_FFFF;
pub const MASK64: u64 = 0xFFFF_FFFF_FFFF_FFFF;

// ---------------------------------------------------------------------------
// Rotates
// ---------------------------------------------------------------------------

// The complementary shift is masked so that `n == 0` stays a no-op instead of
// shifting by the full width.

#[inline(always)]
pub fn rotl32(x: u32, n: u32) -> u32 {
    ((x << n) | (x >> (32u32.wrapping_sub(n) & 31))) & MASK32
}

#[inline(always)]
pub fn rotr32(x: u32, n: u32) -> u32 {
    ((x >> n) | (x << (32u32.wrapping_sub(n) & 31))) & MASK32
}

#[inline(always)]
pub fn rotl64(x: u64, n: u32) -> u64 {
    (x << n) | (x >> (64u32.wrapping_sub(n) & 63))
}

#[inline(always)]
pub fn rotr64(x: u64, n: u32) -> u64 {
    (x >> n) | (x << (64u32.wrapping_sub(n) & 63))
}

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn swab32(x: u32) -> u32 {
    ((x << 24) & 0xff00_0000)
        | ((x << 8) & 0x00ff_0000)
        | ((x >> 8) & 0x0000_ff00)
        | ((x >> 24) & 0x0000_00ff)
}

#[inline(always)]
pub fn swab64(x: u64) -> u64 {
    ((x & 0xff00_0000_0000_0000) >> 56)
        | ((x & 0x00ff_0000_0000_0000) >> 40)
        | ((x & 0x0000_ff00_0000_0000) >> 24)
        | ((x & 0x0000_00ff_0000_0000) >> 8)
        | ((x & 0x0000_0000_ff00_0000) << 8)
        | ((x & 0x0000_0000_00ff_0000) << 24)
        | ((x & 0x0000_0000_0000_ff00) << 40)
        | ((x & 0x0000_0000_0000_00ff) << 56)
}

// ---------------------------------------------------------------------------
// Half words
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn compose64(lo: u32, hi: u32) -> u64 {
    (lo as u64) | ((hi as u64) << 32)
}

#[inline(always)]
pub fn lo32(x: u64) -> u32 {
    (x & MASK32 as u64) as u32
}

#[inline(always)]
pub fn hi32(x: u64) -> u32 {
    (x >> 32) as u32
}

#[inline(always)]
pub fn replace_lo(x: u64, lo: u32) -> u64 {
    (x & 0xFFFF_FFFF_0000_0000) | (lo as u64)
}

#[inline(always)]
pub fn replace_hi(x: u64, hi: u32) -> u64 {
    (x & 0x0000_0000_FFFF_FFFF) | ((hi as u64) << 32)
}

// ---------------------------------------------------------------------------
// XOR and fused combinators
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn xor2(a: u64, b: u64) -> u64 {
    a ^ b
}

#[inline(always)]
pub fn xor3(a: u64, b: u64, c: u64) -> u64 {
    a ^ b ^ c
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn xor8(a: u64, b: u64, c: u64, d: u64, e: u64, f: u64, g: u64, h: u64) -> u64 {
    a ^ b ^ c ^ d ^ e ^ f ^ g ^ h
}

/// `((c ^ b) & a) ^ c`: picks bits of `b` where `a` is set, bits of `c`
/// elsewhere.
#[inline(always)]
pub fn xandx(a: u64, b: u64, c: u64) -> u64 {
    ((c ^ b) & a) ^ c
}

/// `(a & b) | ((a | b) & c)`: bitwise majority of the three operands.
#[inline(always)]
pub fn andor(a: u64, b: u64, c: u64) -> u64 {
    (a & b) | ((a | b) & c)
}

// ---------------------------------------------------------------------------
// Width-masked identity and shifts
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn mask32(x: u32) -> u32 {
    x & MASK32
}

#[inline(always)]
pub fn mask64(x: u64) -> u64 {
    x & MASK64
}

/// Shift amount is taken modulo 64 before shifting.
#[inline(always)]
pub fn shl_masked(x: u64, n: u32) -> u64 {
    (x << (n & 63)) & MASK64
}

/// Shift amount is taken modulo 64 before shifting.
#[inline(always)]
pub fn shr_masked(x: u64, n: u32) -> u64 {
    (x >> (n & 63)) & MASK64
}
