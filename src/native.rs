//! Native-instruction forms
//! ========================
//! Single-instruction rotates and byte reverses, plus the fused forms of the
//! XOR/boolean combinators. Where `core::arch` exposes a scalar intrinsic for
//! the compilation target it is used directly; everywhere else the `core`
//! integer methods lower to the target's own rotate/reverse instruction.
//!
//! Only the rotates, byte reverses and the BMI1 bit select are distinct
//! instruction sequences. The XOR reductions, `andor`, the width masks and the
//! masked shifts are the generic formulas regrouped or folded; they sit under
//! the native label so the toggle has a form to pick, and codegen for them is
//! left to the compiler.

#[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
use core::arch::x86_64::_andn_u64;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_bswap, _bswap64};

// ---------------------------------------------------------------------------
// Rotates
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn rotl32(x: u32, n: u32) -> u32 {
    x.rotate_left(n)
}

#[inline(always)]
pub fn rotr32(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

#[inline(always)]
pub fn rotl64(x: u64, n: u32) -> u64 {
    x.rotate_left(n)
}

#[inline(always)]
pub fn rotr64(x: u64, n: u32) -> u64 {
    x.rotate_right(n)
}

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

#[cfg(target_arch = "x86_64")]
#[allow(unused_unsafe)]
#[inline(always)]
pub fn swab32(x: u32) -> u32 {
    // SAFETY: `bswap` is part of the x86_64 baseline.
    unsafe { _bswap(x as i32) as u32 }
}

#[cfg(target_arch = "x86_64")]
#[allow(unused_unsafe)]
#[inline(always)]
pub fn swab64(x: u64) -> u64 {
    // SAFETY: `bswap` is part of the x86_64 baseline.
    unsafe { _bswap64(x as i64) as u64 }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub fn swab32(x: u32) -> u32 {
    x.swap_bytes()
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub fn swab64(x: u64) -> u64 {
    x.swap_bytes()
}

// ---------------------------------------------------------------------------
// Fused combinators (regrouped generic formulas, except the BMI1 select)
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn xor2(a: u64, b: u64) -> u64 {
    a ^ b
}

#[inline(always)]
pub fn xor3(a: u64, b: u64, c: u64) -> u64 {
    a ^ (b ^ c)
}

/// Balanced reduction: depth three instead of a seven-deep chain.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn xor8(a: u64, b: u64, c: u64, d: u64, e: u64, f: u64, g: u64, h: u64) -> u64 {
    ((a ^ b) ^ (c ^ d)) ^ ((e ^ f) ^ (g ^ h))
}

/// Bit select, `a ? b : c` per bit.
#[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
#[allow(unused_unsafe)]
#[inline(always)]
pub fn xandx(a: u64, b: u64, c: u64) -> u64 {
    // SAFETY: gated on `bmi1` being enabled for the whole build.
    (a & b) | unsafe { _andn_u64(a, c) }
}

/// Bit select, `a ? b : c` per bit.
#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi1")))]
#[inline(always)]
pub fn xandx(a: u64, b: u64, c: u64) -> u64 {
    (a & b) | (!a & c)
}

/// Majority: where `a` and `b` agree take them, otherwise take `c`.
#[inline(always)]
pub fn andor(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (c & (a ^ b))
}

// ---------------------------------------------------------------------------
// Width-masked identity and shifts
// ---------------------------------------------------------------------------

// The register width already is the word width, so the mask folds away.

#[inline(always)]
pub fn mask32(x: u32) -> u32 {
    x
}

#[inline(always)]
pub fn mask64(x: u64) -> u64 {
    x
}

#[inline(always)]
pub fn shl_masked(x: u64, n: u32) -> u64 {
    x.wrapping_shl(n)
}

#[inline(always)]
pub fn shr_masked(x: u64, n: u32) -> u64 {
    x.wrapping_shr(n)
}
