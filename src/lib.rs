//! lanebits: Bit Primitives for Lane-Parallel Hashing
//! ==================================================
//! Rotates, byte swaps, half-word moves, multi-operand XOR and fused boolean
//! combinators: the building blocks hash permutations are made of, written
//! once and compiled to the fastest correct instruction sequence for the
//! target hardware tier.
//!
//! ## How a primitive is chosen
//! * Every primitive family has up to three forms: a **native** instruction,
//!   a **composite** of two narrower instructions (funnel shift, byte
//!   permute), and a **generic** shift/mask formula.
//! * The build picks one form per family from the capability tier and the
//!   optimized-forms switch (see [`config`]). The choice is a `const`; no call
//!   ever branches on the tier.
//! * Host builds always use the generic formulas in [`reference`], which are
//!   also the oracle every other form is tested against. All forms are
//!   bit-for-bit identical for every input.
//!
//! | Tier          | Rotates   | Byte swaps | XOR / fused (toggle on) |
//! |---------------|-----------|------------|-------------------------|
//! | baseline      | generic   | generic    | native                  |
//! | byte-permute  | generic   | composite  | native                  |
//! | funnel-shift  | composite | composite  | native                  |
//! | intrinsic     | native    | native     | native                  |
//!
//! ## What is not here
//! * No hash round logic, no memory management, no work scheduling: callers
//!   launch lanes and compose the primitives themselves.
//! * [`guard`] (feature `std`) is the only fallible surface, and it only wraps
//!   host-side accelerator runtime calls.
//!
//! ```
//! use lanebits::{rotl64, rotr64, swab64, xor3};
//!
//! let x = 0x0123_4567_89AB_CDEF_u64;
//! assert_eq!(rotr64(rotl64(x, 13), 13), x);
//! assert_eq!(swab64(swab64(x)), x);
//! assert_eq!(xor3(0, 0, x), x);
//! ```

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod config;
pub mod dispatch;
pub mod donate;
pub mod funnel;
#[cfg(feature = "std")]
pub mod guard;
pub mod native;
pub mod ops;
pub mod reference;

#[cfg(test)]
mod proptests;

pub use config::{BuildConfig, CapabilityTier, ExecutionContext, BUILD, PLAN};
pub use dispatch::{Caps, Kernels, Plan, Primitive, Strategy};
pub use ops::*;

// ---------------------------------------------------------------------------
//                             End of file
// ---------------------------------------------------------------------------
