use std::vec::Vec;

use proptest::prelude::*;

use crate::config::{CapabilityTier, ExecutionContext};
use crate::dispatch::Kernels;
use crate::{ops, reference};

/// Every table the crate can be built with, labelled for failure output.
fn all_tables() -> Vec<(ExecutionContext, CapabilityTier, bool, Kernels)> {
    let mut out = Vec::new();
    for context in ExecutionContext::ALL {
        for tier in CapabilityTier::ALL {
            for fused in [false, true] {
                out.push((context, tier, fused, Kernels::resolve(context, tier, fused)));
            }
        }
    }
    out
}

proptest! {
    // ─────────────────────────────────────────────────────────────────────────
    // Every selected variant matches the reference formulas
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn rotates_match_reference(x32 in any::<u32>(), x64 in any::<u64>(), n32 in 0u32..32, n64 in 0u32..64) {
        let r = Kernels::REFERENCE;
        for (ctx, tier, fused, k) in all_tables() {
            prop_assert_eq!((k.rotl32)(x32, n32), (r.rotl32)(x32, n32), "{:?}/{}/{}", ctx, tier, fused);
            prop_assert_eq!((k.rotr32)(x32, n32), (r.rotr32)(x32, n32), "{:?}/{}/{}", ctx, tier, fused);
            prop_assert_eq!((k.rotl64)(x64, n64), (r.rotl64)(x64, n64), "{:?}/{}/{}", ctx, tier, fused);
            prop_assert_eq!((k.rotr64)(x64, n64), (r.rotr64)(x64, n64), "{:?}/{}/{}", ctx, tier, fused);
        }
    }

    #[test]
    fn byte_swaps_match_reference(x32 in any::<u32>(), x64 in any::<u64>()) {
        let r = Kernels::REFERENCE;
        for (ctx, tier, fused, k) in all_tables() {
            prop_assert_eq!((k.swab32)(x32), (r.swab32)(x32), "{:?}/{}/{}", ctx, tier, fused);
            prop_assert_eq!((k.swab64)(x64), (r.swab64)(x64), "{:?}/{}/{}", ctx, tier, fused);
        }
    }

    #[test]
    fn half_words_match_reference(x in any::<u64>(), w in any::<u32>()) {
        let r = Kernels::REFERENCE;
        for (_, _, _, k) in all_tables() {
            prop_assert_eq!((k.lo32)(x), (r.lo32)(x));
            prop_assert_eq!((k.hi32)(x), (r.hi32)(x));
            prop_assert_eq!((k.compose64)(w, (x >> 7) as u32), (r.compose64)(w, (x >> 7) as u32));
            prop_assert_eq!((k.replace_lo)(x, w), (r.replace_lo)(x, w));
            prop_assert_eq!((k.replace_hi)(x, w), (r.replace_hi)(x, w));
        }
    }

    #[test]
    fn fused_forms_match_reference(v in any::<[u64; 8]>(), n in any::<u32>()) {
        let r = Kernels::REFERENCE;
        let [a, b, c, d, e, f, g, h] = v;
        for (ctx, tier, fused, k) in all_tables() {
            let label = (ctx, tier, fused);
            prop_assert_eq!((k.xor2)(a, b), (r.xor2)(a, b), "{:?}", label);
            prop_assert_eq!((k.xor3)(a, b, c), (r.xor3)(a, b, c), "{:?}", label);
            prop_assert_eq!((k.xor8)(a, b, c, d, e, f, g, h), (r.xor8)(a, b, c, d, e, f, g, h), "{:?}", label);
            prop_assert_eq!((k.xandx)(a, b, c), (r.xandx)(a, b, c), "{:?}", label);
            prop_assert_eq!((k.andor)(a, b, c), (r.andor)(a, b, c), "{:?}", label);
            prop_assert_eq!((k.mask32)(a as u32), (r.mask32)(a as u32), "{:?}", label);
            prop_assert_eq!((k.mask64)(a), (r.mask64)(a), "{:?}", label);
            prop_assert_eq!((k.shl_masked)(a, n), (r.shl_masked)(a, n), "{:?}", label);
            prop_assert_eq!((k.shr_masked)(a, n), (r.shr_masked)(a, n), "{:?}", label);
        }
    }

    #[test]
    fn active_table_matches_reference(x in any::<u64>(), y in any::<u64>(), n in 0u32..64) {
        prop_assert_eq!(ops::rotl64(x, n), reference::rotl64(x, n));
        prop_assert_eq!(ops::swab64(x), reference::swab64(x));
        prop_assert_eq!(ops::xandx(x, y, !x), reference::xandx(x, y, !x));
        prop_assert_eq!(ops::andor(x, y, x ^ y), reference::andor(x, y, x ^ y));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Algebraic properties
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn rotate_inverts(x in any::<u64>(), y in any::<u32>(), n in 0u32..64) {
        prop_assert_eq!(ops::rotr64(ops::rotl64(x, n), n), x);
        prop_assert_eq!(ops::rotl64(ops::rotr64(x, n), n), x);
        prop_assert_eq!(ops::rotr32(ops::rotl32(y, n & 31), n & 31), y);
    }

    #[test]
    fn byte_swap_is_involution(x in any::<u64>(), y in any::<u32>()) {
        prop_assert_eq!(ops::swab64(ops::swab64(x)), x);
        prop_assert_eq!(ops::swab32(ops::swab32(y)), y);
    }

    #[test]
    fn compose_inverts_extract(x in any::<u64>()) {
        prop_assert_eq!(ops::compose64(ops::lo32(x), ops::hi32(x)), x);
    }

    #[test]
    fn xor3_ignores_operand_order(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let expected = a ^ b ^ c;
        for (p, q, r) in [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            prop_assert_eq!(ops::xor3(p, q, r), expected);
        }
    }

    #[test]
    fn xor8_cancels_pairs(a in any::<u64>(), b in any::<u64>(), c in any::<u64>(), d in any::<u64>()) {
        prop_assert_eq!(ops::xor8(a, a, b, b, c, c, d, d), 0);
        prop_assert_eq!(ops::xor8(a, b, c, d, d, c, b, a), 0);
    }

    #[test]
    fn xandx_zero_mask_is_c(b in any::<u64>(), c in any::<u64>()) {
        prop_assert_eq!(ops::xandx(0, b, c), c);
    }
}
