//! Strategy selection
//! ==================
//! Each primitive family has up to three implementations, listed best first:
//!
//! 1. [`Strategy::Native`]: one hardware instruction ([`crate::native`]).
//! 2. [`Strategy::Composite`]: two narrower instructions, i.e. funnel shifts
//!    or byte permutes ([`crate::funnel`]).
//! 3. [`Strategy::Generic`]: shift/or/mask formula ([`crate::reference`]),
//!    always available.
//!
//! A family picks the first strategy whose required [`Caps`] the build has.
//! Everything is `const fn`, so [`Plan::resolve`] and [`Kernels::from_plan`]
//! run at compile time and the active table is a constant: no call ever
//! branches on the tier.
//!
//! ```
//! use lanebits::config::{CapabilityTier, ExecutionContext};
//! use lanebits::dispatch::{Plan, Primitive, Strategy};
//!
//! const FUNNEL: Plan = Plan::resolve(ExecutionContext::Lane, CapabilityTier::FunnelShift, true);
//! assert_eq!(FUNNEL.strategy(Primitive::Rotate64), Strategy::Composite);
//! assert_eq!(FUNNEL.strategy(Primitive::HalfWord), Strategy::Generic);
//! ```

use core::fmt;

use crate::config::{CapabilityTier, ExecutionContext};
use crate::{funnel, native, reference};

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Set of instruction capabilities available to a build.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Caps(u8);

impl Caps {
    pub const NONE: Self = Self(0);
    /// 4-byte permute across two source registers.
    pub const PERMUTE: Self = Self(1 << 0);
    /// 32-bit funnel shifter.
    pub const FUNNEL: Self = Self(1 << 1);
    /// Native 32/64-bit rotate.
    pub const ROTATE: Self = Self(1 << 2);
    /// Native byte reverse.
    pub const BSWAP: Self = Self(1 << 3);
    /// Fused XOR/boolean forms (the optimized-forms switch).
    pub const FUSED: Self = Self(1 << 4);

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// `true` when every capability in `required` is present.
    #[inline]
    #[must_use]
    pub const fn has(self, required: Self) -> bool {
        self.0 & required.0 == required.0
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Caps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Caps, &str); 5] = [
            (Caps::PERMUTE, "PERMUTE"),
            (Caps::FUNNEL, "FUNNEL"),
            (Caps::ROTATE, "ROTATE"),
            (Caps::BSWAP, "BSWAP"),
            (Caps::FUSED, "FUSED"),
        ];
        let mut set = f.debug_set();
        for (cap, name) in NAMES {
            if self.has(cap) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

// ---------------------------------------------------------------------------
// Strategies and primitive families
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Native,
    Composite,
    Generic,
}

impl Strategy {
    /// Preference order; earlier wins.
    pub const PREFERENCE: [Self; 3] = [Self::Native, Self::Composite, Self::Generic];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Composite => "composite",
            Self::Generic => "generic",
        }
    }
}

/// Primitive families. Every operation in a family shares one strategy, so
/// e.g. left and right 64-bit rotates never mix implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Primitive {
    Rotate32 = 0,
    Rotate64,
    ByteSwap32,
    ByteSwap64,
    /// compose, extract and replace of 32-bit halves
    HalfWord,
    Xor,
    Xandx,
    Andor,
    Mask,
    ShiftMasked,
}

impl Primitive {
    pub const COUNT: usize = 10;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Rotate32,
        Self::Rotate64,
        Self::ByteSwap32,
        Self::ByteSwap64,
        Self::HalfWord,
        Self::Xor,
        Self::Xandx,
        Self::Andor,
        Self::Mask,
        Self::ShiftMasked,
    ];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rotate32 => "rotate32",
            Self::Rotate64 => "rotate64",
            Self::ByteSwap32 => "byteswap32",
            Self::ByteSwap64 => "byteswap64",
            Self::HalfWord => "halfword",
            Self::Xor => "xor",
            Self::Xandx => "xandx",
            Self::Andor => "andor",
            Self::Mask => "mask",
            Self::ShiftMasked => "shift-masked",
        }
    }

    /// Capabilities `strategy` needs for this family, or `None` when the
    /// family has no such implementation.
    #[must_use]
    pub const fn requires(self, strategy: Strategy) -> Option<Caps> {
        match (self, strategy) {
            (_, Strategy::Generic) => Some(Caps::NONE),
            (Self::Rotate32 | Self::Rotate64, Strategy::Native) => Some(Caps::ROTATE),
            (Self::Rotate32 | Self::Rotate64, Strategy::Composite) => Some(Caps::FUNNEL),
            (Self::ByteSwap32 | Self::ByteSwap64, Strategy::Native) => Some(Caps::BSWAP),
            (Self::ByteSwap32 | Self::ByteSwap64, Strategy::Composite) => Some(Caps::PERMUTE),
            // Plain bit concatenation is already optimal.
            (Self::HalfWord, _) => None,
            (
                Self::Xor | Self::Xandx | Self::Andor | Self::Mask | Self::ShiftMasked,
                Strategy::Native,
            ) => Some(Caps::FUSED),
            (
                Self::Xor | Self::Xandx | Self::Andor | Self::Mask | Self::ShiftMasked,
                Strategy::Composite,
            ) => None,
        }
    }

    /// First strategy in [`Strategy::PREFERENCE`] that `caps` satisfies.
    #[must_use]
    pub const fn select(self, caps: Caps) -> Strategy {
        let mut i = 0;
        while i < Strategy::PREFERENCE.len() {
            let strategy = Strategy::PREFERENCE[i];
            if let Some(required) = self.requires(strategy) {
                if caps.has(required) {
                    return strategy;
                }
            }
            i += 1;
        }
        Strategy::Generic
    }
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// One strategy per primitive family, fixed for a build configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    caps: Caps,
    strategies: [Strategy; Primitive::COUNT],
}

impl Plan {
    /// Resolve every family for a context/tier/toggle combination. Host code
    /// gets no capabilities and therefore the generic formulas throughout.
    #[must_use]
    pub const fn resolve(
        context: ExecutionContext,
        tier: CapabilityTier,
        optimized_forms: bool,
    ) -> Self {
        let caps = match context {
            ExecutionContext::Host => Caps::NONE,
            ExecutionContext::Lane if optimized_forms => tier.caps().union(Caps::FUSED),
            ExecutionContext::Lane => tier.caps(),
        };
        let mut strategies = [Strategy::Generic; Primitive::COUNT];
        let mut i = 0;
        while i < Primitive::COUNT {
            strategies[i] = Primitive::ALL[i].select(caps);
            i += 1;
        }
        Self { caps, strategies }
    }

    #[inline]
    #[must_use]
    pub const fn caps(&self) -> Caps {
        self.caps
    }

    #[inline]
    #[must_use]
    pub const fn strategy(&self, primitive: Primitive) -> Strategy {
        self.strategies[primitive as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Primitive, Strategy)> + '_ {
        Primitive::ALL.iter().map(|&p| (p, self.strategy(p)))
    }
}

// ---------------------------------------------------------------------------
// Kernel table
// ---------------------------------------------------------------------------

pub type Rot32Fn = fn(u32, u32) -> u32;
pub type Rot64Fn = fn(u64, u32) -> u64;
pub type Unary32Fn = fn(u32) -> u32;
pub type Unary64Fn = fn(u64) -> u64;
pub type ComposeFn = fn(u32, u32) -> u64;
pub type ExtractFn = fn(u64) -> u32;
pub type ReplaceFn = fn(u64, u32) -> u64;
pub type Binary64Fn = fn(u64, u64) -> u64;
pub type Ternary64Fn = fn(u64, u64, u64) -> u64;
pub type Xor8Fn = fn(u64, u64, u64, u64, u64, u64, u64, u64) -> u64;

/// Function pointers for every primitive under one [`Plan`].
#[derive(Clone, Copy, Debug)]
pub struct Kernels {
    pub rotl32: Rot32Fn,
    pub rotr32: Rot32Fn,
    pub rotl64: Rot64Fn,
    pub rotr64: Rot64Fn,
    pub swab32: Unary32Fn,
    pub swab64: Unary64Fn,
    pub compose64: ComposeFn,
    pub lo32: ExtractFn,
    pub hi32: ExtractFn,
    pub replace_lo: ReplaceFn,
    pub replace_hi: ReplaceFn,
    pub xor2: Binary64Fn,
    pub xor3: Ternary64Fn,
    pub xor8: Xor8Fn,
    pub xandx: Ternary64Fn,
    pub andor: Ternary64Fn,
    pub mask32: Unary32Fn,
    pub mask64: Unary64Fn,
    pub shl_masked: Rot64Fn,
    pub shr_masked: Rot64Fn,
}

/// `pick!(strategy, Type, name)` for families with all three forms,
/// `pick!(strategy, Type, name, fused)` for native-or-generic families.
macro_rules! pick {
    ($s:expr, $ty:ty, $name:ident) => {
        match $s {
            Strategy::Native => native::$name as $ty,
            Strategy::Composite => funnel::$name as $ty,
            Strategy::Generic => reference::$name as $ty,
        }
    };
    ($s:expr, $ty:ty, $name:ident, fused) => {
        match $s {
            Strategy::Native => native::$name as $ty,
            Strategy::Composite | Strategy::Generic => reference::$name as $ty,
        }
    };
}

impl Kernels {
    /// The portable reference table.
    pub const REFERENCE: Self = Self::from_plan(&Plan::resolve(
        ExecutionContext::Host,
        CapabilityTier::Baseline,
        false,
    ));

    #[must_use]
    pub const fn from_plan(plan: &Plan) -> Self {
        let rot32 = plan.strategy(Primitive::Rotate32);
        let rot64 = plan.strategy(Primitive::Rotate64);
        let swab32 = plan.strategy(Primitive::ByteSwap32);
        let swab64 = plan.strategy(Primitive::ByteSwap64);
        let xor = plan.strategy(Primitive::Xor);
        let xandx = plan.strategy(Primitive::Xandx);
        let andor = plan.strategy(Primitive::Andor);
        let mask = plan.strategy(Primitive::Mask);
        let shift = plan.strategy(Primitive::ShiftMasked);

        Self {
            rotl32: pick!(rot32, Rot32Fn, rotl32),
            rotr32: pick!(rot32, Rot32Fn, rotr32),
            rotl64: pick!(rot64, Rot64Fn, rotl64),
            rotr64: pick!(rot64, Rot64Fn, rotr64),
            swab32: pick!(swab32, Unary32Fn, swab32),
            swab64: pick!(swab64, Unary64Fn, swab64),
            compose64: reference::compose64,
            lo32: reference::lo32,
            hi32: reference::hi32,
            replace_lo: reference::replace_lo,
            replace_hi: reference::replace_hi,
            xor2: pick!(xor, Binary64Fn, xor2, fused),
            xor3: pick!(xor, Ternary64Fn, xor3, fused),
            xor8: pick!(xor, Xor8Fn, xor8, fused),
            xandx: pick!(xandx, Ternary64Fn, xandx, fused),
            andor: pick!(andor, Ternary64Fn, andor, fused),
            mask32: pick!(mask, Unary32Fn, mask32, fused),
            mask64: pick!(mask, Unary64Fn, mask64, fused),
            shl_masked: pick!(shift, Rot64Fn, shl_masked, fused),
            shr_masked: pick!(shift, Rot64Fn, shr_masked, fused),
        }
    }

    #[must_use]
    pub const fn resolve(
        context: ExecutionContext,
        tier: CapabilityTier,
        optimized_forms: bool,
    ) -> Self {
        Self::from_plan(&Plan::resolve(context, tier, optimized_forms))
    }
}
