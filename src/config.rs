//! Build configuration
//! ===================
//! The two build switches (capability tier and the optimized-forms toggle)
//! plus the execution context, resolved in one place. Nothing here is read
//! at runtime: every item is a `const` derived from Cargo features and the
//! compilation target.
//!
//! | Feature           | Effect                                            |
//! |-------------------|---------------------------------------------------|
//! | `tier-1`          | lanes have a byte permute                         |
//! | `tier-2`          | ... and a 32-bit funnel shifter                   |
//! | `tier-3`          | ... and native rotate / byte-reverse instructions |
//! | `optimized-forms` | fused XOR and boolean forms are compiled in       |
//! | `lane`            | build as lane code even on a host CPU             |

use core::fmt;

use crate::dispatch::{Caps, Plan};

// ---------------------------------------------------------------------------
// Execution context
// ---------------------------------------------------------------------------

/// Where the primitives run. Host code always uses the portable formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    /// Inside a parallel lane on the accelerator.
    Lane,
    /// Plain scalar code on the host.
    Host,
}

impl ExecutionContext {
    pub const ALL: [Self; 2] = [Self::Lane, Self::Host];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lane => "lane",
            Self::Host => "host",
        }
    }
}

// ---------------------------------------------------------------------------
// Capability tier
// ---------------------------------------------------------------------------

/// Hardware generation of the lane target, lowest first.
///
/// Capabilities are cumulative: every tier has everything the tiers below
/// it have. Ordering follows the discriminant, so `tier >= FunnelShift`
/// reads as "has a funnel shifter".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CapabilityTier {
    /// Shifts, masks and adds only.
    #[default]
    Baseline = 0,
    /// Adds the 4-byte permute instruction.
    BytePermute = 1,
    /// Adds the 32-bit funnel shifter.
    FunnelShift = 2,
    /// Adds native rotate and byte-reverse instructions.
    Intrinsic = 3,
}

impl CapabilityTier {
    /// All tiers in ascending order.
    pub const ALL: [Self; 4] = [
        Self::Baseline,
        Self::BytePermute,
        Self::FunnelShift,
        Self::Intrinsic,
    ];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::BytePermute => "byte-permute",
            Self::FunnelShift => "funnel-shift",
            Self::Intrinsic => "intrinsic",
        }
    }

    /// Instruction capabilities a lane of this tier exposes.
    #[inline]
    #[must_use]
    pub const fn caps(self) -> Caps {
        match self {
            Self::Baseline => Caps::NONE,
            Self::BytePermute => Caps::PERMUTE,
            Self::FunnelShift => Caps::PERMUTE.union(Caps::FUNNEL),
            Self::Intrinsic => Caps::PERMUTE
                .union(Caps::FUNNEL)
                .union(Caps::ROTATE)
                .union(Caps::BSWAP),
        }
    }
}

impl fmt::Display for CapabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// The full build configuration the primitives were compiled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    pub context: ExecutionContext,
    pub tier: CapabilityTier,
    pub optimized_forms: bool,
}

impl BuildConfig {
    #[inline]
    #[must_use]
    pub const fn plan(&self) -> Plan {
        Plan::resolve(self.context, self.tier, self.optimized_forms)
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "context={} tier={} optimized-forms={}",
            self.context.name(),
            self.tier,
            if self.optimized_forms { "on" } else { "off" }
        )
    }
}

pub const EXECUTION_CONTEXT: ExecutionContext =
    if cfg!(any(target_arch = "nvptx64", target_arch = "amdgpu", feature = "lane")) {
        ExecutionContext::Lane
    } else {
        ExecutionContext::Host
    };

/// Highest tier feature enabled wins.
pub const CAPABILITY_TIER: CapabilityTier = if cfg!(feature = "tier-3") {
    CapabilityTier::Intrinsic
} else if cfg!(feature = "tier-2") {
    CapabilityTier::FunnelShift
} else if cfg!(feature = "tier-1") {
    CapabilityTier::BytePermute
} else {
    CapabilityTier::Baseline
};

pub const OPTIMIZED_FORMS: bool = cfg!(feature = "optimized-forms");

pub const BUILD: BuildConfig = BuildConfig {
    context: EXECUTION_CONTEXT,
    tier: CAPABILITY_TIER,
    optimized_forms: OPTIMIZED_FORMS,
};

/// Strategy per primitive family for this build.
pub const PLAN: Plan = BUILD.plan();

/// Emits the resolved configuration and per-primitive strategy at `debug`.
pub fn log_build_config() {
    tracing::debug!(
        context = BUILD.context.name(),
        tier = BUILD.tier.name(),
        optimized_forms = BUILD.optimized_forms,
        "lanebits build configuration"
    );
    for (primitive, strategy) in PLAN.iter() {
        tracing::debug!(
            primitive = primitive.name(),
            strategy = strategy.name(),
            "resolved strategy"
        );
    }
}
