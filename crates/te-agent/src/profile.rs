//! Behavior profiles and meta-bucket token amounts stored on agent records.

use std::ops::{Add, AddAssign};

use te_core::Timestep;

// ── BehaviorProfile ───────────────────────────────────────────────────────────

/// How an agent splits its unlocked tokens, as fractions in `[0, 1]`.
///
/// `sell`, `hold` and `utility` drive the meta-bucket allocator.  `remove`
/// is the share of utility tokens locked away for good and `incentivise` the
/// share a protocol pool hands out as incentives; neither is allocated here.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct BehaviorProfile {
    pub sell:        f64,
    pub hold:        f64,
    pub utility:     f64,
    pub remove:      f64,
    pub incentivise: f64,
}

impl BehaviorProfile {
    /// Build from percentages in `[0, 100]`.  This is the only place the
    /// percent scale is converted.
    pub fn from_percent(sell: f64, hold: f64, utility: f64, remove: f64, incentivise: f64) -> Self {
        Self {
            sell:        sell / 100.0,
            hold:        hold / 100.0,
            utility:     utility / 100.0,
            remove:      remove / 100.0,
            incentivise: incentivise / 100.0,
        }
    }

    /// Sum over every category.
    pub fn total(&self) -> f64 {
        self.sell + self.hold + self.utility + self.remove + self.incentivise
    }

    /// Split `amount` across the three meta buckets.
    #[inline]
    pub fn split(&self, amount: f64) -> BucketAmounts {
        BucketAmounts {
            selling: amount * self.sell,
            holding: amount * self.hold,
            utility: amount * self.utility,
        }
    }
}

/// A behavior profile tagged with the timestep it was assigned in.
///
/// The allocator only accepts profiles assigned in the timestep being
/// processed, which is how an out-of-order pipeline is detected.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AssignedBehavior {
    pub timestep: Timestep,
    pub profile:  BehaviorProfile,
}

// ── BucketAmounts ─────────────────────────────────────────────────────────────

/// Absolute token amounts per meta bucket.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct BucketAmounts {
    pub selling: f64,
    pub holding: f64,
    pub utility: f64,
}

impl BucketAmounts {
    pub const ZERO: BucketAmounts = BucketAmounts { selling: 0.0, holding: 0.0, utility: 0.0 };

    pub fn total(&self) -> f64 {
        self.selling + self.holding + self.utility
    }

    /// Tokens that leave the agent's wallet (sold or spent on utility).
    pub fn outflow(&self) -> f64 {
        self.selling + self.utility
    }
}

impl Add for BucketAmounts {
    type Output = BucketAmounts;
    fn add(self, rhs: BucketAmounts) -> BucketAmounts {
        BucketAmounts {
            selling: self.selling + rhs.selling,
            holding: self.holding + rhs.holding,
            utility: self.utility + rhs.utility,
        }
    }
}

impl AddAssign for BucketAmounts {
    fn add_assign(&mut self, rhs: BucketAmounts) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for BucketAmounts {
    fn sum<I: Iterator<Item = BucketAmounts>>(iter: I) -> Self {
        iter.fold(BucketAmounts::ZERO, Add::add)
    }
}

// ── Allocations ───────────────────────────────────────────────────────────────

/// Re-allocation of already-unlocked tokens.
///
/// Protocol buckets are `Excluded`: they have no from-holdings allocation at
/// all, and their contribution reads as exactly zero.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum HoldingAllocation {
    #[default]
    Excluded,
    Allocated(BucketAmounts),
}

impl HoldingAllocation {
    #[inline]
    pub fn amounts(&self) -> BucketAmounts {
        match self {
            HoldingAllocation::Excluded => BucketAmounts::ZERO,
            HoldingAllocation::Allocated(a) => *a,
        }
    }

    #[inline]
    pub fn is_excluded(&self) -> bool {
        matches!(self, HoldingAllocation::Excluded)
    }
}

/// One agent's meta-bucket allocation for a timestep, split by provenance.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct AgentAllocation {
    /// From tokens vested in this timestep.
    pub fresh:        BucketAmounts,
    /// From the balance held before this timestep's vesting.
    pub from_holding: HoldingAllocation,
}

impl AgentAllocation {
    /// Fresh plus from-holdings, per bucket.
    #[inline]
    pub fn combined(&self) -> BucketAmounts {
        self.fresh + self.from_holding.amounts()
    }
}
