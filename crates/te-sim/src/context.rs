//! What policies and updates see: the stage context and the signal bundle.

use std::collections::BTreeMap;

use te_behavior::{BehaviorAssignment, MetaBucketAllocation};
use chrono::NaiveDate;
use te_core::{Params, TeError, TeResult, Timestep};
use te_economy::{
    BusinessAssumptions, Buyback, LiquidityPool, Snapshot, StakingPayout, TokenEconomyMetrics,
    TokenFlow, UserAdoption, VestingRelease,
};

// ── StageContext ──────────────────────────────────────────────────────────────

/// Read-only inputs to every policy and update of one stage.
#[derive(Copy, Clone)]
pub struct StageContext<'a> {
    pub params:      &'a Params,
    /// Position of the stage in the pipeline, from 0.
    pub stage_index: usize,
    /// The timestep being computed.
    pub timestep:    Timestep,
    /// Every committed snapshot, genesis first.
    pub history:     &'a [Snapshot],
    /// The state this stage starts from: the last committed snapshot with
    /// the updates of earlier stages in this timestep applied.
    pub previous:    &'a Snapshot,
}

// ── Signal ────────────────────────────────────────────────────────────────────

/// One named policy output.
#[derive(Clone, PartialEq, Debug)]
pub enum Signal {
    Date(NaiveDate),
    LiquidityPool(LiquidityPool),
    Vesting(VestingRelease),
    Flow(TokenFlow),
    Behaviors(BehaviorAssignment),
    Allocation(MetaBucketAllocation),
    Adoption(UserAdoption),
    Staking(StakingPayout),
    Buyback(Buyback),
    Business(BusinessAssumptions),
    Metrics(TokenEconomyMetrics),
}

/// Types that can be read back out of a [`Signal`].
pub trait SignalPayload: Sized {
    const KIND: &'static str;
    fn from_signal(signal: &Signal) -> Option<&Self>;
}

macro_rules! signal_payload {
    ($($variant:ident => $ty:ty),* $(,)?) => {$(
        impl SignalPayload for $ty {
            const KIND: &'static str = stringify!($variant);
            fn from_signal(signal: &Signal) -> Option<&Self> {
                match signal {
                    Signal::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    )*};
}

signal_payload! {
    Date => NaiveDate,
    LiquidityPool => LiquidityPool,
    Vesting => VestingRelease,
    Flow => TokenFlow,
    Behaviors => BehaviorAssignment,
    Allocation => MetaBucketAllocation,
    Adoption => UserAdoption,
    Staking => StakingPayout,
    Buyback => Buyback,
    Business => BusinessAssumptions,
    Metrics => TokenEconomyMetrics,
}

// ── Signals ───────────────────────────────────────────────────────────────────

/// The merged outputs of every policy in a stage, keyed by name.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Signals {
    entries: BTreeMap<&'static str, Signal>,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bundle holding a single signal.
    pub fn one(name: &'static str, signal: Signal) -> Self {
        let mut s = Self::new();
        s.entries.insert(name, signal);
        s
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Merge `other` into `self`.  On a name clash nothing after the clash
    /// is merged and the clashing name is returned.
    pub fn merge(&mut self, other: Signals) -> Result<(), &'static str> {
        for (name, signal) in other.entries {
            if self.entries.contains_key(name) {
                return Err(name);
            }
            self.entries.insert(name, signal);
        }
        Ok(())
    }

    /// The signal called `name`, which must hold a `T`.
    pub fn get<T: SignalPayload>(&self, name: &str) -> TeResult<&T> {
        let signal = self
            .entries
            .get(name)
            .ok_or_else(|| TeError::Configuration(format!("no `{name}` signal in this stage")))?;
        T::from_signal(signal).ok_or_else(|| {
            TeError::Configuration(format!("signal `{name}` does not hold a {} value", T::KIND))
        })
    }
}
