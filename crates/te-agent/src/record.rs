//! The agent record and its vesting schedule.

use te_core::AgentId;

use crate::{AgentAllocation, AgentType, AssignedBehavior, Cohort};

// ── VestingSchedule ───────────────────────────────────────────────────────────

/// Linear vesting with a TGE unlock and a cliff.
///
/// Month `m` is counted from the launch month (`m = 0` is timestep 1).  The
/// TGE share unlocks at `m = 0`; the remainder vests in equal monthly slices
/// starting at `m = cliff_months` and is fully vested after
/// `cliff_months + vesting_months` months.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct VestingSchedule {
    /// Total tokens allocated to the agent under this schedule.
    pub allocation:     f64,
    /// Share of `allocation` unlocked at launch, in `[0, 1]`.
    pub tge_fraction:   f64,
    pub cliff_months:   u32,
    pub vesting_months: u32,
}

impl VestingSchedule {
    /// Cumulative amount that should have vested by the end of month `m`.
    pub fn vested_by(&self, month: u32) -> f64 {
        let tge = self.allocation * self.tge_fraction;
        let rest = self.allocation - tge;
        if month < self.cliff_months {
            return tge;
        }
        if self.vesting_months == 0 {
            return self.allocation;
        }
        let slices = (month - self.cliff_months + 1).min(self.vesting_months);
        tge + rest * slices as f64 / self.vesting_months as f64
    }
}

// ── AgentRecord ───────────────────────────────────────────────────────────────

/// One simulated stakeholder.
#[derive(Clone, PartialEq, Debug)]
pub struct AgentRecord {
    pub id:         AgentId,
    /// Unique, stable across timesteps.
    pub name:       String,
    pub cohort:     Cohort,
    pub agent_type: AgentType,

    /// Current token balance.
    pub tokens:            f64,
    /// Tokens vested in the current timestep only.
    pub tokens_vested:     f64,
    pub tokens_vested_cum: f64,

    pub tokens_incentivised_cum: f64,
    pub tokens_airdropped_cum:   f64,
    pub tokens_burned_cum:       f64,

    pub vesting: Option<VestingSchedule>,

    /// Written by the behavior-assignment stage.
    pub behavior:   Option<AssignedBehavior>,
    /// Written by the meta-bucket allocation stage.
    pub allocation: AgentAllocation,
}

impl AgentRecord {
    pub fn new(id: AgentId, name: impl Into<String>, cohort: Cohort, agent_type: AgentType) -> Self {
        Self {
            id,
            name: name.into(),
            cohort,
            agent_type,
            tokens: 0.0,
            tokens_vested: 0.0,
            tokens_vested_cum: 0.0,
            tokens_incentivised_cum: 0.0,
            tokens_airdropped_cum: 0.0,
            tokens_burned_cum: 0.0,
            vesting: None,
            behavior: None,
            allocation: AgentAllocation::default(),
        }
    }

    /// Balance held before the current timestep's vesting.
    #[inline]
    pub fn prior_balance(&self) -> f64 {
        self.tokens - self.tokens_vested
    }
}
