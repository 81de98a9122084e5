//! Token supply movements: vesting releases and agent-to-agent flows.

use te_agent::{AgentRegistry, AgentType, Cohort};
use te_core::{AgentId, Params, TeError, TeResult, Timestep, keys};

use crate::TokenEconomy;

// ── Vesting ───────────────────────────────────────────────────────────────────

/// Tokens released to each agent in one timestep, indexed by `AgentId`.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct VestingRelease {
    pub released: Vec<f64>,
}

impl VestingRelease {
    /// Compute the release for `timestep` from each agent's schedule and
    /// what it has already vested.  Agents without a schedule release nothing.
    pub fn compute(agents: &AgentRegistry, timestep: Timestep) -> Self {
        let month = timestep.months_since_launch();
        let released = agents
            .iter()
            .map(|a| match a.vesting {
                Some(schedule) => (schedule.vested_by(month) - a.tokens_vested_cum).max(0.0),
                None => 0.0,
            })
            .collect();
        Self { released }
    }

    pub fn total(&self) -> f64 {
        self.released.iter().sum()
    }

    /// A copy of `agents` with the release credited.  `tokens_vested` is
    /// overwritten on every agent, including those that released nothing.
    pub fn apply_to(&self, agents: &AgentRegistry) -> TeResult<AgentRegistry> {
        let mut updated = agents.clone();
        for record in updated.iter_mut() {
            let amount = *self
                .released
                .get(record.id.index())
                .ok_or_else(|| TeError::AgentNotFound(record.name.clone()))?;
            record.tokens += amount;
            record.tokens_vested = amount;
            record.tokens_vested_cum += amount;
        }
        Ok(updated)
    }
}

// ── Flows ─────────────────────────────────────────────────────────────────────

/// What a [`TokenFlow`] represents, which selects the counters it moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FlowKind {
    Incentive,
    Airdrop,
    Burn,
}

/// Per-agent balance changes for one flow, indexed by `AgentId`.
///
/// `amount` is the size of the flow: tokens emitted, airdropped or burned.
#[derive(Clone, PartialEq, Debug)]
pub struct TokenFlow {
    pub kind:   FlowKind,
    pub deltas: Vec<f64>,
    pub amount: f64,
}

impl TokenFlow {
    /// A flow that moves nothing.
    pub fn none(kind: FlowKind, agents: &AgentRegistry) -> Self {
        Self { kind, deltas: vec![0.0; agents.len()], amount: 0.0 }
    }

    /// Move `incentivisation_monthly_emission` tokens out of the
    /// incentivisation bucket, capped at its balance, and split them evenly
    /// across incentivisation receivers.
    ///
    /// Nothing moves when either side is missing or the emission is zero.
    pub fn incentivisation(agents: &AgentRegistry, params: &Params) -> TeResult<Self> {
        let emission = params.number_or(keys::INCENTIVISATION_MONTHLY_EMISSION, 0.0)?;
        if emission < 0.0 {
            return Err(TeError::Configuration(format!(
                "{} must not be negative",
                keys::INCENTIVISATION_MONTHLY_EMISSION
            )));
        }
        let mut flow = Self::none(FlowKind::Incentive, agents);

        let Some(source) = agents.of_cohort(Cohort::Incentivisation).next() else {
            return Ok(flow);
        };
        let receivers: Vec<AgentId> =
            agents.of_type(AgentType::IncentivisationReceiver).map(|a| a.id).collect();
        if receivers.is_empty() {
            return Ok(flow);
        }

        let amount = emission.min(source.tokens.max(0.0));
        flow.deltas[source.id.index()] -= amount;
        flow.spread(&receivers, amount);
        flow.amount = amount;
        Ok(flow)
    }

    /// Airdrop `airdrop_monthly_amount` tokens, split evenly across airdrop
    /// receivers, for the first `airdrop_months` timesteps.  Airdropped tokens
    /// come out of the unvested supply, not out of another agent.
    pub fn airdrop(agents: &AgentRegistry, params: &Params, timestep: Timestep) -> TeResult<Self> {
        let monthly = params.number_or(keys::AIRDROP_MONTHLY_AMOUNT, 0.0)?;
        let months = params.number_or(keys::AIRDROP_MONTHS, 0.0)?;
        let mut flow = Self::none(FlowKind::Airdrop, agents);

        if monthly <= 0.0 || timestep.0 as f64 > months {
            return Ok(flow);
        }
        let receivers: Vec<AgentId> =
            agents.of_type(AgentType::AirdropReceiver).map(|a| a.id).collect();
        if receivers.is_empty() {
            return Ok(flow);
        }

        flow.spread(&receivers, monthly);
        flow.amount = monthly;
        Ok(flow)
    }

    /// Burn `protocol_bucket_burn_rate` of the `burn_bucket` agent's balance.
    ///
    /// `burn_bucket` names an agent and is only required when the rate is
    /// positive.
    pub fn burn(agents: &AgentRegistry, params: &Params) -> TeResult<Self> {
        let rate = params.fraction_or(keys::PROTOCOL_BUCKET_BURN_RATE, 0.0)?;
        let mut flow = Self::none(FlowKind::Burn, agents);
        if rate == 0.0 {
            return Ok(flow);
        }

        let bucket = params.text(keys::BURN_BUCKET)?;
        let agent = agents.by_name(bucket).ok_or_else(|| {
            TeError::Configuration(format!("burn_bucket `{bucket}` is not a known agent"))
        })?;

        let amount = agent.tokens.max(0.0) * rate;
        flow.deltas[agent.id.index()] -= amount;
        flow.amount = amount;
        Ok(flow)
    }

    fn spread(&mut self, receivers: &[AgentId], amount: f64) {
        let share = amount / receivers.len() as f64;
        for id in receivers {
            self.deltas[id.index()] += share;
        }
    }

    /// A copy of `agents` with the deltas applied and the matching per-agent
    /// cumulative counter advanced.
    pub fn apply_to(&self, agents: &AgentRegistry) -> TeResult<AgentRegistry> {
        let mut updated = agents.clone();
        for record in updated.iter_mut() {
            let delta = *self
                .deltas
                .get(record.id.index())
                .ok_or_else(|| TeError::AgentNotFound(record.name.clone()))?;
            record.tokens += delta;
            match self.kind {
                FlowKind::Incentive if delta > 0.0 => record.tokens_incentivised_cum += delta,
                FlowKind::Airdrop => record.tokens_airdropped_cum += delta,
                FlowKind::Burn => record.tokens_burned_cum -= delta,
                FlowKind::Incentive => {}
            }
        }
        Ok(updated)
    }

    /// A copy of `te` with this flow's per-period counter set and its
    /// cumulative counter advanced.
    pub fn record(&self, te: &TokenEconomy) -> TokenEconomy {
        let mut next = *te;
        match self.kind {
            FlowKind::Incentive => {
                next.incentivised_tokens = self.amount;
                next.incentivised_tokens_cum += self.amount;
            }
            FlowKind::Airdrop => {
                next.airdropped_tokens = self.amount;
                next.airdropped_tokens_cum += self.amount;
            }
            FlowKind::Burn => {
                next.burned_tokens = self.amount;
                next.burned_tokens_cum += self.amount;
            }
        }
        next
    }
}
