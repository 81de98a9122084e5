//! Behavior assignment and meta-bucket allocation.

use te_behavior::{BehaviorAssignment, BehaviorMode, MetaBucketAllocation, allocate, resolve_all};
use te_core::TeResult;
use te_economy::{StateKey, StateValue};

use super::names;
use crate::{Policy, Signal, Signals, StageContext, Update};

// ── Behavior assignment ───────────────────────────────────────────────────────

pub struct AssignBehavior;

impl Policy for AssignBehavior {
    fn name(&self) -> &'static str {
        "generate_agent_meta_bucket_behavior"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let mode = BehaviorMode::from_params(ctx.params)?;
        let assignment = resolve_all(mode, ctx.params, &ctx.previous.agents)?;
        Ok(Signals::one(names::BEHAVIORS, Signal::Behaviors(assignment)))
    }
}

/// Stamps each agent with its profile for the current timestep.
pub struct UpdateAgentBehavior;

impl Update for UpdateAgentBehavior {
    fn key(&self) -> StateKey {
        StateKey::Agents
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let assignment = signals.get::<BehaviorAssignment>(names::BEHAVIORS)?;
        let agents = assignment.apply_to(&ctx.previous.agents, ctx.timestep)?;
        Ok((StateKey::Agents, StateValue::Agents(agents)))
    }
}

// ── Meta-bucket allocation ────────────────────────────────────────────────────

/// Allocates from the profiles stamped earlier in this timestep.  A missing
/// or stale stamp fails with `MissingAllocation`.
pub struct AllocateMetaBuckets;

impl Policy for AllocateMetaBuckets {
    fn name(&self) -> &'static str {
        "agent_meta_bucket_allocations"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let agents = &ctx.previous.agents;
        let behaviors = BehaviorAssignment::stamped(agents, ctx.timestep)?;
        let allocation = allocate(agents, &behaviors, ctx.timestep)?;
        Ok(Signals::one(names::ALLOCATION, Signal::Allocation(allocation)))
    }
}

pub struct UpdateAgentAllocations;

impl Update for UpdateAgentAllocations {
    fn key(&self) -> StateKey {
        StateKey::Agents
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let allocation = signals.get::<MetaBucketAllocation>(names::ALLOCATION)?;
        let agents = allocation.apply_to(&ctx.previous.agents)?;
        Ok((StateKey::Agents, StateValue::Agents(agents)))
    }
}

pub struct UpdateAllocationTotals;

impl Update for UpdateAllocationTotals {
    fn key(&self) -> StateKey {
        StateKey::TokenEconomy
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let allocation = signals.get::<MetaBucketAllocation>(names::ALLOCATION)?;
        let te = ctx.previous.token_economy.record_allocation(allocation.totals);
        Ok((StateKey::TokenEconomy, StateValue::TokenEconomy(te)))
    }
}
