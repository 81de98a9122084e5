//! The meta-bucket allocator.
//!
//! For each agent with profile `p`:
//!
//! ```text
//! fresh        = vested_this_timestep × p   (early_investor, team only)
//! from_holding = (balance − vested_this_timestep) × p   (all but protocol_bucket)
//! totals       = Σ fresh + Σ from_holding, per bucket
//! ```
//!
//! Protocol buckets get `HoldingAllocation::Excluded`, which contributes
//! exactly zero to the totals.

use te_agent::{AgentAllocation, AgentRegistry, BucketAmounts, HoldingAllocation};
use te_core::{TeError, TeResult, Timestep};
use tracing::debug;

use crate::BehaviorAssignment;

/// Economy-wide totals plus the per-agent split that produced them.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MetaBucketAllocation {
    pub totals:    BucketAmounts,
    /// Indexed by `AgentId`.
    pub per_agent: Vec<AgentAllocation>,
}

impl MetaBucketAllocation {
    /// Sum of the fresh (newly vested) part only.
    pub fn fresh_totals(&self) -> BucketAmounts {
        self.per_agent.iter().map(|a| a.fresh).sum()
    }

    /// Sum of the from-holdings part only.
    pub fn from_holding_totals(&self) -> BucketAmounts {
        self.per_agent.iter().map(|a| a.from_holding.amounts()).sum()
    }

    /// A copy of `agents` with allocations recorded and the sold and
    /// utility-spent tokens removed from each balance.
    pub fn apply_to(&self, agents: &AgentRegistry) -> TeResult<AgentRegistry> {
        let mut updated = agents.clone();
        for record in updated.iter_mut() {
            let alloc = self
                .per_agent
                .get(record.id.index())
                .ok_or_else(|| TeError::AgentNotFound(record.name.clone()))?;
            record.allocation = *alloc;
            record.tokens -= alloc.combined().outflow();
        }
        Ok(updated)
    }
}

/// Allocate every agent's unlocked tokens to the meta buckets.
///
/// `timestep` is only used to label the error when `behaviors` does not cover
/// an agent.
pub fn allocate(
    agents:    &AgentRegistry,
    behaviors: &BehaviorAssignment,
    timestep:  Timestep,
) -> TeResult<MetaBucketAllocation> {
    let mut totals = BucketAmounts::ZERO;
    let mut per_agent = Vec::with_capacity(agents.len());

    for agent in agents {
        let profile = behaviors.get(agent.id).ok_or_else(|| TeError::MissingAllocation {
            agent: agent.name.clone(),
            timestep,
        })?;

        let fresh = if agent.agent_type.allocates_fresh_vesting() {
            profile.split(agent.tokens_vested)
        } else {
            BucketAmounts::ZERO
        };

        let from_holding = if agent.agent_type.is_protocol_bucket() {
            HoldingAllocation::Excluded
        } else {
            HoldingAllocation::Allocated(profile.split(agent.prior_balance()))
        };

        let alloc = AgentAllocation { fresh, from_holding };
        totals += alloc.combined();
        per_agent.push(alloc);
    }

    debug!(
        %timestep,
        selling = totals.selling,
        holding = totals.holding,
        utility = totals.utility,
        "meta-bucket allocation"
    );
    Ok(MetaBucketAllocation { totals, per_agent })
}
