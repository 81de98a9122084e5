//! The default monthly pipeline.
//!
//! | # | Stage                    | Writes                          |
//! |---|--------------------------|---------------------------------|
//! | 0 | `liquidity_pool_seeding` | liquidity_pool                  |
//! | 1 | `date`                   | date                            |
//! | 2 | `vesting`                | agents                          |
//! | 3 | `incentivisation`        | agents, token_economy           |
//! | 4 | `airdrops`               | agents, token_economy           |
//! | 5 | `burn`                   | agents, token_economy           |
//! | 6 | `behavior_assignment`    | agents                          |
//! | 7 | `meta_bucket_allocation` | agents, token_economy           |
//! | 8 | `user_adoption`          | user_adoption                   |
//! | 9 | `staking_apr`            | utilities                       |
//! |10 | `staking_revenue_share`  | utilities                       |
//! |11 | `business_assumptions`   | business_assumptions            |
//! |12 | `token_economy`          | token_economy                   |
//!
//! Behavior assignment must run before allocation: the allocator only
//! accepts profiles stamped in the current timestep.

pub mod agents;
pub mod business;
pub mod ecosystem;
pub mod token_economy;
pub mod utilities;

use te_core::TeResult;
use te_economy::{StateKey, StateValue, TokenFlow};

use crate::{Signals, Stage, StageContext, Update};

pub use agents::{AllocateMetaBuckets, AssignBehavior, UpdateAgentAllocations, UpdateAgentBehavior, UpdateAllocationTotals};
pub use business::{AdoptionMetrics, BusinessMetrics, UpdateBusinessAssumptions, UpdateUserAdoption};
pub use ecosystem::{
    Airdrop, BurnFromProtocolBucket, GenerateDate, Incentivise, SeedLiquidityPool, UpdateDate,
    UpdateLiquidityPool, UpdateVestedAgents, VestTokens,
};
pub use token_economy::{TokenEconomyMetricsPolicy, UpdateTokenEconomy};
pub use utilities::{RevenueShareBuyback, StakingApr, UpdateUtilitiesAfterApr, UpdateUtilitiesAfterBuyback};

/// Signal names emitted by the default policies.
pub mod names {
    pub const POOL: &str = "liquidity_pool";
    pub const DATE: &str = "new_date";
    pub const VESTING: &str = "vesting";
    pub const INCENTIVISATION: &str = "incentivisation";
    pub const AIRDROPS: &str = "airdrops";
    pub const BURN: &str = "burn";
    pub const BEHAVIORS: &str = "agent_behavior";
    pub const ALLOCATION: &str = "meta_bucket_allocation";
    pub const ADOPTION: &str = "user_adoption";
    pub const STAKING_APR: &str = "staking_apr";
    pub const BUYBACK: &str = "revenue_share_buyback";
    pub const BUSINESS: &str = "business_assumptions";
    pub const METRICS: &str = "token_economy_metrics";
}

/// Build the thirteen stages in their required order.
pub fn default_pipeline() -> Vec<Stage> {
    vec![
        Stage::new("liquidity_pool_seeding")
            .policy(SeedLiquidityPool)
            .update(UpdateLiquidityPool),
        Stage::new("date").policy(GenerateDate).update(UpdateDate),
        Stage::new("vesting").policy(VestTokens).update(UpdateVestedAgents),
        Stage::new("incentivisation")
            .policy(Incentivise)
            .update(ApplyFlow(names::INCENTIVISATION))
            .update(RecordFlow(names::INCENTIVISATION)),
        Stage::new("airdrops")
            .policy(Airdrop)
            .update(ApplyFlow(names::AIRDROPS))
            .update(RecordFlow(names::AIRDROPS)),
        Stage::new("burn")
            .policy(BurnFromProtocolBucket)
            .update(ApplyFlow(names::BURN))
            .update(RecordFlow(names::BURN)),
        Stage::new("behavior_assignment")
            .policy(AssignBehavior)
            .update(UpdateAgentBehavior),
        Stage::new("meta_bucket_allocation")
            .policy(AllocateMetaBuckets)
            .update(UpdateAgentAllocations)
            .update(UpdateAllocationTotals),
        Stage::new("user_adoption").policy(AdoptionMetrics).update(UpdateUserAdoption),
        Stage::new("staking_apr").policy(StakingApr).update(UpdateUtilitiesAfterApr),
        Stage::new("staking_revenue_share")
            .policy(RevenueShareBuyback)
            .update(UpdateUtilitiesAfterBuyback),
        Stage::new("business_assumptions")
            .policy(BusinessMetrics)
            .update(UpdateBusinessAssumptions),
        Stage::new("token_economy")
            .policy(TokenEconomyMetricsPolicy)
            .update(UpdateTokenEconomy),
    ]
}

// ── Shared flow updates ───────────────────────────────────────────────────────

/// Applies the [`TokenFlow`] in the named signal to agent balances.
pub struct ApplyFlow(pub &'static str);

impl Update for ApplyFlow {
    fn key(&self) -> StateKey {
        StateKey::Agents
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let flow = signals.get::<TokenFlow>(self.0)?;
        let agents = flow.apply_to(&ctx.previous.agents)?;
        Ok((StateKey::Agents, StateValue::Agents(agents)))
    }
}

/// Records the [`TokenFlow`] in the named signal in the token-economy
/// counters.
pub struct RecordFlow(pub &'static str);

impl Update for RecordFlow {
    fn key(&self) -> StateKey {
        StateKey::TokenEconomy
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let flow = signals.get::<TokenFlow>(self.0)?;
        let te = flow.record(&ctx.previous.token_economy);
        Ok((StateKey::TokenEconomy, StateValue::TokenEconomy(te)))
    }
}
