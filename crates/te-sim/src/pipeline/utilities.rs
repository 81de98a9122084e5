//! Staking utilities.

use te_core::TeResult;
use te_economy::{Buyback, StakingPayout, StakingTerms, StateKey, StateValue};

use super::names;
use crate::{Policy, Signal, Signals, StageContext, Update};

// ── Base APR ──────────────────────────────────────────────────────────────────

/// Stakes a share of this period's utility allocation and pays the base APR.
pub struct StakingApr;

impl Policy for StakingApr {
    fn name(&self) -> &'static str {
        "apr"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let terms = StakingTerms::from_params(ctx.params)?;
        let state = ctx.previous;
        let payout = StakingPayout::compute(&state.utilities, state.token_economy.utility_allocation, &terms);
        Ok(Signals::one(names::STAKING_APR, Signal::Staking(payout)))
    }
}

pub struct UpdateUtilitiesAfterApr;

impl Update for UpdateUtilitiesAfterApr {
    fn key(&self) -> StateKey {
        StateKey::Utilities
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let payout = signals.get::<StakingPayout>(names::STAKING_APR)?;
        Ok((StateKey::Utilities, StateValue::Utilities(payout.apply_to(&ctx.previous.utilities))))
    }
}

// ── Revenue share ─────────────────────────────────────────────────────────────

/// Spends a share of the period's product revenue on buying tokens back.
pub struct RevenueShareBuyback;

impl Policy for RevenueShareBuyback {
    fn name(&self) -> &'static str {
        "staking_revenue_share_buyback_amount"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let terms = StakingTerms::from_params(ctx.params)?;
        let state = ctx.previous;
        let buyback = Buyback::compute(state.user_adoption.product_revenue, &state.liquidity_pool, &terms);
        Ok(Signals::one(names::BUYBACK, Signal::Buyback(buyback)))
    }
}

pub struct UpdateUtilitiesAfterBuyback;

impl Update for UpdateUtilitiesAfterBuyback {
    fn key(&self) -> StateKey {
        StateKey::Utilities
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let buyback = signals.get::<Buyback>(names::BUYBACK)?;
        Ok((StateKey::Utilities, StateValue::Utilities(buyback.apply_to(&ctx.previous.utilities))))
    }
}
