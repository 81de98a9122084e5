//! Final aggregation of the token-economy metrics.

use te_behavior::EconomyAverages;
use te_core::TeResult;
use te_economy::{StateKey, StateValue, TokenEconomyMetrics, aggregate};

use super::names;
use crate::{Policy, Signal, Signals, StageContext, Update};

pub struct TokenEconomyMetricsPolicy;

impl Policy for TokenEconomyMetricsPolicy {
    fn name(&self) -> &'static str {
        "token_economy_metrics"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let state = ctx.previous;
        let metrics = aggregate(
            &state.agents,
            &state.liquidity_pool,
            &state.utilities,
            &state.token_economy,
        );
        Ok(Signals::one(names::METRICS, Signal::Metrics(metrics)))
    }
}

/// Writes the metrics and echoes the four economy-wide shares.
pub struct UpdateTokenEconomy;

impl Update for UpdateTokenEconomy {
    fn key(&self) -> StateKey {
        StateKey::TokenEconomy
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let metrics = signals.get::<TokenEconomyMetrics>(names::METRICS)?;
        let shares = EconomyAverages::from_params(ctx.params)?;

        let mut te = ctx.previous.token_economy.with_metrics(metrics);
        te.selling_share = shares.selling;
        te.holding_share = shares.holding;
        te.utility_share = shares.utility;
        te.removal_share = shares.removal;
        Ok((StateKey::TokenEconomy, StateValue::TokenEconomy(te)))
    }
}
