//! User adoption and business bookkeeping.

use te_core::TeResult;
use te_economy::{AdoptionModel, BusinessAssumptions, BusinessTerms, StateKey, StateValue, UserAdoption};

use super::names;
use crate::{Policy, Signal, Signals, StageContext, Update};

pub struct AdoptionMetrics;

impl Policy for AdoptionMetrics {
    fn name(&self) -> &'static str {
        "user_adoption_metrics"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let adoption = AdoptionModel::from_params(ctx.params)?.at(ctx.timestep);
        Ok(Signals::one(names::ADOPTION, Signal::Adoption(adoption)))
    }
}

pub struct UpdateUserAdoption;

impl Update for UpdateUserAdoption {
    fn key(&self) -> StateKey {
        StateKey::UserAdoption
    }

    fn apply(&self, _ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let adoption = signals.get::<UserAdoption>(names::ADOPTION)?;
        Ok((StateKey::UserAdoption, StateValue::UserAdoption(*adoption)))
    }
}

/// Books the period's revenue, expenditure and buyback spend.
pub struct BusinessMetrics;

impl Policy for BusinessMetrics {
    fn name(&self) -> &'static str {
        "business_assumption_metrics"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let terms = BusinessTerms::from_params(ctx.params)?;
        let state = ctx.previous;
        let next = terms.advance(
            &state.business_assumptions,
            state.user_adoption.product_revenue,
            state.utilities.revenue_share_usd,
        );
        Ok(Signals::one(names::BUSINESS, Signal::Business(next)))
    }
}

pub struct UpdateBusinessAssumptions;

impl Update for UpdateBusinessAssumptions {
    fn key(&self) -> StateKey {
        StateKey::BusinessAssumptions
    }

    fn apply(&self, _ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let business = signals.get::<BusinessAssumptions>(names::BUSINESS)?;
        Ok((StateKey::BusinessAssumptions, StateValue::BusinessAssumptions(*business)))
    }
}
