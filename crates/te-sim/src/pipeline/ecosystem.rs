//! Liquidity-pool seeding, date, vesting, and the supply flows.

use chrono::NaiveDate;
use te_core::{TeResult, keys, parse_launch_date};
use te_economy::{LiquidityPool, PoolSeed, StateKey, StateValue, TokenFlow, VestingRelease, seed_pool};

use super::names;
use crate::{Policy, Signal, Signals, StageContext, Update};

// ── Liquidity pool ────────────────────────────────────────────────────────────

pub struct SeedLiquidityPool;

impl Policy for SeedLiquidityPool {
    fn name(&self) -> &'static str {
        "seed_liquidity_pool"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let seed = PoolSeed::from_params(ctx.params)?;
        let pool = seed_pool(&ctx.previous.liquidity_pool, &seed);
        Ok(Signals::one(names::POOL, Signal::LiquidityPool(pool)))
    }
}

pub struct UpdateLiquidityPool;

impl Update for UpdateLiquidityPool {
    fn key(&self) -> StateKey {
        StateKey::LiquidityPool
    }

    fn apply(&self, _ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let pool = signals.get::<LiquidityPool>(names::POOL)?;
        Ok((StateKey::LiquidityPool, StateValue::LiquidityPool(*pool)))
    }
}

// ── Date ──────────────────────────────────────────────────────────────────────

pub struct GenerateDate;

impl Policy for GenerateDate {
    fn name(&self) -> &'static str {
        "generate_date"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let launch = parse_launch_date(ctx.params.text(keys::LAUNCH_DATE)?)?;
        let date = ctx.timestep.date_from(launch)?;
        Ok(Signals::one(names::DATE, Signal::Date(date)))
    }
}

pub struct UpdateDate;

impl Update for UpdateDate {
    fn key(&self) -> StateKey {
        StateKey::Date
    }

    fn apply(&self, _ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let date = signals.get::<NaiveDate>(names::DATE)?;
        Ok((StateKey::Date, StateValue::Date(*date)))
    }
}

// ── Vesting ───────────────────────────────────────────────────────────────────

pub struct VestTokens;

impl Policy for VestTokens {
    fn name(&self) -> &'static str {
        "vest_tokens"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let release = VestingRelease::compute(&ctx.previous.agents, ctx.timestep);
        Ok(Signals::one(names::VESTING, Signal::Vesting(release)))
    }
}

pub struct UpdateVestedAgents;

impl Update for UpdateVestedAgents {
    fn key(&self) -> StateKey {
        StateKey::Agents
    }

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)> {
        let release = signals.get::<VestingRelease>(names::VESTING)?;
        let agents = release.apply_to(&ctx.previous.agents)?;
        Ok((StateKey::Agents, StateValue::Agents(agents)))
    }
}

// ── Flows ─────────────────────────────────────────────────────────────────────

pub struct Incentivise;

impl Policy for Incentivise {
    fn name(&self) -> &'static str {
        "incentivisation"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let flow = TokenFlow::incentivisation(&ctx.previous.agents, ctx.params)?;
        Ok(Signals::one(names::INCENTIVISATION, Signal::Flow(flow)))
    }
}

pub struct Airdrop;

impl Policy for Airdrop {
    fn name(&self) -> &'static str {
        "airdrops"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let flow = TokenFlow::airdrop(&ctx.previous.agents, ctx.params, ctx.timestep)?;
        Ok(Signals::one(names::AIRDROPS, Signal::Flow(flow)))
    }
}

pub struct BurnFromProtocolBucket;

impl Policy for BurnFromProtocolBucket {
    fn name(&self) -> &'static str {
        "burn_from_protocol_bucket"
    }

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals> {
        let flow = TokenFlow::burn(&ctx.previous.agents, ctx.params)?;
        Ok(Signals::one(names::BURN, Signal::Flow(flow)))
    }
}
