//! The committed state of the economy at the end of a timestep.
//!
//! A `Snapshot` is never mutated once committed.  Each timestep starts from a
//! clone of the last committed snapshot, stages replace whole sub-states on
//! that working copy through [`StateValue`]s, and the working copy is
//! committed only when every stage has succeeded.

use std::fmt;

use serde::Serialize;

use te_agent::AgentRegistry;
use chrono::NaiveDate;
use te_core::{Params, TeResult, Timestep, keys, parse_launch_date};

use crate::AdoptionModel;

// ── Sub-states ────────────────────────────────────────────────────────────────

/// The DEX liquidity pool.  Seeded once; price discovery is not modelled.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize)]
pub struct LiquidityPool {
    pub token_price:      f64,
    pub tokens:           f64,
    pub usd:              f64,
    /// `tokens × usd` at seeding.
    pub constant_product: f64,
    /// Tokens placed in the pool at seeding.
    pub seed_tokens:      f64,
    pub volatility:       f64,
    pub seeded:           bool,
}

/// Supply counters and market metrics.
///
/// Per-period counters are overwritten every timestep; each `*_cum` counter
/// is the running sum of its per-period counterpart.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize)]
pub struct TokenEconomy {
    pub total_supply:       f64,
    pub circulating_supply: f64,
    pub unvested_supply:    f64,
    /// Holding allocation of the current period.
    pub holding_supply:     f64,

    pub selling_allocation:     f64,
    pub holding_allocation:     f64,
    pub utility_allocation:     f64,
    pub selling_allocation_cum: f64,
    pub holding_allocation_cum: f64,
    pub utility_allocation_cum: f64,

    pub incentivised_tokens:     f64,
    pub incentivised_tokens_cum: f64,
    pub airdropped_tokens:       f64,
    pub airdropped_tokens_cum:   f64,
    pub burned_tokens:           f64,
    pub burned_tokens_cum:       f64,

    pub market_cap:     f64,
    pub fdv_market_cap: f64,

    // Echoed from parameters by the aggregation stage.
    pub selling_share: f64,
    pub holding_share: f64,
    pub utility_share: f64,
    pub removal_share: f64,
}

/// Product and token adoption.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize)]
pub struct UserAdoption {
    pub product_users:   f64,
    pub token_holders:   f64,
    /// USD per month.
    pub product_revenue: f64,
}

/// Business bookkeeping, in USD.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize)]
pub struct BusinessAssumptions {
    pub cash_balance:    f64,
    pub revenue:         f64,
    pub expenditures:    f64,
    pub buyback_usd:     f64,
    pub buyback_usd_cum: f64,
}

/// Token utilities.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize)]
pub struct Utilities {
    /// Tokens locked in staking.
    pub staked_tokens:            f64,
    pub staking_apr_tokens:       f64,
    pub staking_apr_tokens_cum:   f64,
    /// USD spent on revenue-share buybacks this period.
    pub revenue_share_usd:        f64,
    pub revenue_share_tokens:     f64,
    pub revenue_share_tokens_cum: f64,
}

// ── StateKey / StateValue ─────────────────────────────────────────────────────

/// Names one replaceable part of a [`Snapshot`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum StateKey {
    Date,
    Agents,
    LiquidityPool,
    TokenEconomy,
    UserAdoption,
    BusinessAssumptions,
    Utilities,
}

impl StateKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StateKey::Date => "date",
            StateKey::Agents => "agents",
            StateKey::LiquidityPool => "liquidity_pool",
            StateKey::TokenEconomy => "token_economy",
            StateKey::UserAdoption => "user_adoption",
            StateKey::BusinessAssumptions => "business_assumptions",
            StateKey::Utilities => "utilities",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A replacement value for one part of a [`Snapshot`].
#[derive(Clone, PartialEq, Debug)]
pub enum StateValue {
    Date(NaiveDate),
    Agents(AgentRegistry),
    LiquidityPool(LiquidityPool),
    TokenEconomy(TokenEconomy),
    UserAdoption(UserAdoption),
    BusinessAssumptions(BusinessAssumptions),
    Utilities(Utilities),
}

impl StateValue {
    /// The part of the snapshot this value replaces.
    pub fn key(&self) -> StateKey {
        match self {
            StateValue::Date(_) => StateKey::Date,
            StateValue::Agents(_) => StateKey::Agents,
            StateValue::LiquidityPool(_) => StateKey::LiquidityPool,
            StateValue::TokenEconomy(_) => StateKey::TokenEconomy,
            StateValue::UserAdoption(_) => StateKey::UserAdoption,
            StateValue::BusinessAssumptions(_) => StateKey::BusinessAssumptions,
            StateValue::Utilities(_) => StateKey::Utilities,
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Debug)]
pub struct Snapshot {
    pub timestep:             Timestep,
    pub date:                 NaiveDate,
    pub agents:               AgentRegistry,
    pub liquidity_pool:       LiquidityPool,
    pub token_economy:        TokenEconomy,
    pub user_adoption:        UserAdoption,
    pub business_assumptions: BusinessAssumptions,
    pub utilities:            Utilities,
}

impl Snapshot {
    /// The state before the first month.
    ///
    /// Requires `launch_date` and `initial_total_supply`; the adoption and
    /// cash-balance parameters are optional and default to zero.  The pool is
    /// left unseeded.
    pub fn genesis(agents: AgentRegistry, params: &Params) -> TeResult<Self> {
        let date = parse_launch_date(params.text(keys::LAUNCH_DATE)?)?;
        let total_supply = params.number(keys::INITIAL_TOTAL_SUPPLY)?;
        let adoption = AdoptionModel::from_params(params)?;

        Ok(Self {
            timestep: Timestep::GENESIS,
            date,
            agents,
            liquidity_pool: LiquidityPool::default(),
            token_economy: TokenEconomy {
                total_supply,
                unvested_supply: total_supply,
                ..TokenEconomy::default()
            },
            user_adoption: adoption.at(Timestep::GENESIS),
            business_assumptions: BusinessAssumptions {
                cash_balance: params.number_or(keys::INITIAL_CASH_BALANCE, 0.0)?,
                ..BusinessAssumptions::default()
            },
            utilities: Utilities::default(),
        })
    }

    /// Replace the part of `self` named by `value`.
    pub fn set(&mut self, value: StateValue) {
        match value {
            StateValue::Date(v) => self.date = v,
            StateValue::Agents(v) => self.agents = v,
            StateValue::LiquidityPool(v) => self.liquidity_pool = v,
            StateValue::TokenEconomy(v) => self.token_economy = v,
            StateValue::UserAdoption(v) => self.user_adoption = v,
            StateValue::BusinessAssumptions(v) => self.business_assumptions = v,
            StateValue::Utilities(v) => self.utilities = v,
        }
    }

    /// A copy of `self` with one part replaced.
    pub fn with(mut self, value: StateValue) -> Self {
        self.set(value);
        self
    }
}
