//! Plain data row types written by output backends.

use te_economy::Snapshot;

/// The economy-wide state at the end of one timestep.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomyRow {
    pub timestep: u64,
    /// `YYYY-MM-DD`.
    pub date:     String,

    pub total_supply:       f64,
    pub circulating_supply: f64,
    pub unvested_supply:    f64,
    pub holding_supply:     f64,

    pub selling_allocation:     f64,
    pub holding_allocation:     f64,
    pub utility_allocation:     f64,
    pub selling_allocation_cum: f64,
    pub holding_allocation_cum: f64,
    pub utility_allocation_cum: f64,

    pub incentivised_tokens_cum: f64,
    pub airdropped_tokens_cum:   f64,
    pub burned_tokens_cum:       f64,

    pub market_cap:     f64,
    pub fdv_market_cap: f64,
    pub token_price:    f64,
    pub pool_tokens:    f64,

    pub product_users:   f64,
    pub token_holders:   f64,
    pub product_revenue: f64,
    pub cash_balance:    f64,

    pub staked_tokens:            f64,
    pub staking_apr_tokens_cum:   f64,
    pub revenue_share_tokens_cum: f64,
}

impl EconomyRow {
    pub const HEADER: [&'static str; 26] = [
        "timestep",
        "date",
        "total_supply",
        "circulating_supply",
        "unvested_supply",
        "holding_supply",
        "selling_allocation",
        "holding_allocation",
        "utility_allocation",
        "selling_allocation_cum",
        "holding_allocation_cum",
        "utility_allocation_cum",
        "incentivised_tokens_cum",
        "airdropped_tokens_cum",
        "burned_tokens_cum",
        "market_cap",
        "fdv_market_cap",
        "token_price",
        "pool_tokens",
        "product_users",
        "token_holders",
        "product_revenue",
        "cash_balance",
        "staked_tokens",
        "staking_apr_tokens_cum",
        "revenue_share_tokens_cum",
    ];

    pub fn from_snapshot(s: &Snapshot) -> Self {
        let te = &s.token_economy;
        Self {
            timestep: s.timestep.0,
            date: s.date.to_string(),
            total_supply: te.total_supply,
            circulating_supply: te.circulating_supply,
            unvested_supply: te.unvested_supply,
            holding_supply: te.holding_supply,
            selling_allocation: te.selling_allocation,
            holding_allocation: te.holding_allocation,
            utility_allocation: te.utility_allocation,
            selling_allocation_cum: te.selling_allocation_cum,
            holding_allocation_cum: te.holding_allocation_cum,
            utility_allocation_cum: te.utility_allocation_cum,
            incentivised_tokens_cum: te.incentivised_tokens_cum,
            airdropped_tokens_cum: te.airdropped_tokens_cum,
            burned_tokens_cum: te.burned_tokens_cum,
            market_cap: te.market_cap,
            fdv_market_cap: te.fdv_market_cap,
            token_price: s.liquidity_pool.token_price,
            pool_tokens: s.liquidity_pool.tokens,
            product_users: s.user_adoption.product_users,
            token_holders: s.user_adoption.token_holders,
            product_revenue: s.user_adoption.product_revenue,
            cash_balance: s.business_assumptions.cash_balance,
            staked_tokens: s.utilities.staked_tokens,
            staking_apr_tokens_cum: s.utilities.staking_apr_tokens_cum,
            revenue_share_tokens_cum: s.utilities.revenue_share_tokens_cum,
        }
    }

    /// The numeric columns after `date`, in header order.
    pub fn values(&self) -> [f64; 24] {
        [
            self.total_supply,
            self.circulating_supply,
            self.unvested_supply,
            self.holding_supply,
            self.selling_allocation,
            self.holding_allocation,
            self.utility_allocation,
            self.selling_allocation_cum,
            self.holding_allocation_cum,
            self.utility_allocation_cum,
            self.incentivised_tokens_cum,
            self.airdropped_tokens_cum,
            self.burned_tokens_cum,
            self.market_cap,
            self.fdv_market_cap,
            self.token_price,
            self.pool_tokens,
            self.product_users,
            self.token_holders,
            self.product_revenue,
            self.cash_balance,
            self.staked_tokens,
            self.staking_apr_tokens_cum,
            self.revenue_share_tokens_cum,
        ]
    }
}

/// One agent's balances and allocation at the end of one timestep.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRow {
    pub timestep:          u64,
    pub agent_id:          u32,
    pub name:              String,
    pub cohort:            &'static str,
    pub agent_type:        &'static str,
    pub tokens:            f64,
    pub tokens_vested:     f64,
    pub tokens_vested_cum: f64,
    /// Fresh plus from-holdings.
    pub selling:           f64,
    pub holding:           f64,
    pub utility:           f64,
    /// `true` when no from-holdings allocation was made: protocol buckets,
    /// and every agent before its first allocation.
    pub holding_excluded:  bool,
}

impl AgentRow {
    pub const HEADER: [&'static str; 12] = [
        "timestep",
        "agent_id",
        "name",
        "cohort",
        "agent_type",
        "tokens",
        "tokens_vested",
        "tokens_vested_cum",
        "selling",
        "holding",
        "utility",
        "holding_excluded",
    ];

    pub fn from_snapshot(s: &Snapshot) -> Vec<Self> {
        s.agents
            .iter()
            .map(|a| {
                let combined = a.allocation.combined();
                AgentRow {
                    timestep:          s.timestep.0,
                    agent_id:          a.id.0,
                    name:              a.name.clone(),
                    cohort:            a.cohort.as_str(),
                    agent_type:        a.agent_type.as_str(),
                    tokens:            a.tokens,
                    tokens_vested:     a.tokens_vested,
                    tokens_vested_cum: a.tokens_vested_cum,
                    selling:           combined.selling,
                    holding:           combined.holding,
                    utility:           combined.utility,
                    holding_excluded:  a.allocation.from_holding.is_excluded(),
                }
            })
            .collect()
    }
}
