//! The economy aggregator.
//!
//! ```text
//! circulating = Σ protocol_bucket balances + holding supply + pool tokens
//!             + staking APR payouts (cum) + revenue-share buybacks (cum)
//! unvested    = total supply − Σ vested (cum) − airdropped (cum) − pool seed
//! MC          = price × circulating
//! FDV MC      = price × total supply
//! ```
//!
//! The circulating figure counts protocol buckets in full and adds the
//! period's holding allocation on top of them.

use te_agent::{AgentRegistry, AgentType, BucketAmounts};

use crate::{LiquidityPool, TokenEconomy, Utilities};

/// Supply and market figures derived from one snapshot.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct TokenEconomyMetrics {
    pub total_supply:       f64,
    pub circulating_supply: f64,
    pub unvested_supply:    f64,
    pub market_cap:         f64,
    pub fdv_market_cap:     f64,
}

/// Recompute every metric from scratch.  Calling it twice on the same inputs
/// gives the same result.
pub fn aggregate(
    agents:    &AgentRegistry,
    pool:      &LiquidityPool,
    utilities: &Utilities,
    prior:     &TokenEconomy,
) -> TokenEconomyMetrics {
    let protocol_tokens: f64 = agents.of_type(AgentType::ProtocolBucket).map(|a| a.tokens).sum();
    let circulating_supply = protocol_tokens
        + prior.holding_supply
        + pool.tokens
        + utilities.staking_apr_tokens_cum
        + utilities.revenue_share_tokens_cum;

    let vested_cum: f64 = agents.iter().map(|a| a.tokens_vested_cum).sum();
    let total_supply = prior.total_supply;
    let unvested_supply = total_supply - vested_cum - prior.airdropped_tokens_cum - pool.seed_tokens;

    TokenEconomyMetrics {
        total_supply,
        circulating_supply,
        unvested_supply,
        market_cap: pool.token_price * circulating_supply,
        fdv_market_cap: pool.token_price * total_supply,
    }
}

impl TokenEconomy {
    /// A copy with the period's meta-bucket totals recorded.
    ///
    /// Per-period totals are overwritten, cumulative ones advanced, and the
    /// holding supply set to the period's holding total.
    pub fn record_allocation(&self, totals: BucketAmounts) -> TokenEconomy {
        TokenEconomy {
            selling_allocation: totals.selling,
            holding_allocation: totals.holding,
            utility_allocation: totals.utility,
            selling_allocation_cum: self.selling_allocation_cum + totals.selling,
            holding_allocation_cum: self.holding_allocation_cum + totals.holding,
            utility_allocation_cum: self.utility_allocation_cum + totals.utility,
            holding_supply: totals.holding,
            ..*self
        }
    }

    /// A copy with the aggregated metrics written in.
    pub fn with_metrics(&self, m: &TokenEconomyMetrics) -> TokenEconomy {
        TokenEconomy {
            total_supply: m.total_supply,
            circulating_supply: m.circulating_supply,
            unvested_supply: m.unvested_supply,
            market_cap: m.market_cap,
            fdv_market_cap: m.fdv_market_cap,
            ..*self
        }
    }
}
