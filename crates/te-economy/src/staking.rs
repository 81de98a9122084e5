//! Staking utilities: base APR payouts and revenue-share buybacks.

use te_core::{Params, TeResult, keys};

use crate::{LiquidityPool, Utilities};

/// Staking parameters.  All optional; zero disables the utility.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct StakingTerms {
    /// Share of the period's utility allocation that gets staked.
    pub share:         f64,
    /// Yearly base APR paid on staked tokens.
    pub apr:           f64,
    /// Share of product revenue spent on buying tokens back for stakers.
    pub revenue_share: f64,
}

impl StakingTerms {
    pub fn from_params(params: &Params) -> TeResult<Self> {
        Ok(Self {
            share:         params.fraction_or(keys::STAKING_SHARE, 0.0)?,
            apr:           params.number_or(keys::STAKING_APR, 0.0)?,
            revenue_share: params.fraction_or(keys::STAKING_REVENUE_SHARE, 0.0)?,
        })
    }
}

/// One month of base-APR staking.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct StakingPayout {
    /// Total staked after this period's deposit.
    pub staked: f64,
    pub payout: f64,
}

impl StakingPayout {
    /// Stake `share` of `utility_allocation` on top of what is already staked
    /// and pay a month of APR on the total.
    pub fn compute(utilities: &Utilities, utility_allocation: f64, terms: &StakingTerms) -> Self {
        let staked = utilities.staked_tokens + utility_allocation * terms.share;
        Self { staked, payout: staked * terms.apr / 12.0 }
    }

    pub fn apply_to(&self, utilities: &Utilities) -> Utilities {
        Utilities {
            staked_tokens: self.staked,
            staking_apr_tokens: self.payout,
            staking_apr_tokens_cum: utilities.staking_apr_tokens_cum + self.payout,
            ..*utilities
        }
    }
}

/// One month of revenue-share buyback.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Buyback {
    pub usd:    f64,
    pub tokens: f64,
}

impl Buyback {
    /// Spend `revenue_share` of `revenue` on tokens at the pool price.
    /// An unseeded pool has no price, so nothing is bought.
    pub fn compute(revenue: f64, pool: &LiquidityPool, terms: &StakingTerms) -> Self {
        if pool.token_price <= 0.0 {
            return Self { usd: 0.0, tokens: 0.0 };
        }
        let usd = revenue * terms.revenue_share;
        Self { usd, tokens: usd / pool.token_price }
    }

    pub fn apply_to(&self, utilities: &Utilities) -> Utilities {
        Utilities {
            revenue_share_usd: self.usd,
            revenue_share_tokens: self.tokens,
            revenue_share_tokens_cum: utilities.revenue_share_tokens_cum + self.tokens,
            ..*utilities
        }
    }
}
