//! Liquidity-pool seeding.

use te_core::{Params, TeError, TeResult, keys};

use crate::LiquidityPool;

/// The parameters the pool is seeded with.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PoolSeed {
    pub tokens:      f64,
    pub token_price: f64,
    pub volatility:  f64,
}

impl PoolSeed {
    /// `initial_lp_token_allocation` and `initial_token_price` are required;
    /// `lp_volatility` defaults to zero.
    pub fn from_params(params: &Params) -> TeResult<Self> {
        let tokens = params.number(keys::INITIAL_LP_TOKEN_ALLOCATION)?;
        let token_price = params.number(keys::INITIAL_TOKEN_PRICE)?;
        if tokens < 0.0 || token_price <= 0.0 {
            return Err(TeError::Configuration(format!(
                "liquidity pool needs a non-negative token allocation and a positive price, \
                 got {tokens} tokens at {token_price} USD"
            )));
        }
        Ok(Self {
            tokens,
            token_price,
            volatility: params.number_or(keys::LP_VOLATILITY, 0.0)?,
        })
    }
}

/// Seed `pool` if it has not been seeded yet; otherwise return it unchanged.
pub fn seed_pool(pool: &LiquidityPool, seed: &PoolSeed) -> LiquidityPool {
    if pool.seeded {
        return *pool;
    }
    let usd = seed.tokens * seed.token_price;
    LiquidityPool {
        token_price:      seed.token_price,
        tokens:           seed.tokens,
        usd,
        constant_product: seed.tokens * usd,
        seed_tokens:      seed.tokens,
        volatility:       seed.volatility,
        seeded:           true,
    }
}
