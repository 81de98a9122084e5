//! `te-economy` — the global state of a token economy and the pure functions
//! that move it forward one month.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`state`]      | `Snapshot` and its sub-states, `StateKey`, `StateValue`       |
//! | [`supply`]     | Vesting, incentivisation, airdrops, burns (`TokenFlow`)       |
//! | [`liquidity`]  | One-off liquidity-pool seeding                                |
//! | [`adoption`]   | Logistic user-adoption curves and product revenue            |
//! | [`staking`]    | Staking APR payouts and revenue-share buybacks                |
//! | [`business`]   | Cash balance bookkeeping                                      |
//! | [`aggregate`]  | Circulating/unvested supply, market cap, FDV market cap       |
//!
//! Nothing here mutates its inputs.  Every function returns a new value and the
//! engine decides when it becomes part of a committed snapshot.

pub mod adoption;
pub mod aggregate;
pub mod business;
pub mod liquidity;
pub mod staking;
pub mod state;
pub mod supply;


pub use adoption::{AdoptionCurve, AdoptionModel};
pub use aggregate::{TokenEconomyMetrics, aggregate};
pub use business::BusinessTerms;
pub use liquidity::{PoolSeed, seed_pool};
pub use staking::{Buyback, StakingPayout, StakingTerms};
pub use state::{
    BusinessAssumptions, LiquidityPool, Snapshot, StateKey, StateValue, TokenEconomy, UserAdoption,
    Utilities,
};
pub use supply::{FlowKind, TokenFlow, VestingRelease};
