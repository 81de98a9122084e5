//! `te-behavior` — how agents split their unlocked tokens.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`table`]     | `EconomyAverages`, the per-cohort stochastic profile table      |
//! | [`resolver`]  | `BehaviorMode`, `resolve`, `resolve_all`, `BehaviorAssignment`  |
//! | [`allocator`] | `allocate`, `MetaBucketAllocation`                              |
//!
//! # Two steps per timestep
//!
//! 1. **Resolve**: turn the economy-wide parameters into one
//!    `BehaviorProfile` per agent and stamp it onto the records.
//! 2. **Allocate**: turn each stamped profile into absolute token amounts,
//!    split into tokens that vested this timestep and tokens held before it.
//!
//! Both steps are pure functions of their inputs; writing results into a new
//! registry is a separate call so the caller controls copy-on-write.

pub mod allocator;
pub mod resolver;
pub mod table;

#[cfg(test)]
mod tests;

pub use allocator::{MetaBucketAllocation, allocate};
pub use resolver::{BehaviorAssignment, BehaviorMode, resolve, resolve_all};
pub use table::{EconomyAverages, check_profile, stochastic_profile};
