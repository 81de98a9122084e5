//! `te-agent` — the agent registry for the `rust_te` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`kind`]      | `Cohort` (stakeholder), `AgentType` (allocation treatment)     |
//! | [`profile`]   | `BehaviorProfile`, `BucketAmounts`, `AgentAllocation`          |
//! | [`record`]    | `AgentRecord`, `VestingSchedule`                               |
//! | [`registry`]  | `AgentRegistry` (ordered records + name index)                 |
//! | [`builder`]   | `AgentRegistryBuilder`, `AgentSpec`                            |
//! | [`loader`]    | `load_agents_csv`, `load_agents_reader`                        |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                                 |
//!
//! Records are never destroyed during a run.  The registry is cloned into each
//! new snapshot and mutated only on the clone, so committed snapshots keep
//! their own copy.

pub mod builder;
pub mod error;
pub mod kind;
pub mod loader;
pub mod profile;
pub mod record;
pub mod registry;

#[cfg(test)]
mod tests;

pub use builder::{AgentRegistryBuilder, AgentSpec};
pub use error::{AgentError, AgentResult};
pub use kind::{AgentType, Cohort};
pub use loader::{load_agents_csv, load_agents_reader};
pub use profile::{AgentAllocation, AssignedBehavior, BehaviorProfile, BucketAmounts, HoldingAllocation};
pub use record::{AgentRecord, VestingSchedule};
pub use registry::AgentRegistry;
