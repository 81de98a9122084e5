//! `te-core` — foundational types for the `rust_te` token-economy simulator.
//!
//! This crate is a dependency of every other `te-*` crate.  It has no `te-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                                |
//! | [`time`]    | `Timestep`, `SimConfig`, `parse_launch_date`             |
//! | [`params`]  | `Params`, `ParamValue`, well-known parameter [`keys`]    |
//! | [`error`]   | `TeError`, `TeResult`                                    |
//!
//! # Conventions
//!
//! Every share or rate stored in a `Params` bundle is a fraction in `[0, 1]`.
//! Token amounts are `f64`; USD amounts are `f64`.

pub mod error;
pub mod ids;
pub mod params;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TeError, TeResult};
pub use ids::AgentId;
pub use params::{ParamValue, Params, keys};
pub use time::{SimConfig, Timestep, parse_launch_date};
