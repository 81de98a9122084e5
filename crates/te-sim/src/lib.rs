//! `te-sim` — timestep orchestrator for the rust_te simulator.
//!
//! # Timestep loop
//!
//! ```text
//! for t in 1..=config.total_timesteps:
//!   working = clone(history.last()); working.timestep = t
//!   for stage in pipeline:
//!     signals = merge(policy.evaluate(ctx(working)) for each policy)
//!     values  = [update.apply(ctx(working), signals) for each update]
//!     working.set(v) for v in values
//!   history.push(working)
//! ```
//!
//! Policies of one stage read the same state and never see each other's
//! output.  Each stage's updates are applied together, and the next stage
//! starts from the result.  A failure anywhere drops the working state.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | [`run_batch`] runs parameter sets on Rayon's thread pool |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use te_agent::load_agents_csv;
//! use te_core::{Params, SimConfig};
//! use te_economy::Snapshot;
//! use te_sim::{NoopObserver, SimBuilder};
//!
//! let params = Params::from_json_path("params.json".as_ref())?;
//! let agents = load_agents_csv("stakeholders.csv".as_ref())?;
//! let genesis = Snapshot::genesis(agents, &params)?;
//! let mut sim = SimBuilder::new(SimConfig::new(120), params, genesis).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod batch;
pub mod builder;
pub mod context;
pub mod error;
pub mod observer;
pub mod pipeline;
pub mod sim;
pub mod stage;


pub use batch::{BatchOutcome, run_batch};
pub use builder::SimBuilder;
pub use context::{Signal, SignalPayload, Signals, StageContext};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pipeline::default_pipeline;
pub use sim::Sim;
pub use stage::{Policy, Stage, Update};
