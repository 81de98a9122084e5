//! Simulation observer trait for progress reporting and data collection.

use te_core::Timestep;
use te_economy::Snapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// timestep loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_snapshot(&mut self, snapshot: &Snapshot) {
///         println!("{}: MC {:.0}", snapshot.date, snapshot.token_economy.market_cap);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the first stage of each timestep.
    fn on_timestep_start(&mut self, _timestep: Timestep) {}

    /// Called after each stage's updates have been applied to the working
    /// state.  The state is not committed yet.
    fn on_stage_end(&mut self, _timestep: Timestep, _stage_index: usize, _stage: &str) {}

    /// Called with each committed snapshot at output intervals (every
    /// `config.output_interval` timesteps).
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called once after the final timestep is committed.
    fn on_sim_end(&mut self, _final_timestep: Timestep) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
