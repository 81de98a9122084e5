//! The `Sim` struct and its timestep loop.

use tracing::{debug, info, warn};

use te_core::{Params, SimConfig};
use te_economy::Snapshot;

use crate::{SimObserver, SimResult, Stage, StageContext};

/// The main simulation runner.
///
/// `Sim` owns the committed history and drives the timestep loop:
///
/// 1. Clone the last committed snapshot into a working copy stamped with the
///    next timestep.
/// 2. For each stage in order: evaluate its policies against the working
///    copy, run its updates, and replace the written parts of the working
///    copy.
/// 3. Append the working copy to the history.
///
/// If any stage fails the working copy is dropped, so the history only ever
/// holds fully computed timesteps.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run length and output cadence.
    pub config: SimConfig,

    /// Model parameters, read-only for the whole run.
    pub params: Params,

    pub(crate) stages:  Vec<Stage>,
    /// Never empty: the first entry is the initial state.
    pub(crate) history: Vec<Snapshot>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.final_timestep()` has been committed.
    ///
    /// Calls observer hooks at every timestep boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.final_timestep();
        while self.current().timestep < end {
            self.step(observer)?;
        }
        observer.on_sim_end(self.current().timestep);
        info!(
            timesteps = self.current().timestep.0,
            snapshots = self.history.len(),
            "simulation finished"
        );
        Ok(())
    }

    /// Run exactly `n` timesteps from the current position (ignores
    /// `config.total_timesteps`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_timesteps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// The last committed snapshot.
    #[inline]
    pub fn current(&self) -> &Snapshot {
        &self.history[self.history.len() - 1]
    }

    /// Every committed snapshot, initial state first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn into_history(self) -> Vec<Snapshot> {
        self.history
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    // ── Core timestep processing ──────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let mut working = self.current().clone();
        let timestep = working.timestep.next();
        working.timestep = timestep;
        observer.on_timestep_start(timestep);

        for (stage_index, stage) in self.stages.iter().enumerate() {
            let ctx = StageContext {
                params: &self.params,
                stage_index,
                timestep,
                history: &self.history,
                previous: &working,
            };
            let values = stage.execute(&ctx).inspect_err(|e| {
                warn!(timestep = timestep.0, stage = stage.name(), error = %e, "stage failed, timestep discarded");
            })?;

            for value in values {
                working.set(value);
            }
            debug!(timestep = timestep.0, stage = stage.name(), "stage applied");
            observer.on_stage_end(timestep, stage_index, stage.name());
        }

        info!(
            timestep = timestep.0,
            date = %working.date,
            circulating = working.token_economy.circulating_supply,
            market_cap = working.token_economy.market_cap,
            "timestep committed"
        );
        self.history.push(working);

        if self.config.output_interval > 0 && timestep.0 % self.config.output_interval == 0 {
            observer.on_snapshot(self.current());
        }
        Ok(())
    }
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("config", &self.config)
            .field("stages", &self.stages)
            .field("committed", &self.current().timestep)
            .finish()
    }
}
