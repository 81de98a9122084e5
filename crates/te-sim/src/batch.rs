//! Runs of independent parameter sets over the same stakeholders.

use tracing::{info, warn};

use te_agent::AgentRegistry;
use te_core::{Params, SimConfig};
use te_economy::Snapshot;

use crate::{NoopObserver, SimBuilder, SimResult};

/// The result of one run in a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Position of the parameter set in the batch input.
    pub index:   usize,
    pub result:  SimResult<()>,
    /// Every snapshot committed before the run ended or failed.  Empty if
    /// the initial state could not be built.
    pub history: Vec<Snapshot>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run every parameter set for `config.total_timesteps` with the default
/// pipeline.
///
/// Runs share nothing, so with the `parallel` feature they execute on
/// Rayon's thread pool.  Outcomes are returned in input order either way.
pub fn run_batch(config: &SimConfig, agents: &AgentRegistry, param_sets: &[Params]) -> Vec<BatchOutcome> {
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<BatchOutcome> = param_sets
        .iter()
        .enumerate()
        .map(|(index, params)| run_one(index, config, agents, params))
        .collect();

    #[cfg(feature = "parallel")]
    let outcomes: Vec<BatchOutcome> = {
        use rayon::prelude::*;

        param_sets
            .par_iter()
            .enumerate()
            .map(|(index, params)| run_one(index, config, agents, params))
            .collect()
    };

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(runs = outcomes.len(), failed, "batch finished");
    outcomes
}

fn run_one(index: usize, config: &SimConfig, agents: &AgentRegistry, params: &Params) -> BatchOutcome {
    let genesis = match Snapshot::genesis(agents.clone(), params) {
        Ok(s) => s,
        Err(e) => {
            warn!(run = index, error = %e, "could not build initial state");
            return BatchOutcome { index, result: Err(e.into()), history: Vec::new() };
        }
    };

    let mut sim = match SimBuilder::new(config.clone(), params.clone(), genesis.clone()).build() {
        Ok(sim) => sim,
        Err(e) => return BatchOutcome { index, result: Err(e), history: vec![genesis] },
    };
    let result = sim.run(&mut NoopObserver);
    if let Err(e) = &result {
        warn!(run = index, error = %e, "run aborted");
    }
    BatchOutcome { index, result, history: sim.into_history() }
}
