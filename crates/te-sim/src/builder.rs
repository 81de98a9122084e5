//! Fluent builder for constructing a [`Sim`].

use te_core::{Params, SimConfig};
use te_economy::Snapshot;

use crate::{Sim, SimError, SimResult, Stage, default_pipeline};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total timesteps and output cadence
/// - [`Params`]: the model parameters
/// - [`Snapshot`]: the initial state, usually from [`Snapshot::genesis`]
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                   |
/// |------------------|-------------------------------------------|
/// | `.stages(v)`     | [`default_pipeline()`]                    |
/// | `.stage(s)`      | Appends one stage to the current list     |
///
/// # Example
///
/// ```rust,ignore
/// let genesis = Snapshot::genesis(agents, &params)?;
/// let mut sim = SimBuilder::new(SimConfig::new(60), params, genesis).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    params:  Params,
    genesis: Snapshot,
    stages:  Option<Vec<Stage>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, params: Params, genesis: Snapshot) -> Self {
        Self { config, params, genesis, stages: None }
    }

    /// Replace the whole pipeline.
    pub fn stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = Some(stages);
        self
    }

    /// Append a stage after the current pipeline (the default one if
    /// `stages` was not called).
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.get_or_insert_with(default_pipeline).push(stage);
        self
    }

    /// Validate the pipeline wiring and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let stages = self.stages.unwrap_or_else(default_pipeline);
        if stages.is_empty() {
            return Err(SimError::Config("pipeline has no stages".into()));
        }
        for stage in &stages {
            stage.validate()?;
        }
        if self.genesis.timestep > self.config.final_timestep() {
            return Err(SimError::Config(format!(
                "initial state is at {} but the run ends at {}",
                self.genesis.timestep,
                self.config.final_timestep()
            )));
        }
        if self.genesis.agents.is_empty() {
            tracing::warn!("initial state has no agents");
        }

        Ok(Sim {
            config:  self.config,
            params:  self.params,
            stages,
            history: vec![self.genesis],
        })
    }
}
