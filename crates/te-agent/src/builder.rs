//! Fluent builder for constructing an `AgentRegistry`.
//!
//! # Usage
//!
//! ```rust
//! use te_agent::{AgentRegistryBuilder, AgentSpec, Cohort, VestingSchedule};
//!
//! let registry = AgentRegistryBuilder::new()
//!     .agent(AgentSpec::new("seed", Cohort::Seed).vesting(VestingSchedule {
//!         allocation:     50_000_000.0,
//!         tge_fraction:   0.1,
//!         cliff_months:   6,
//!         vesting_months: 24,
//!     }))
//!     .agent(AgentSpec::new("reserve", Cohort::Reserve).tokens(200_000_000.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 2);
//! ```

use te_core::AgentId;

use crate::{AgentError, AgentRecord, AgentRegistry, AgentResult, AgentType, Cohort, VestingSchedule};

/// Initial configuration of one agent.
#[derive(Clone, Debug)]
pub struct AgentSpec {
    pub name:           String,
    pub cohort:         Cohort,
    /// Defaults to `cohort.default_type()`.
    pub agent_type:     Option<AgentType>,
    pub initial_tokens: f64,
    pub vesting:        Option<VestingSchedule>,
}

impl AgentSpec {
    pub fn new(name: impl Into<String>, cohort: Cohort) -> Self {
        Self {
            name: name.into(),
            cohort,
            agent_type: None,
            initial_tokens: 0.0,
            vesting: None,
        }
    }

    pub fn agent_type(mut self, agent_type: AgentType) -> Self {
        self.agent_type = Some(agent_type);
        self
    }

    /// Tokens already in the wallet at genesis (unlocked, not vesting).
    pub fn tokens(mut self, tokens: f64) -> Self {
        self.initial_tokens = tokens;
        self
    }

    pub fn vesting(mut self, vesting: VestingSchedule) -> Self {
        self.vesting = Some(vesting);
        self
    }
}

/// Fluent builder for [`AgentRegistry`].
///
/// Ids are assigned in insertion order, so the order of `agent` calls is the
/// iteration order of every per-agent result in the simulation.
#[derive(Default)]
pub struct AgentRegistryBuilder {
    specs: Vec<AgentSpec>,
}

impl AgentRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent(mut self, spec: AgentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn agents(mut self, specs: impl IntoIterator<Item = AgentSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Validate names and construct the registry.
    pub fn build(self) -> AgentResult<AgentRegistry> {
        let mut records: Vec<AgentRecord> = Vec::with_capacity(self.specs.len());
        for (i, spec) in self.specs.into_iter().enumerate() {
            if records.iter().any(|r| r.name == spec.name) {
                return Err(AgentError::DuplicateName(spec.name));
            }
            let id = AgentId::try_from(i)
                .map_err(|_| AgentError::Parse(format!("too many agents ({i})")))?;
            let agent_type = spec.agent_type.unwrap_or_else(|| spec.cohort.default_type());
            let mut record = AgentRecord::new(id, spec.name, spec.cohort, agent_type);
            record.tokens = spec.initial_tokens;
            record.vesting = spec.vesting;
            records.push(record);
        }
        Ok(AgentRegistry::from_records(records))
    }
}
