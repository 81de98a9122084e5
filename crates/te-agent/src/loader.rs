//! CSV stakeholder-table loader.
//!
//! # CSV format
//!
//! One row per agent.  `agent_type` may be left empty to use the cohort's
//! natural type; the vesting columns may be left empty for agents without a
//! schedule.
//!
//! ```csv
//! name,cohort,agent_type,initial_tokens,allocation,tge_fraction,cliff_months,vesting_months
//! seed,seed,,0,50000000,0.1,6,24
//! team,team,,0,150000000,0,12,36
//! reserve,reserve,,200000000,,,,
//! market_investors,market_investors,,0,,,,
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{AgentError, AgentRegistry, AgentRegistryBuilder, AgentResult, AgentSpec, VestingSchedule};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StakeholderRecord {
    name:           String,
    cohort:         String,
    agent_type:     Option<String>,
    #[serde(default)]
    initial_tokens: f64,
    allocation:     Option<f64>,
    tge_fraction:   Option<f64>,
    cliff_months:   Option<u32>,
    vesting_months: Option<u32>,
}

impl StakeholderRecord {
    fn into_spec(self) -> AgentResult<AgentSpec> {
        let cohort = self.cohort.trim().parse()?;
        let mut spec = AgentSpec::new(self.name.trim(), cohort).tokens(self.initial_tokens);

        if let Some(t) = self.agent_type.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            spec = spec.agent_type(t.parse()?);
        }

        if let Some(allocation) = self.allocation {
            let tge_fraction = self.tge_fraction.unwrap_or(0.0);
            if !(0.0..=1.0).contains(&tge_fraction) {
                return Err(AgentError::Parse(format!(
                    "agent `{}`: tge_fraction {tge_fraction} outside [0, 1]",
                    spec.name
                )));
            }
            spec = spec.vesting(VestingSchedule {
                allocation,
                tge_fraction,
                cliff_months:   self.cliff_months.unwrap_or(0),
                vesting_months: self.vesting_months.unwrap_or(0),
            });
        }
        Ok(spec)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the stakeholder table from a CSV file.
pub fn load_agents_csv(path: &Path) -> AgentResult<AgentRegistry> {
    let file = std::fs::File::open(path)?;
    load_agents_reader(file)
}

/// Like [`load_agents_csv`] but accepts any `Read` source.
pub fn load_agents_reader<R: Read>(reader: R) -> AgentResult<AgentRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = AgentRegistryBuilder::new();
    for result in csv_reader.deserialize::<StakeholderRecord>() {
        builder = builder.agent(result?.into_spec()?);
    }
    builder.build()
}
