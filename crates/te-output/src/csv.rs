//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `token_economy.csv`
//! - `agents.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentRow, EconomyRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    economy:  Writer<File>,
    agents:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut economy = Writer::from_path(dir.join("token_economy.csv"))?;
        economy.write_record(EconomyRow::HEADER)?;

        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record(AgentRow::HEADER)?;

        Ok(Self { economy, agents, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.timestep.to_string(),
                row.agent_id.to_string(),
                row.name.clone(),
                row.cohort.to_owned(),
                row.agent_type.to_owned(),
                row.tokens.to_string(),
                row.tokens_vested.to_string(),
                row.tokens_vested_cum.to_string(),
                row.selling.to_string(),
                row.holding.to_string(),
                row.utility.to_string(),
                (row.holding_excluded as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_economy(&mut self, row: &EconomyRow) -> OutputResult<()> {
        let mut record = Vec::with_capacity(EconomyRow::HEADER.len());
        record.push(row.timestep.to_string());
        record.push(row.date.clone());
        record.extend(row.values().iter().map(f64::to_string));
        self.economy.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.economy.flush()?;
        self.agents.flush()?;
        Ok(())
    }
}
