//! The `OutputWriter` trait implemented by all backend writers.

use te_economy::Snapshot;

use crate::{AgentRow, EconomyRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write one row per agent for a single timestep.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Write the economy-wide row for one timestep.
    fn write_economy(&mut self, row: &EconomyRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write both row kinds for `snapshot`.
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> OutputResult<()> {
        self.write_economy(&EconomyRow::from_snapshot(snapshot))?;
        self.write_agents(&AgentRow::from_snapshot(snapshot))
    }
}

/// Write every snapshot of a finished (or aborted) run, then finish.
pub fn write_history<W: OutputWriter>(writer: &mut W, history: &[Snapshot]) -> OutputResult<()> {
    for snapshot in history {
        writer.write_snapshot(snapshot)?;
    }
    writer.finish()
}
