//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `token_economy` and `agents`.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};

use crate::writer::OutputWriter;
use crate::{AgentRow, EconomyRow, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:           Connection,
    economy_insert: String,
    finished:       bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        // timestep, date, then one REAL column per value.
        let value_columns: Vec<String> = EconomyRow::HEADER[2..]
            .iter()
            .map(|name| format!("{name} REAL NOT NULL"))
            .collect();
        conn.execute_batch(&format!(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS token_economy (
                 timestep INTEGER PRIMARY KEY,
                 date     TEXT NOT NULL,
                 {}
             );
             CREATE TABLE IF NOT EXISTS agents (
                 timestep          INTEGER NOT NULL,
                 agent_id          INTEGER NOT NULL,
                 name              TEXT NOT NULL,
                 cohort            TEXT NOT NULL,
                 agent_type        TEXT NOT NULL,
                 tokens            REAL NOT NULL,
                 tokens_vested     REAL NOT NULL,
                 tokens_vested_cum REAL NOT NULL,
                 selling           REAL NOT NULL,
                 holding           REAL NOT NULL,
                 utility           REAL NOT NULL,
                 holding_excluded  INTEGER NOT NULL,
                 PRIMARY KEY (timestep, agent_id)
             );",
            value_columns.join(",\n                 ")
        ))?;

        let placeholders: Vec<String> =
            (1..=EconomyRow::HEADER.len()).map(|i| format!("?{i}")).collect();
        let economy_insert = format!(
            "INSERT INTO token_economy ({}) VALUES ({})",
            EconomyRow::HEADER.join(", "),
            placeholders.join(", ")
        );

        Ok(Self { conn, economy_insert, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agents \
                 (timestep, agent_id, name, cohort, agent_type, tokens, tokens_vested, \
                  tokens_vested_cum, selling, holding, utility, holding_excluded) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.timestep as i64,
                    row.agent_id,
                    row.name,
                    row.cohort,
                    row.agent_type,
                    row.tokens,
                    row.tokens_vested,
                    row.tokens_vested_cum,
                    row.selling,
                    row.holding,
                    row.utility,
                    row.holding_excluded as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_economy(&mut self, row: &EconomyRow) -> OutputResult<()> {
        let mut values = Vec::with_capacity(EconomyRow::HEADER.len());
        values.push(Value::Integer(row.timestep as i64));
        values.push(Value::Text(row.date.clone()));
        values.extend(row.values().into_iter().map(Value::Real));
        self.conn.execute(&self.economy_insert, params_from_iter(values))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
