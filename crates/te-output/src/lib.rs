//! `te-output` — snapshot writers for the rust_te simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                            |
//! |-----------|-------------|------------------------------------------|
//! | *(none)*  | CSV         | `token_economy.csv`, `agents.csv`        |
//! | `sqlite`  | SQLite      | `output.db`                              |
//!
//! Both implement [`OutputWriter`].  They are driven either live by
//! [`SimOutputObserver`], which implements `te_sim::SimObserver`, or after
//! the fact by [`write_history`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use te_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentRow, EconomyRow};
pub use writer::{OutputWriter, write_history};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
