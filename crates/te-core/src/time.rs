//! Simulation time model.
//!
//! # Design
//!
//! Time advances in whole months.  The canonical counter is `Timestep`;
//! timestep 0 is the genesis state handed to the engine and timestep 1 is the
//! launch month.  The calendar date of a timestep is derived, never stored as
//! the source of truth:
//!
//!   date(t) = launch_date + (t - 1) months
//!
//! Dates are `chrono::NaiveDate`; month stepping clamps to the end of shorter
//! months (31 Jan + 1 month = 28/29 Feb).

use std::fmt;

use chrono::{Months, NaiveDate};

use crate::{TeError, TeResult};

// ── Timestep ──────────────────────────────────────────────────────────────────

/// An absolute monthly timestep counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Timestep(pub u64);

impl Timestep {
    pub const GENESIS: Timestep = Timestep(0);

    /// The timestep after `self`.
    #[inline]
    pub fn next(self) -> Timestep {
        Timestep(self.0 + 1)
    }

    /// Months elapsed since the launch month (timestep 1 → 0).
    ///
    /// Saturates at zero for the genesis timestep.
    #[inline]
    pub fn months_since_launch(self) -> u32 {
        self.0.saturating_sub(1) as u32
    }

    /// The calendar date of this timestep for a run launched on `launch`.
    /// The day is clamped to the end of shorter months.
    pub fn date_from(self, launch: NaiveDate) -> TeResult<NaiveDate> {
        launch
            .checked_add_months(Months::new(self.months_since_launch()))
            .ok_or_else(|| TeError::Configuration(format!("{self} is outside the supported calendar")))
    }
}

impl std::ops::Add<u64> for Timestep {
    type Output = Timestep;
    #[inline]
    fn add(self, rhs: u64) -> Timestep {
        Timestep(self.0 + rhs)
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timestep {}", self.0)
    }
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// Parse the launch-date format used by parameter files: `dd.mm.yy`.
///
/// A four-digit year (`dd.mm.yyyy`) is also accepted.
pub fn parse_launch_date(s: &str) -> TeResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%d.%m.%y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .map_err(|e| TeError::Parse(format!("launch date `{s}` is not dd.mm.yy: {e}")))
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration for the orchestrator.
///
/// Model parameters live in [`Params`][crate::Params]; this struct only holds
/// what the engine itself needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimConfig {
    /// Number of monthly timesteps to simulate.  There is no early exit.
    pub total_timesteps: u64,

    /// Notify observers with a full snapshot every N committed timesteps.
    /// 1 = every month; 0 disables snapshot callbacks.
    #[serde(default = "default_output_interval")]
    pub output_interval: u64,
}

fn default_output_interval() -> u64 {
    1
}

impl SimConfig {
    pub fn new(total_timesteps: u64) -> Self {
        Self { total_timesteps, output_interval: 1 }
    }

    /// The last timestep that will be committed.
    #[inline]
    pub fn final_timestep(&self) -> Timestep {
        Timestep(self.total_timesteps)
    }
}
