//! Integration tests for te-output.

use te_agent::{AgentRegistryBuilder, AgentSpec, Cohort};
use te_core::{Params, SimConfig, keys};
use te_economy::Snapshot;
use te_sim::{Sim, SimBuilder};

fn params() -> Params {
    Params::new()
        .with(keys::AGENT_BEHAVIOR, "static")
        .with(keys::AVG_TOKEN_SELLING_ALLOCATION, 0.3)
        .with(keys::AVG_TOKEN_HOLDING_ALLOCATION, 0.5)
        .with(keys::AVG_TOKEN_UTILITY_ALLOCATION, 0.2)
        .with(keys::AVG_TOKEN_UTILITY_REMOVAL, 0.0)
        .with(keys::LAUNCH_DATE, "01.03.25")
        .with(keys::INITIAL_TOTAL_SUPPLY, 10_000.0)
        .with(keys::INITIAL_LP_TOKEN_ALLOCATION, 500.0)
        .with(keys::INITIAL_TOKEN_PRICE, 0.2)
}

fn genesis() -> Snapshot {
    let agents = AgentRegistryBuilder::new()
        .agent(AgentSpec::new("investors", Cohort::MarketInvestors).tokens(1_000.0))
        .agent(AgentSpec::new("reserve", Cohort::Reserve).tokens(2_000.0))
        .build()
        .unwrap();
    Snapshot::genesis(agents, &params()).unwrap()
}

fn sim(total: u64, interval: u64) -> Sim {
    let config = SimConfig { total_timesteps: total, output_interval: interval };
    SimBuilder::new(config, params(), genesis()).build().unwrap()
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::{AgentRow, EconomyRow};

    #[test]
    fn headers_match_values() {
        let row = EconomyRow::from_snapshot(&genesis());
        assert_eq!(EconomyRow::HEADER.len(), row.values().len() + 2);
        assert_eq!(row.date, "2025-03-01");
        assert_eq!(row.timestep, 0);
    }

    #[test]
    fn agent_rows_follow_registry_order() {
        let mut s = sim(1, 1);
        s.run(&mut te_sim::NoopObserver).unwrap();
        let rows = AgentRow::from_snapshot(s.current());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "investors");
        assert_eq!(rows[0].agent_type, "market_investor");
        assert!(!rows[0].holding_excluded);
        assert!((rows[0].selling - 300.0).abs() < 1e-9);
        assert!(rows[1].holding_excluded);
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::writer::{OutputWriter, write_history};
    use crate::{AgentRow, EconomyRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_and_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (economy, rows) = read(&dir, "token_economy.csv");
        assert_eq!(economy, EconomyRow::HEADER);
        assert!(rows.is_empty());
        let (agents, _) = read(&dir, "agents.csv");
        assert_eq!(agents, AgentRow::HEADER);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_agents(&[]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn history_round_trip() {
        let mut s = sim(3, 1);
        s.run(&mut te_sim::NoopObserver).unwrap();

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_history(&mut w, s.history()).unwrap();

        let (_, economy) = read(&dir, "token_economy.csv");
        assert_eq!(economy.len(), 4);
        assert_eq!(&economy[0][0], "0");
        assert_eq!(&economy[3][0], "3");
        assert_eq!(&economy[3][1], "2025-05-01");

        let (_, agents) = read(&dir, "agents.csv");
        assert_eq!(agents.len(), 4 * 2);
        assert_eq!(&agents[2][2], "investors");
        assert_eq!(&agents[3][3], "reserve");
    }

    #[test]
    fn observer_writes_at_intervals() {
        let mut s = sim(6, 2);
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        obs.record_initial(s.current());
        s.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.written(), 3);

        // genesis + timesteps 2, 4, 6
        let (_, economy) = read(&dir, "token_economy.csv");
        let steps: Vec<&str> = economy.iter().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(steps, ["0", "2", "4", "6"]);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::{OutputWriter, write_history};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_history_counts() {
        let mut s = sim(2, 1);
        s.run(&mut te_sim::NoopObserver).unwrap();

        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        write_history(&mut w, s.history()).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let economy: i64 = conn
            .query_row("SELECT COUNT(*) FROM token_economy", [], |r| r.get(0))
            .unwrap();
        assert_eq!(economy, 3);
        let agents: i64 = conn.query_row("SELECT COUNT(*) FROM agents", [], |r| r.get(0)).unwrap();
        assert_eq!(agents, 6);

        let (date, price): (String, f64) = conn
            .query_row(
                "SELECT date, token_price FROM token_economy WHERE timestep = 2",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(date, "2025-04-01");
        assert!((price - 0.2).abs() < 1e-12);
    }

    #[test]
    fn sqlite_excluded_as_integer() {
        let mut s = sim(1, 1);
        s.run(&mut te_sim::NoopObserver).unwrap();

        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshot(s.current()).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let val: i64 = conn
            .query_row("SELECT holding_excluded FROM agents WHERE name = 'reserve'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(val, 1);
    }
}
