//! monthly — five years of a small token economy.
//!
//! Runs the default pipeline over an embedded stakeholder table and
//! parameter set, writes CSV output to `output/monthly`, then re-runs the
//! same economy in both behavior modes as a batch for comparison.
//!
//! Pass a JSON parameter file as the first argument to override the embedded
//! parameters.  Logging honours `RUST_LOG` (default `warn`).

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use te_agent::load_agents_reader;
use te_core::{Params, SimConfig, keys};
use te_economy::Snapshot;
use te_output::{CsvWriter, SimOutputObserver};
use te_sim::{SimBuilder, run_batch};

// ── Constants ─────────────────────────────────────────────────────────────────

const MONTHS:          u64 = 60;
const OUTPUT_INTERVAL: u64 = 1;
const OUTPUT_DIR:      &str = "output/monthly";

// ── Stakeholder table ─────────────────────────────────────────────────────────

const STAKEHOLDERS_CSV: &str = "\
name,cohort,agent_type,initial_tokens,allocation,tge_fraction,cliff_months,vesting_months\n\
angle,angle,,0,20000000,0.05,6,24\n\
seed,seed,,0,50000000,0.1,6,24\n\
presale_1,presale_1,,0,40000000,0.15,3,18\n\
public_sale,public_sale,,0,30000000,0.5,0,6\n\
team,team,,0,150000000,0,12,36\n\
reserve,reserve,,0,200000000,0.2,0,48\n\
community,community,,0,100000000,0.1,0,48\n\
incentivisation,incentivisation,,0,100000000,0.05,0,60\n\
staking_vesting,staking_vesting,,0,50000000,0,0,60\n\
market_investors,market_investors,,0,,,,\n\
airdrop_receivers,airdrop_receivers,,0,,,,\n\
incentivisation_receivers,incentivisation_receivers,,0,,,,\n\
";

// ── Parameters ────────────────────────────────────────────────────────────────

const PARAMS_JSON: &str = r#"{
  "agent_behavior": "stochastic",
  "avg_token_selling_allocation": 0.4,
  "avg_token_holding_allocation": 0.35,
  "avg_token_utility_allocation": 0.2,
  "avg_token_utility_removal": 0.05,
  "launch_date": "01.01.25",
  "initial_total_supply": 1000000000,
  "initial_lp_token_allocation": 20000000,
  "initial_token_price": 0.05,
  "incentivisation_monthly_emission": 1500000,
  "airdrop_monthly_amount": 2000000,
  "airdrop_months": 12,
  "burn_bucket": "reserve",
  "protocol_bucket_burn_rate": 0.002,
  "initial_product_users": 1000,
  "product_users_after_10y": 500000,
  "product_adoption_velocity": 1.5,
  "initial_token_holders": 500,
  "token_holders_after_10y": 250000,
  "token_adoption_velocity": 1.2,
  "avg_product_user_revenue": 2.5,
  "staking_share": 0.5,
  "staking_apr": 0.08,
  "staking_revenue_share": 0.3,
  "initial_cash_balance": 2000000,
  "business_monthly_expenditure": 120000
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    println!("=== monthly — rust_te token-economy simulator ===");

    // 1. Parameters: embedded, or a JSON file from the command line.
    let params = match std::env::args().nth(1) {
        Some(path) => Params::from_json_path(Path::new(&path))
            .with_context(|| format!("loading parameters from {path}"))?,
        None => Params::from_json_str(PARAMS_JSON)?,
    };
    println!("Parameters: {} entries  |  Months: {MONTHS}", params.len());

    // 2. Stakeholders.
    let agents = load_agents_reader(Cursor::new(STAKEHOLDERS_CSV))?;
    println!("Stakeholders: {}", agents.len());
    println!();

    // 3. Build sim.
    let config = SimConfig { total_timesteps: MONTHS, output_interval: OUTPUT_INTERVAL };
    let genesis = Snapshot::genesis(agents.clone(), &params)?;
    let mut sim = SimBuilder::new(config.clone(), params.clone(), genesis).build()?;

    // 4. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);
    obs.record_initial(sim.current());

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    tracing::info!(dir = OUTPUT_DIR, rows = obs.written() + 1, "token economy written");
    println!("Simulation complete in {:.3} s ({} snapshots written to {OUTPUT_DIR})", elapsed.as_secs_f64(), obs.written() + 1);
    println!();

    // 6. Yearly summary.
    println!(
        "{:<12} {:>16} {:>16} {:>14} {:>12} {:>14}",
        "Date", "Circulating", "Unvested", "MC (USD)", "Users", "Cash (USD)"
    );
    println!("{}", "-".repeat(89));
    for snap in sim.history().iter().filter(|s| s.timestep.0 % 12 == 0) {
        let te = &snap.token_economy;
        println!(
            "{:<12} {:>16.0} {:>16.0} {:>14.0} {:>12.0} {:>14.0}",
            snap.date.to_string(),
            te.circulating_supply,
            te.unvested_supply,
            te.market_cap,
            snap.user_adoption.product_users,
            snap.business_assumptions.cash_balance,
        );
    }
    println!();

    // 7. Behavior-mode comparison as a batch.
    let modes = ["stochastic", "static"];
    let sets: Vec<Params> = modes
        .iter()
        .map(|mode| params.clone().with(keys::AGENT_BEHAVIOR, *mode))
        .collect();
    let outcomes = run_batch(&config, &agents, &sets);

    println!("{:<12} {:>18} {:>18}", "Mode", "Sold (cum)", "Held (period)");
    println!("{}", "-".repeat(50));
    for (mode, outcome) in modes.iter().zip(&outcomes) {
        match (&outcome.result, outcome.history.last()) {
            (Ok(()), Some(last)) => println!(
                "{:<12} {:>18.0} {:>18.0}",
                mode, last.token_economy.selling_allocation_cum, last.token_economy.holding_allocation
            ),
            (Err(e), _) => println!("{mode:<12} failed: {e}"),
            (Ok(()), None) => println!("{mode:<12} produced no snapshots"),
        }
    }

    let final_state = serde_json::to_string_pretty(&sim.current().token_economy)?;
    println!();
    println!("Final token economy:\n{final_state}");

    Ok(())
}
