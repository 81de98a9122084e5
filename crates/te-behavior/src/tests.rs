//! Unit tests for te-behavior.

use te_agent::{AgentRegistry, AgentRegistryBuilder, AgentSpec, Cohort};
use te_core::{AgentId, Params, keys};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn params(mode: &str) -> Params {
    Params::new()
        .with(keys::AVG_TOKEN_SELLING_ALLOCATION, 0.3)
        .with(keys::AVG_TOKEN_HOLDING_ALLOCATION, 0.5)
        .with(keys::AVG_TOKEN_UTILITY_ALLOCATION, 0.2)
        .with(keys::AVG_TOKEN_UTILITY_REMOVAL, 0.0)
        .with(keys::AGENT_BEHAVIOR, mode)
}

/// One team agent holding 5000 tokens, 1000 of which vested this timestep,
/// plus a reserve pool with 10 000.
fn registry() -> AgentRegistry {
    let mut agents = AgentRegistryBuilder::new()
        .agent(AgentSpec::new("team", Cohort::Team).tokens(5000.0))
        .agent(AgentSpec::new("reserve", Cohort::Reserve).tokens(10_000.0))
        .build()
        .unwrap();
    agents.get_mut(AgentId(0)).unwrap().tokens_vested = 1000.0;
    agents
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

// ── Table ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use te_agent::Cohort;

    use te_agent::BehaviorProfile;
    use te_core::TeError;

    use super::*;
    use crate::{EconomyAverages, check_profile, stochastic_profile};

    #[test]
    fn vesting_cohorts_share_removal_evenly() {
        let avg = EconomyAverages { selling: 0.3, holding: 0.4, utility: 0.24, removal: 0.06 };
        let p = stochastic_profile(Cohort::Seed, &avg);
        approx(p.sell, 0.28);
        approx(p.hold, 0.38);
        approx(p.utility, 0.22);
        approx(p.remove, 0.06);
        approx(p.total(), 0.94);
    }

    #[test]
    fn fixed_rows_sum_to_one() {
        let avg = EconomyAverages { selling: 0.3, holding: 0.5, utility: 0.2, removal: 0.0 };
        for cohort in [Cohort::Reserve, Cohort::Community, Cohort::MarketInvestors] {
            approx(stochastic_profile(cohort, &avg).total(), 1.0);
        }
        approx(stochastic_profile(Cohort::Reserve, &avg).incentivise, 0.5);
        approx(stochastic_profile(Cohort::AirdropReceivers, &avg).sell, 0.6);
    }

    #[test]
    fn check_accepts_a_full_allocation() {
        let avg = EconomyAverages { selling: 0.3, holding: 0.5, utility: 0.2, removal: 0.0 };
        check_profile(Cohort::Team, &avg.as_profile()).unwrap();
        check_profile(Cohort::Reserve, &stochastic_profile(Cohort::Reserve, &avg)).unwrap();
    }

    #[test]
    fn check_rejects_negative_hold() {
        let profile = BehaviorProfile { hold: -0.01, ..BehaviorProfile::from_percent(50.0, 0.0, 50.0, 0.0, 0.0) };
        match check_profile(Cohort::Angle, &profile) {
            Err(TeError::Configuration(msg)) => assert!(msg.contains(keys::AVG_TOKEN_HOLDING_ALLOCATION), "{msg}"),
            other => panic!("expected Configuration, got {other:?}"),
        }
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use te_core::{TeError, Timestep};

    use super::*;
    use crate::{BehaviorAssignment, BehaviorMode, resolve, resolve_all};

    #[test]
    fn mode_parsing() {
        assert_eq!(BehaviorMode::from_params(&params("static")).unwrap(), BehaviorMode::Static);
        assert_eq!("stochastic".parse::<BehaviorMode>().unwrap(), BehaviorMode::Stochastic);
        assert!(matches!(
            BehaviorMode::from_params(&params("chaotic")),
            Err(TeError::Configuration(_))
        ));
    }

    #[test]
    fn missing_share_names_its_key() {
        let mut p = params("static");
        p.remove(keys::AVG_TOKEN_UTILITY_REMOVAL);
        for mode in [BehaviorMode::Static, BehaviorMode::Stochastic] {
            match resolve(mode, &p, Cohort::Team) {
                Err(TeError::MissingParameter { key }) => {
                    assert_eq!(key, keys::AVG_TOKEN_UTILITY_REMOVAL)
                }
                other => panic!("expected MissingParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn static_mode_ignores_cohort() {
        let p = params("static");
        let team = resolve(BehaviorMode::Static, &p, Cohort::Team).unwrap();
        let reserve = resolve(BehaviorMode::Static, &p, Cohort::Reserve).unwrap();
        assert_eq!(team, reserve);
        approx(team.sell, 0.3);
    }

    #[test]
    fn modes_agree_for_vesting_cohorts_without_removal() {
        let p = params("static");
        let a = resolve(BehaviorMode::Static, &p, Cohort::Team).unwrap();
        let b = resolve(BehaviorMode::Stochastic, &p, Cohort::Team).unwrap();
        approx(a.sell, b.sell);
        approx(a.hold, b.hold);
        approx(a.utility, b.utility);
    }

    #[test]
    fn oversized_static_shares_are_rejected() {
        let p = params("static")
            .with(keys::AVG_TOKEN_SELLING_ALLOCATION, 0.9)
            .with(keys::AVG_TOKEN_HOLDING_ALLOCATION, 0.9)
            .with(keys::AVG_TOKEN_UTILITY_ALLOCATION, 0.9);
        assert!(matches!(
            resolve(BehaviorMode::Static, &p, Cohort::Team),
            Err(TeError::Configuration(_))
        ));
        assert!(matches!(
            resolve_all(BehaviorMode::Static, &p, &registry()),
            Err(TeError::Configuration(_))
        ));
    }

    #[test]
    fn selling_below_a_third_of_removal_is_rejected() {
        let p = params("stochastic")
            .with(keys::AVG_TOKEN_SELLING_ALLOCATION, 0.05)
            .with(keys::AVG_TOKEN_UTILITY_REMOVAL, 0.3);
        match resolve_all(BehaviorMode::Stochastic, &p, &registry()) {
            Err(TeError::Configuration(msg)) => {
                assert!(msg.contains(keys::AVG_TOKEN_SELLING_ALLOCATION), "{msg}")
            }
            other => panic!("expected Configuration, got {other:?}"),
        }
        // Fixed rows do not depend on the averages.
        assert!(resolve(BehaviorMode::Stochastic, &p, Cohort::Reserve).is_ok());
        // The same shares are fine when applied as-is.
        assert!(resolve(BehaviorMode::Static, &p, Cohort::Team).is_ok());
    }

    #[test]
    fn resolve_all_shares_profiles_per_cohort() {
        let agents = AgentRegistryBuilder::new()
            .agent(AgentSpec::new("seed_a", Cohort::Seed).tokens(1000.0))
            .agent(AgentSpec::new("seed_b", Cohort::Seed).tokens(2000.0))
            .agent(AgentSpec::new("reserve", Cohort::Reserve).tokens(10_000.0))
            .agent(AgentSpec::new("market_investors", Cohort::MarketInvestors))
            .build()
            .unwrap();
        let profile = |a: &BehaviorAssignment, i: u32| *a.get(AgentId(i)).unwrap();

        let p = params("stochastic").with(keys::AVG_TOKEN_UTILITY_REMOVAL, 0.06);
        let stochastic = resolve_all(BehaviorMode::Stochastic, &p, &agents).unwrap();
        assert_eq!(stochastic.len(), 4);
        assert_eq!(profile(&stochastic, 0), profile(&stochastic, 1));
        approx(profile(&stochastic, 0).sell, 0.28);
        approx(profile(&stochastic, 0).remove, 0.06);

        let reserve = profile(&stochastic, 2);
        approx(reserve.hold, 0.5);
        approx(reserve.incentivise, 0.5);
        approx(reserve.sell, 0.0);
        approx(profile(&stochastic, 3).sell, 0.6);
        assert_ne!(profile(&stochastic, 0), reserve);
        assert_ne!(reserve, profile(&stochastic, 3));

        let fixed = resolve_all(BehaviorMode::Static, &p, &agents).unwrap();
        assert_eq!(fixed.len(), 4);
        for (_, each) in fixed.iter() {
            assert_eq!(*each, profile(&fixed, 0));
        }
        approx(profile(&fixed, 2).sell, 0.3);
        approx(profile(&fixed, 2).incentivise, 0.0);
    }

    #[test]
    fn stamped_requires_current_timestep() {
        let agents = registry();
        let assignment = resolve_all(BehaviorMode::Static, &params("static"), &agents).unwrap();
        assert_eq!(assignment.len(), 2);

        let stamped = assignment.apply_to(&agents, Timestep(3)).unwrap();
        assert!(agents.get(AgentId(0)).unwrap().behavior.is_none());
        assert_eq!(BehaviorAssignment::stamped(&stamped, Timestep(3)).unwrap(), assignment);

        match BehaviorAssignment::stamped(&stamped, Timestep(4)) {
            Err(TeError::MissingAllocation { agent, timestep }) => {
                assert_eq!(agent, "team");
                assert_eq!(timestep, Timestep(4));
            }
            other => panic!("expected MissingAllocation, got {other:?}"),
        }
    }
}

// ── Allocator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod allocator {
    use te_agent::BucketAmounts;
    use te_core::{TeError, Timestep};

    use super::*;
    use crate::{BehaviorAssignment, BehaviorMode, allocate, resolve_all};

    fn run(mode: &str) -> crate::MetaBucketAllocation {
        let agents = registry();
        let p = params(mode);
        let assignment = resolve_all(BehaviorMode::from_params(&p).unwrap(), &p, &agents).unwrap();
        allocate(&agents, &assignment, Timestep(1)).unwrap()
    }

    #[test]
    fn static_scenario() {
        let alloc = run("static");
        let team = alloc.per_agent[0];
        approx(team.fresh.selling, 300.0);
        approx(team.fresh.holding, 500.0);
        approx(team.fresh.utility, 200.0);

        let held = team.from_holding.amounts();
        approx(held.selling, 1200.0);
        approx(held.holding, 2000.0);
        approx(held.utility, 800.0);

        approx(alloc.totals.selling, 1500.0);
        approx(alloc.totals.holding, 2500.0);
        approx(alloc.totals.utility, 1000.0);
    }

    #[test]
    fn early_investor_scenario() {
        let mut agents = AgentRegistryBuilder::new()
            .agent(AgentSpec::new("early_investor", Cohort::Seed).tokens(5000.0))
            .build()
            .unwrap();
        agents.get_mut(AgentId(0)).unwrap().tokens_vested = 1000.0;

        for mode in ["static", "stochastic"] {
            let p = params(mode);
            let assignment = resolve_all(BehaviorMode::from_params(&p).unwrap(), &p, &agents).unwrap();
            let alloc = allocate(&agents, &assignment, Timestep(1)).unwrap();
            let seed = alloc.per_agent[0];
            approx(seed.fresh.selling, 300.0);
            approx(seed.fresh.holding, 500.0);
            approx(seed.fresh.utility, 200.0);
            approx(seed.from_holding.amounts().selling, 1200.0);
            approx(alloc.totals.selling, 1500.0);
        }
    }

    #[test]
    fn protocol_bucket_is_excluded() {
        let alloc = run("static");
        let reserve = alloc.per_agent[1];
        assert!(reserve.from_holding.is_excluded());
        assert_eq!(reserve.fresh, BucketAmounts::ZERO);
        assert_eq!(reserve.combined(), BucketAmounts::ZERO);
    }

    #[test]
    fn totals_equal_sum_of_parts() {
        let alloc = run("stochastic");
        let parts = alloc.fresh_totals() + alloc.from_holding_totals();
        approx(parts.selling, alloc.totals.selling);
        approx(parts.holding, alloc.totals.holding);
        approx(parts.utility, alloc.totals.utility);
    }

    #[test]
    fn allocation_conserves_balance() {
        let agents = registry();
        let alloc = run("static");
        let updated = alloc.apply_to(&agents).unwrap();
        let team = updated.get(AgentId(0)).unwrap();
        // 5000 - (1500 sold + 1000 utility)
        approx(team.tokens, 2500.0);
        approx(team.tokens + team.allocation.combined().outflow(), 5000.0);
        approx(updated.get(AgentId(1)).unwrap().tokens, 10_000.0);
    }

    #[test]
    fn empty_assignment_is_an_ordering_violation() {
        let agents = registry();
        let err = allocate(&agents, &BehaviorAssignment::default(), Timestep(2)).unwrap_err();
        assert!(matches!(err, TeError::MissingAllocation { timestep: Timestep(2), .. }));
    }
}
