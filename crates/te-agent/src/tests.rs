//! Unit tests for te-agent.

#[cfg(test)]
mod kind {
    use crate::{AgentType, Cohort};

    #[test]
    fn cohort_names_round_trip_through_from_str() {
        for cohort in Cohort::ALL {
            assert_eq!(cohort.as_str().parse::<Cohort>().unwrap(), cohort);
        }
        assert!("series_a".parse::<Cohort>().is_err());
    }

    #[test]
    fn default_types() {
        assert_eq!(Cohort::Presale2.default_type(), AgentType::EarlyInvestor);
        assert_eq!(Cohort::Team.default_type(), AgentType::Team);
        assert_eq!(Cohort::Reserve.default_type(), AgentType::ProtocolBucket);
        assert_eq!(Cohort::StakingVesting.default_type(), AgentType::ProtocolBucket);
        assert_eq!(Cohort::AirdropReceivers.default_type(), AgentType::AirdropReceiver);
    }

    #[test]
    fn fresh_vesting_types() {
        let fresh: Vec<_> = AgentType::ALL.into_iter().filter(|t| t.allocates_fresh_vesting()).collect();
        assert_eq!(fresh, vec![AgentType::EarlyInvestor, AgentType::Team]);
        assert!(AgentType::ProtocolBucket.is_protocol_bucket());
    }
}

#[cfg(test)]
mod profile {
    use crate::{AgentAllocation, BehaviorProfile, BucketAmounts, HoldingAllocation};

    #[test]
    fn percent_conversion() {
        let p = BehaviorProfile::from_percent(60.0, 10.0, 25.0, 5.0, 0.0);
        assert!((p.sell - 0.6).abs() < 1e-12);
        assert!((p.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn split_amount() {
        let p = BehaviorProfile { sell: 0.3, hold: 0.5, utility: 0.2, ..Default::default() };
        let a = p.split(1000.0);
        assert!((a.selling - 300.0).abs() < 1e-9);
        assert!((a.holding - 500.0).abs() < 1e-9);
        assert!((a.utility - 200.0).abs() < 1e-9);
        assert!((a.outflow() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn excluded_holding_reads_as_zero() {
        let alloc = AgentAllocation {
            fresh:        BucketAmounts { selling: 1.0, holding: 2.0, utility: 3.0 },
            from_holding: HoldingAllocation::Excluded,
        };
        assert_eq!(alloc.from_holding.amounts(), BucketAmounts::ZERO);
        assert_eq!(alloc.combined(), alloc.fresh);
    }

    #[test]
    fn bucket_sum() {
        let parts = vec![
            BucketAmounts { selling: 1.0, holding: 1.0, utility: 1.0 },
            BucketAmounts { selling: 2.0, holding: 0.0, utility: 0.5 },
        ];
        let total: BucketAmounts = parts.into_iter().sum();
        assert_eq!(total, BucketAmounts { selling: 3.0, holding: 1.0, utility: 1.5 });
    }
}

#[cfg(test)]
mod vesting {
    use crate::VestingSchedule;

    fn schedule() -> VestingSchedule {
        VestingSchedule { allocation: 1200.0, tge_fraction: 0.25, cliff_months: 3, vesting_months: 9 }
    }

    #[test]
    fn tge_only_before_cliff() {
        let s = schedule();
        assert_eq!(s.vested_by(0), 300.0);
        assert_eq!(s.vested_by(2), 300.0);
    }

    #[test]
    fn linear_after_cliff_and_capped() {
        let s = schedule();
        assert!((s.vested_by(3) - 400.0).abs() < 1e-9);
        assert!((s.vested_by(11) - 1200.0).abs() < 1e-9);
        assert!((s.vested_by(40) - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn zero_vesting_months_unlocks_at_cliff() {
        let s = VestingSchedule { vesting_months: 0, ..schedule() };
        assert_eq!(s.vested_by(2), 300.0);
        assert_eq!(s.vested_by(3), 1200.0);
    }
}

#[cfg(test)]
mod registry {
    use te_core::AgentId;

    use crate::{AgentError, AgentRegistryBuilder, AgentSpec, AgentType, Cohort};

    #[test]
    fn ids_follow_insertion_order() {
        let reg = AgentRegistryBuilder::new()
            .agent(AgentSpec::new("seed", Cohort::Seed))
            .agent(AgentSpec::new("reserve", Cohort::Reserve).tokens(10.0))
            .build()
            .unwrap();
        let ids: Vec<AgentId> = reg.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1)]);
        assert_eq!(reg.id_of("reserve"), Some(AgentId(1)));
        assert_eq!(reg.by_name("reserve").unwrap().tokens, 10.0);
        assert_eq!(reg.total_tokens(), 10.0);
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = AgentRegistryBuilder::new()
            .agent(AgentSpec::new("team", Cohort::Team))
            .agent(AgentSpec::new("team", Cohort::Team))
            .build();
        assert!(matches!(result, Err(AgentError::DuplicateName(n)) if n == "team"));
    }

    #[test]
    fn type_override_and_filters() {
        let reg = AgentRegistryBuilder::new()
            .agent(AgentSpec::new("community", Cohort::Community))
            .agent(AgentSpec::new("advisors", Cohort::Team).agent_type(AgentType::EarlyInvestor))
            .build()
            .unwrap();
        assert_eq!(reg.of_type(AgentType::ProtocolBucket).count(), 1);
        assert_eq!(reg.of_type(AgentType::EarlyInvestor).count(), 1);
        assert_eq!(reg.of_cohort(Cohort::Team).count(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let reg = AgentRegistryBuilder::new()
            .agent(AgentSpec::new("reserve", Cohort::Reserve).tokens(100.0))
            .build()
            .unwrap();
        let mut working = reg.clone();
        working.get_mut(AgentId(0)).unwrap().tokens = 5.0;
        assert_eq!(reg.get(AgentId(0)).unwrap().tokens, 100.0);
        assert!(working.get_mut(AgentId(9)).is_none());
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{AgentError, AgentType, Cohort, load_agents_reader};

    const TABLE: &str = "\
name,cohort,agent_type,initial_tokens,allocation,tge_fraction,cliff_months,vesting_months
seed,seed,,0,5000,0.1,6,24
reserve,reserve,,20000,,,,
partners,market_investors,early_investor,0,1000,,,12
";

    #[test]
    fn loads_rows_with_and_without_vesting() {
        let reg = load_agents_reader(Cursor::new(TABLE)).unwrap();
        assert_eq!(reg.len(), 3);

        let seed = reg.by_name("seed").unwrap();
        assert_eq!(seed.cohort, Cohort::Seed);
        assert_eq!(seed.agent_type, AgentType::EarlyInvestor);
        let v = seed.vesting.unwrap();
        assert_eq!((v.allocation, v.cliff_months, v.vesting_months), (5000.0, 6, 24));

        let reserve = reg.by_name("reserve").unwrap();
        assert!(reserve.vesting.is_none());
        assert_eq!(reserve.tokens, 20000.0);

        let partners = reg.by_name("partners").unwrap();
        assert_eq!(partners.agent_type, AgentType::EarlyInvestor);
        assert_eq!(partners.vesting.unwrap().tge_fraction, 0.0);
    }

    #[test]
    fn unknown_cohort_is_parse_error() {
        let csv = "name,cohort,agent_type,initial_tokens,allocation,tge_fraction,cliff_months,vesting_months\n\
                   x,series_a,,0,,,,\n";
        assert!(matches!(load_agents_reader(Cursor::new(csv)), Err(AgentError::Parse(_))));
    }

    #[test]
    fn tge_fraction_range_checked() {
        let csv = "name,cohort,agent_type,initial_tokens,allocation,tge_fraction,cliff_months,vesting_months\n\
                   x,seed,,0,100,1.5,0,0\n";
        assert!(matches!(load_agents_reader(Cursor::new(csv)), Err(AgentError::Parse(_))));
    }
}
