//! Unit tests for te-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use chrono::NaiveDate;

    use crate::{SimConfig, TeError, Timestep, parse_launch_date};

    #[test]
    fn timestep_arithmetic() {
        assert_eq!(Timestep(3).next(), Timestep(4));
        assert_eq!(Timestep(3) + 2, Timestep(5));
        assert_eq!(Timestep(1).months_since_launch(), 0);
        assert_eq!(Timestep(13).months_since_launch(), 12);
        assert_eq!(Timestep::GENESIS.months_since_launch(), 0);
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_launch_two_digit_year() {
        assert_eq!(parse_launch_date("15.03.25").unwrap(), ymd(2025, 3, 15));
        assert_eq!(parse_launch_date(" 15.03.2025 ").unwrap(), ymd(2025, 3, 15));
    }

    #[test]
    fn parse_launch_rejects_garbage() {
        assert!(matches!(parse_launch_date("2025-03-15"), Err(TeError::Parse(_))));
        assert!(parse_launch_date("32.01.25").is_err());
        assert!(parse_launch_date("01.13.25").is_err());
        assert!(parse_launch_date("29.02.25").is_err());
    }

    #[test]
    fn date_rolls_year() {
        let launch = ymd(2024, 11, 10);
        assert_eq!(Timestep(4).date_from(launch).unwrap(), ymd(2025, 2, 10));
    }

    #[test]
    fn date_clamps_to_month_end() {
        let launch = ymd(2024, 1, 31);
        assert_eq!(Timestep(2).date_from(launch).unwrap(), ymd(2024, 2, 29));
        assert_eq!(Timestep(14).date_from(launch).unwrap(), ymd(2025, 2, 28));
    }

    #[test]
    fn date_for_timestep() {
        let launch = ymd(2025, 1, 1);
        assert_eq!(Timestep::GENESIS.date_from(launch).unwrap(), launch);
        assert_eq!(Timestep(1).date_from(launch).unwrap(), launch);
        assert_eq!(Timestep(7).date_from(launch).unwrap().to_string(), "2025-07-01");
    }

    #[test]
    fn date_past_calendar_is_configuration_error() {
        let launch = NaiveDate::MAX;
        assert!(matches!(Timestep(2).date_from(launch), Err(TeError::Configuration(_))));
    }

    #[test]
    fn config_final_timestep() {
        assert_eq!(SimConfig::new(120).final_timestep(), Timestep(120));
        assert_eq!(SimConfig::new(12).output_interval, 1);
    }
}

#[cfg(test)]
mod params {
    use crate::{Params, TeError, keys};

    #[test]
    fn missing_key_is_named() {
        let p = Params::new();
        match p.number(keys::INITIAL_TOTAL_SUPPLY) {
            Err(TeError::MissingParameter { key }) => assert_eq!(key, "initial_total_supply"),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn wrong_type_is_configuration_error() {
        let p = Params::new().with(keys::AGENT_BEHAVIOR, 3.0);
        assert!(matches!(p.text(keys::AGENT_BEHAVIOR), Err(TeError::Configuration(_))));
        let p = Params::new().with(keys::STAKING_APR, "high");
        assert!(matches!(p.number(keys::STAKING_APR), Err(TeError::Configuration(_))));
    }

    #[test]
    fn fraction_range_checked() {
        let p = Params::new().with(keys::STAKING_SHARE, 60.0);
        assert!(matches!(p.fraction(keys::STAKING_SHARE), Err(TeError::Configuration(_))));
        let p = Params::new().with(keys::STAKING_SHARE, 0.6);
        assert_eq!(p.fraction(keys::STAKING_SHARE).unwrap(), 0.6);
    }

    #[test]
    fn optional_defaults() {
        let p = Params::new();
        assert_eq!(p.number_or(keys::AIRDROP_MONTHS, 0.0).unwrap(), 0.0);
        assert_eq!(p.fraction_or(keys::STAKING_SHARE, 0.25).unwrap(), 0.25);
    }

    #[test]
    fn json_mixed_values() {
        let p = Params::from_json_str(
            r#"{"agent_behavior": "static", "initial_total_supply": 1000000}"#,
        )
        .unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.text(keys::AGENT_BEHAVIOR).unwrap(), "static");
        assert_eq!(p.number(keys::INITIAL_TOTAL_SUPPLY).unwrap(), 1_000_000.0);
    }

    #[test]
    fn malformed_json_errors() {
        assert!(matches!(Params::from_json_str("{not json"), Err(TeError::Json(_))));
    }
}
