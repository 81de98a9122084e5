//! The stochastic behavior table.
//!
//! Profiles are shared per cohort, not per agent.  Vesting cohorts derive
//! theirs from the economy-wide averages: a third of the utility-removal
//! share is taken from each of sell, hold and utility so the four shares
//! still add up to the same total.  Pool and end-user cohorts use fixed rows,
//! authored in percent and converted through `BehaviorProfile::from_percent`.

use te_agent::{BehaviorProfile, Cohort};
use te_core::{Params, TeError, TeResult, keys};

/// The four economy-wide allocation shares, as fractions.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EconomyAverages {
    pub selling: f64,
    pub holding: f64,
    pub utility: f64,
    pub removal: f64,
}

impl EconomyAverages {
    /// Read all four shares.  Each one is required.
    pub fn from_params(params: &Params) -> TeResult<Self> {
        Ok(Self {
            selling: params.fraction(keys::AVG_TOKEN_SELLING_ALLOCATION)?,
            holding: params.fraction(keys::AVG_TOKEN_HOLDING_ALLOCATION)?,
            utility: params.fraction(keys::AVG_TOKEN_UTILITY_ALLOCATION)?,
            removal: params.fraction(keys::AVG_TOKEN_UTILITY_REMOVAL)?,
        })
    }

    /// The same shares for every agent.
    pub fn as_profile(&self) -> BehaviorProfile {
        BehaviorProfile {
            sell:        self.selling,
            hold:        self.holding,
            utility:     self.utility,
            remove:      self.removal,
            incentivise: 0.0,
        }
    }
}

/// Look up the stochastic-mode profile for `cohort`.
pub fn stochastic_profile(cohort: Cohort, avg: &EconomyAverages) -> BehaviorProfile {
    match cohort {
        Cohort::Angle
        | Cohort::Seed
        | Cohort::Presale1
        | Cohort::Presale2
        | Cohort::PublicSale
        | Cohort::Team => {
            let third = avg.removal / 3.0;
            BehaviorProfile {
                sell:        avg.selling - third,
                hold:        avg.holding - third,
                utility:     avg.utility - third,
                remove:      avg.removal,
                incentivise: 0.0,
            }
        }
        Cohort::Reserve => BehaviorProfile::from_percent(0.0, 50.0, 0.0, 0.0, 50.0),
        Cohort::Community
        | Cohort::Foundation
        | Cohort::Incentivisation
        | Cohort::StakingVesting => BehaviorProfile::from_percent(0.0, 100.0, 0.0, 0.0, 0.0),
        Cohort::MarketInvestors
        | Cohort::AirdropReceivers
        | Cohort::IncentivisationReceivers => BehaviorProfile::from_percent(60.0, 10.0, 25.0, 5.0, 0.0),
    }
}

/// Reject a resolved profile the allocator could not honour.
///
/// Every share must be non-negative, and sell + hold + utility may not
/// allocate more than the whole balance.
pub fn check_profile(cohort: Cohort, profile: &BehaviorProfile) -> TeResult<()> {
    const EPS: f64 = 1e-9;

    for (share, key) in [
        (profile.sell, keys::AVG_TOKEN_SELLING_ALLOCATION),
        (profile.hold, keys::AVG_TOKEN_HOLDING_ALLOCATION),
        (profile.utility, keys::AVG_TOKEN_UTILITY_ALLOCATION),
    ] {
        if share < -EPS {
            return Err(TeError::Configuration(format!(
                "{key} gives {cohort} a negative share ({share}); it must be at least a third of {}",
                keys::AVG_TOKEN_UTILITY_REMOVAL
            )));
        }
    }

    let allocated = profile.sell + profile.hold + profile.utility;
    if allocated > 1.0 + EPS {
        return Err(TeError::Configuration(format!(
            "{}, {} and {} allocate {allocated} of the {cohort} balance; their sum must not exceed 1",
            keys::AVG_TOKEN_SELLING_ALLOCATION,
            keys::AVG_TOKEN_HOLDING_ALLOCATION,
            keys::AVG_TOKEN_UTILITY_ALLOCATION
        )));
    }
    Ok(())
}
