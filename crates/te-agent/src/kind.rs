//! Stakeholder cohorts and agent type tags.
//!
//! A `Cohort` names *who* the agent is (seed round, team, reserve, …) and
//! selects the behavior table row.  An `AgentType` names *how* its tokens are
//! treated by the allocator (fresh vesting, protocol-owned, end user).  Each
//! cohort has a natural type; the stakeholder table may override it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AgentError;

// ── AgentType ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    EarlyInvestor,
    Team,
    ProtocolBucket,
    MarketInvestor,
    AirdropReceiver,
    IncentivisationReceiver,
}

impl AgentType {
    pub const ALL: [AgentType; 6] = [
        AgentType::EarlyInvestor,
        AgentType::Team,
        AgentType::ProtocolBucket,
        AgentType::MarketInvestor,
        AgentType::AirdropReceiver,
        AgentType::IncentivisationReceiver,
    ];

    /// Types whose freshly vested tokens are allocated to meta buckets.
    #[inline]
    pub fn allocates_fresh_vesting(self) -> bool {
        matches!(self, AgentType::EarlyInvestor | AgentType::Team)
    }

    /// Protocol-owned pools never re-allocate held balances.
    #[inline]
    pub fn is_protocol_bucket(self) -> bool {
        self == AgentType::ProtocolBucket
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentType::EarlyInvestor => "early_investor",
            AgentType::Team => "team",
            AgentType::ProtocolBucket => "protocol_bucket",
            AgentType::MarketInvestor => "market_investor",
            AgentType::AirdropReceiver => "airdrop_receiver",
            AgentType::IncentivisationReceiver => "incentivisation_receiver",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentType {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AgentError::Parse(format!("unknown agent type `{s}`")))
    }
}

// ── Cohort ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cohort {
    Angle,
    Seed,
    #[serde(rename = "presale_1")]
    Presale1,
    #[serde(rename = "presale_2")]
    Presale2,
    PublicSale,
    Team,
    Reserve,
    Community,
    Foundation,
    Incentivisation,
    StakingVesting,
    MarketInvestors,
    AirdropReceivers,
    IncentivisationReceivers,
}

impl Cohort {
    pub const ALL: [Cohort; 14] = [
        Cohort::Angle,
        Cohort::Seed,
        Cohort::Presale1,
        Cohort::Presale2,
        Cohort::PublicSale,
        Cohort::Team,
        Cohort::Reserve,
        Cohort::Community,
        Cohort::Foundation,
        Cohort::Incentivisation,
        Cohort::StakingVesting,
        Cohort::MarketInvestors,
        Cohort::AirdropReceivers,
        Cohort::IncentivisationReceivers,
    ];

    /// The type an agent of this cohort gets unless the table overrides it.
    pub fn default_type(self) -> AgentType {
        match self {
            Cohort::Angle
            | Cohort::Seed
            | Cohort::Presale1
            | Cohort::Presale2
            | Cohort::PublicSale => AgentType::EarlyInvestor,
            Cohort::Team => AgentType::Team,
            Cohort::Reserve
            | Cohort::Community
            | Cohort::Foundation
            | Cohort::Incentivisation
            | Cohort::StakingVesting => AgentType::ProtocolBucket,
            Cohort::MarketInvestors => AgentType::MarketInvestor,
            Cohort::AirdropReceivers => AgentType::AirdropReceiver,
            Cohort::IncentivisationReceivers => AgentType::IncentivisationReceiver,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cohort::Angle => "angle",
            Cohort::Seed => "seed",
            Cohort::Presale1 => "presale_1",
            Cohort::Presale2 => "presale_2",
            Cohort::PublicSale => "public_sale",
            Cohort::Team => "team",
            Cohort::Reserve => "reserve",
            Cohort::Community => "community",
            Cohort::Foundation => "foundation",
            Cohort::Incentivisation => "incentivisation",
            Cohort::StakingVesting => "staking_vesting",
            Cohort::MarketInvestors => "market_investors",
            Cohort::AirdropReceivers => "airdrop_receivers",
            Cohort::IncentivisationReceivers => "incentivisation_receivers",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cohort {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cohort::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AgentError::Parse(format!("unknown cohort `{s}`")))
    }
}
