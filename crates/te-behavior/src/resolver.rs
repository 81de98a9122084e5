//! The behavior resolver.

use std::fmt;
use std::str::FromStr;

use te_agent::{AgentRegistry, AssignedBehavior, BehaviorProfile, Cohort};
use te_core::{AgentId, Params, TeError, TeResult, Timestep, keys};
use tracing::debug;

use crate::table::{EconomyAverages, check_profile, stochastic_profile};

// ── BehaviorMode ──────────────────────────────────────────────────────────────

/// How profiles are resolved, selected by the `agent_behavior` parameter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BehaviorMode {
    /// One shared profile per cohort from the fixed table.
    Stochastic,
    /// The economy-wide averages applied to every agent.
    Static,
}

impl BehaviorMode {
    pub fn from_params(params: &Params) -> TeResult<Self> {
        params.text(keys::AGENT_BEHAVIOR)?.parse()
    }
}

impl FromStr for BehaviorMode {
    type Err = TeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stochastic" => Ok(BehaviorMode::Stochastic),
            "static" => Ok(BehaviorMode::Static),
            other => Err(TeError::Configuration(format!(
                "agent_behavior must be either 'stochastic' or 'static', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for BehaviorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BehaviorMode::Stochastic => "stochastic",
            BehaviorMode::Static => "static",
        })
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Resolve the profile for one cohort.
///
/// Fails with [`TeError::MissingParameter`] if any of the four economy-wide
/// shares is absent, in either mode, and with [`TeError::Configuration`] if
/// the resolved profile has a negative share or allocates more than the
/// whole balance.
pub fn resolve(mode: BehaviorMode, params: &Params, cohort: Cohort) -> TeResult<BehaviorProfile> {
    let avg = EconomyAverages::from_params(params)?;
    profile_for(mode, &avg, cohort)
}

fn profile_for(mode: BehaviorMode, avg: &EconomyAverages, cohort: Cohort) -> TeResult<BehaviorProfile> {
    let profile = match mode {
        BehaviorMode::Stochastic => stochastic_profile(cohort, avg),
        BehaviorMode::Static => avg.as_profile(),
    };
    check_profile(cohort, &profile)?;
    Ok(profile)
}

/// Resolve one profile per agent, in registry order.
pub fn resolve_all(
    mode:   BehaviorMode,
    params: &Params,
    agents: &AgentRegistry,
) -> TeResult<BehaviorAssignment> {
    let avg = EconomyAverages::from_params(params)?;
    let profiles = agents
        .iter()
        .map(|a| profile_for(mode, &avg, a.cohort))
        .collect::<TeResult<Vec<_>>>()?;
    debug!(?mode, agents = profiles.len(), "behavior profiles resolved");
    Ok(BehaviorAssignment { profiles })
}

// ── BehaviorAssignment ────────────────────────────────────────────────────────

/// One profile per agent, indexed by `AgentId`.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct BehaviorAssignment {
    profiles: Vec<BehaviorProfile>,
}

impl BehaviorAssignment {
    /// Collect the profiles stamped for `timestep` from a registry.
    ///
    /// Any agent without a profile for `timestep` means behavior assignment
    /// has not run yet in this timestep.
    pub fn stamped(agents: &AgentRegistry, timestep: Timestep) -> TeResult<Self> {
        let profiles = agents
            .iter()
            .map(|a| match a.behavior {
                Some(AssignedBehavior { timestep: t, profile }) if t == timestep => Ok(profile),
                _ => Err(TeError::MissingAllocation { agent: a.name.clone(), timestep }),
            })
            .collect::<TeResult<Vec<_>>>()?;
        Ok(Self { profiles })
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&BehaviorProfile> {
        self.profiles.get(agent.index())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &BehaviorProfile)> + '_ {
        self.profiles.iter().enumerate().map(|(i, p)| (AgentId(i as u32), p))
    }

    /// A copy of `agents` with every profile stamped for `timestep`.
    pub fn apply_to(&self, agents: &AgentRegistry, timestep: Timestep) -> TeResult<AgentRegistry> {
        let mut updated = agents.clone();
        for record in updated.iter_mut() {
            let profile = self
                .get(record.id)
                .ok_or_else(|| TeError::AgentNotFound(record.name.clone()))?;
            record.behavior = Some(AssignedBehavior { timestep, profile: *profile });
        }
        Ok(updated)
    }
}
