//! Policies, updates, and the stage that pairs them.

use te_core::TeResult;
use te_economy::{StateKey, StateValue};

use crate::{SimError, SimResult, Signals, StageContext};

// ── Traits ────────────────────────────────────────────────────────────────────

/// Reads the stage's starting state and emits named signals.
///
/// Policies of one stage never see each other's output.
pub trait Policy: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &StageContext<'_>) -> TeResult<Signals>;
}

/// Turns the stage's merged signals into a replacement for one part of the
/// state.
pub trait Update: Send + Sync + 'static {
    /// The part of the state this update writes.
    fn key(&self) -> StateKey;

    fn apply(&self, ctx: &StageContext<'_>, signals: &Signals) -> TeResult<(StateKey, StateValue)>;
}

// ── Stage ─────────────────────────────────────────────────────────────────────

/// One step of the per-timestep pipeline.
///
/// ```rust,ignore
/// let stage = Stage::new("vesting").policy(VestTokens).update(UpdateVestedAgents);
/// ```
pub struct Stage {
    name:     &'static str,
    policies: Vec<Box<dyn Policy>>,
    updates:  Vec<Box<dyn Update>>,
}

impl Stage {
    pub fn new(name: &'static str) -> Self {
        Self { name, policies: Vec::new(), updates: Vec::new() }
    }

    pub fn policy(mut self, policy: impl Policy) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn update(mut self, update: impl Update) -> Self {
        self.updates.push(Box::new(update));
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.policies.iter().map(|p| p.name())
    }

    /// The state keys written by this stage, in update order.
    pub fn keys(&self) -> impl Iterator<Item = StateKey> + '_ {
        self.updates.iter().map(|u| u.key())
    }

    /// Check the wiring: at least one update and no key written twice.
    pub(crate) fn validate(&self) -> SimResult<()> {
        if self.updates.is_empty() {
            return Err(SimError::Config(format!("stage `{}` has no updates", self.name)));
        }
        let mut seen = Vec::with_capacity(self.updates.len());
        for key in self.keys() {
            if seen.contains(&key) {
                return Err(SimError::DuplicateUpdate { stage: self.name, key });
            }
            seen.push(key);
        }
        Ok(())
    }

    /// Evaluate every policy against `ctx`, merge their signals, and run
    /// every update.  Returns the replacement values without applying them.
    pub(crate) fn execute(&self, ctx: &StageContext<'_>) -> SimResult<Vec<StateValue>> {
        let mut signals = Signals::new();
        for policy in &self.policies {
            let out = policy.evaluate(ctx)?;
            signals
                .merge(out)
                .map_err(|signal| SimError::DuplicateSignal { stage: self.name, signal })?;
        }

        let mut written: Vec<StateKey> = Vec::with_capacity(self.updates.len());
        let mut values = Vec::with_capacity(self.updates.len());
        for update in &self.updates {
            let (key, value) = update.apply(ctx, &signals)?;
            let declared = update.key();
            let actual = if key != declared { key } else { value.key() };
            if actual != declared {
                return Err(SimError::KeyMismatch { stage: self.name, declared, written: actual });
            }
            if written.contains(&key) {
                return Err(SimError::DuplicateUpdate { stage: self.name, key });
            }
            written.push(key);
            values.push(value);
        }
        Ok(values)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("policies", &self.policy_names().collect::<Vec<_>>())
            .field("updates", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
