//! `AgentRegistry` — ordered agent records with a name index.
//!
//! `AgentId(i)` is the index of the record in `records`, so per-agent results
//! produced by policies can be plain `Vec`s in registry order.

use std::collections::HashMap;

use te_core::AgentId;

use crate::{AgentRecord, AgentType, Cohort};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AgentRegistry {
    records: Vec<AgentRecord>,
    by_name: HashMap<String, AgentId>,
}

impl AgentRegistry {
    /// Used by [`AgentRegistryBuilder`][crate::AgentRegistryBuilder], which
    /// has already checked names for uniqueness and assigned ids.
    pub(crate) fn from_records(records: Vec<AgentRecord>) -> Self {
        let by_name = records.iter().map(|r| (r.name.clone(), r.id)).collect();
        Self { records, by_name }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentRecord> {
        self.records.iter()
    }

    /// Mutable iteration.  Only call on a working copy, never on a registry
    /// that belongs to a committed snapshot.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, AgentRecord> {
        self.records.iter_mut()
    }

    pub fn get(&self, id: AgentId) -> Option<&AgentRecord> {
        self.records.get(id.index())
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut AgentRecord> {
        self.records.get_mut(id.index())
    }

    pub fn id_of(&self, name: &str) -> Option<AgentId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&AgentRecord> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn of_type(&self, agent_type: AgentType) -> impl Iterator<Item = &AgentRecord> + '_ {
        self.records.iter().filter(move |r| r.agent_type == agent_type)
    }

    pub fn of_cohort(&self, cohort: Cohort) -> impl Iterator<Item = &AgentRecord> + '_ {
        self.records.iter().filter(move |r| r.cohort == cohort)
    }

    /// Sum of all balances.
    pub fn total_tokens(&self) -> f64 {
        self.records.iter().map(|r| r.tokens).sum()
    }
}

impl<'a> IntoIterator for &'a AgentRegistry {
    type Item = &'a AgentRecord;
    type IntoIter = std::slice::Iter<'a, AgentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
