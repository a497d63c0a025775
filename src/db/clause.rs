/*!
The clause database.

Stored clauses are the conjunction whose consistency a solve determines: the clauses compiled from input formulas together with every clause derived from them.

The database is a set: a derived clause equal to a stored clause is not stored twice, and the insertion result notes whether the clause was fresh.
An ordered set, so iteration over stored clauses is deterministic.

The database never stores a tautology --- callers set those aside --- and the count of stored clauses is capped by the configured ceiling.
*/

use std::collections::BTreeSet;

use crate::{config::Config, structures::clause::Clause, types::err::ClauseDBError};

/// The clause database of a context.
pub struct ClauseDB {
    clauses: BTreeSet<Clause>,

    /// A ceiling on the count of stored clauses, cloned from the configuration.
    limit: usize,
}

impl ClauseDB {
    /// An empty clause database, configured by `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            clauses: BTreeSet::default(),
            limit: config.clause_limit.value,
        }
    }

    /// Stores `clause`, returning whether the clause was fresh.
    ///
    /// # Errors
    /// If the ceiling on stored clauses has been reached.
    pub fn insert(&mut self, clause: Clause) -> Result<bool, ClauseDBError> {
        if self.clauses.contains(&clause) {
            return Ok(false);
        }

        if self.clauses.len() >= self.limit {
            log::warn!(target: crate::misc::log::targets::CLAUSE_DB, "Clause ceiling of {} reached", self.limit);
            return Err(ClauseDBError::StorageExhausted);
        }

        self.clauses.insert(clause);
        Ok(true)
    }

    /// Whether `clause` is stored.
    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// The count of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the stored clauses, in their derived order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }
}
