/*!
Determines the consistency of the formula set in a context.

# Overview

[solve](crate::procedures::solve) saturates the clause database under binary resolution (and, if configured, factoring), with the work ordered by a unit-preference heuristic.

A worklist holds every clause not yet examined, ordered shortest first.
Each iteration pops a clause and resolves it against every stored clause, the popped clause included:

- An empty resolvent concludes the solve: the set is unsatisfiable.
- A fresh, non-tautologous resolvent is stored and joins the worklist.
- A tautologous or already-stored resolvent is set aside.

An exhausted worklist concludes the solve the other way: the database is closed under resolution without the empty clause, so the set is satisfiable.

Shortest-first order is the reason refutations tend to arrive quickly: the empty clause can only be derived from unit clauses, so pursuing short clauses chases the conclusion rather than the closure.
Saturation may not terminate on a satisfiable set --- first-order consistency is semi-decidable --- and so each iteration checks the configured time limit and the terminate callback, either of which concludes the solve with an unknown report.
The ceiling on stored clauses concludes a solve the same way.

Roughly, the loop is as diagrammed:

```none
          +-----------------+
  +-------| pop shortest    |-----> satisfiable, if the worklist is empty
  |       +-----------------+
  |               |
  |               ⌄
  |       +-----------------+
  |       | resolve against |-----> unsatisfiable, on an empty resolvent
  |       | every stored    |
  |       | clause (+ self) |
  |       +-----------------+
  |               |
  |               | store fresh resolvents and factors,
  |               | pushing each onto the worklist
  |               |
  +---------------+  (budget spent anywhere ----> unknown)
```

# Example

```rust
# use marten_fol::config::Config;
# use marten_fol::context::Context;
# use marten_fol::reports::Report;
let mut ctx = Context::from_config(Config::default());

assert!(ctx.add_formula("(FORALL x (FORALL y (IMPLIES (r x y) (r y x))))").is_ok());
assert!(ctx.add_formula("(r a b)").is_ok());
assert!(ctx.add_formula("(NOT (r b a))").is_ok());

assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
```
*/

use std::collections::BTreeSet;
use std::time::Instant;

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    procedures::{factor, resolve},
    reports::Report,
    structures::clause::Clause,
    types::err::{ClauseDBError, ErrorKind},
};

/// A candidate clause, tracking its size.
///
/// Candidates order by size before clause, so an ordered set of candidates serves as a unit-preference worklist.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CandidateClause {
    size: usize, // Note: the order of fields matters for the derived implementation of Ord
    clause: Clause,
}

impl CandidateClause {
    fn from(clause: Clause) -> Self {
        CandidateClause {
            size: clause.size(),
            clause,
        }
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the consistency of the clause database, unless interrupted.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Ok(self.report());
            }

            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                self.state = ContextState::Solving;
            }
        }

        let mut worklist: BTreeSet<CandidateClause> = self
            .clause_db
            .clauses()
            .cloned()
            .map(CandidateClause::from)
            .collect();

        let timer = Instant::now();

        'solve_loop: loop {
            let Some(candidate) = self.next_candidate(&mut worklist) else {
                // The database is closed under resolution, and the empty clause never appeared.
                self.state = ContextState::Satisfiable;
                break 'solve_loop;
            };

            self.counters.total_iterations += 1;
            log::trace!(
                target: targets::RESOLUTION,
                "Iteration {} on {candidate}",
                self.counters.total_iterations
            );

            self.counters.time = timer.elapsed();
            let time_limit = self.config.time_limit.value;
            if !time_limit.is_zero() && self.counters.time > time_limit {
                log::info!(target: targets::RESOLUTION, "Time limit spent");
                break 'solve_loop;
            }

            if self.check_callback_terminate() {
                log::info!(target: targets::RESOLUTION, "Terminated by callback");
                break 'solve_loop;
            }

            let mut derived: Vec<Clause> = Vec::default();

            for stored in self.clause_db.clauses() {
                let Some(resolvent) = resolve::resolvent(&mut self.names, &candidate, stored)
                else {
                    continue;
                };

                self.counters.resolvents += 1;

                if resolvent.is_empty() {
                    log::info!(
                        target: targets::RESOLUTION,
                        "The empty clause, from {candidate} and {stored}"
                    );
                    self.state = ContextState::Unsatisfiable;
                    break 'solve_loop;
                }

                if resolvent.is_tautology() {
                    self.counters.tautologies += 1;
                    continue;
                }

                derived.push(resolvent);
            }

            if self.config.factoring.value {
                for factor in factor::factors(&candidate) {
                    self.counters.factors += 1;

                    if factor.is_tautology() {
                        self.counters.tautologies += 1;
                        continue;
                    }

                    derived.push(factor);
                }
            }

            for clause in derived {
                match self.clause_db.insert(clause.clone()) {
                    Ok(true) => {
                        worklist.insert(CandidateClause::from(clause));
                    }

                    Ok(false) => {}

                    Err(ClauseDBError::StorageExhausted) => break 'solve_loop,
                }
            }
        }

        self.counters.time = timer.elapsed();
        Ok(self.report())
    }

    /// Pops the clause to examine next: the least of the shortest candidates or, with the configured probability, a random clause from among the shortest.
    fn next_candidate(&mut self, worklist: &mut BTreeSet<CandidateClause>) -> Option<Clause> {
        let bias = self.config.random_choice_bias.value;

        if bias > 0.0 && self.rng.random_bool(bias) {
            let least_size = worklist.first()?.size;
            let ties = worklist
                .iter()
                .take_while(|candidate| candidate.size == least_size)
                .count();

            let choice = self.rng.random_range(0..ties);
            let chosen = worklist.iter().nth(choice)?.clone();
            worklist.remove(&chosen);

            return Some(chosen.clause);
        }

        worklist.pop_first().map(|candidate| candidate.clause)
    }
}
