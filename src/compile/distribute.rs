/*!
Distribution of disjunction over conjunction.

The matrix left by the earlier passes is built from literals with `AND` and `OR`, and distribution lowers it to a set of clauses:

- A conjunction contributes the union of its children's clause sets.
- A disjunction contributes the pairwise unions of its children's clauses.
- A literal contributes a singleton clause; `CONTR` contributes the empty clause, and a negated `CONTR` contributes nothing at all.

The clause count is exponential in the disjunctions beneath conjunctions in the worst case; that is inherent to conjunctive normal form and accepted.
*/

use std::collections::BTreeSet;

use crate::{
    structures::{clause::Clause, formula::Formula, literal::Literal, term::Term},
    types::err::BuildError,
};

/// Lowers a quantifier-free matrix to the set of clauses of its conjunctive normal form.
///
/// # Errors
/// If a quantifier or conditional remains in the matrix, as the earlier passes have failed to establish their invariants.
pub fn distribute(matrix: Formula) -> Result<BTreeSet<Clause>, BuildError> {
    match matrix {
        Formula::And(a, b) => {
            let mut clauses = distribute(*a)?;
            clauses.extend(distribute(*b)?);
            Ok(clauses)
        }

        Formula::Or(a, b) => {
            let left = distribute(*a)?;
            let right = distribute(*b)?;

            let mut clauses = BTreeSet::default();
            for left_clause in &left {
                for right_clause in &right {
                    clauses.insert(left_clause.union(right_clause));
                }
            }
            Ok(clauses)
        }

        Formula::Predicate(symbol, args) => {
            let literal = Literal::new(Term::application(symbol, args), true);
            Ok(BTreeSet::from([Clause::unit(literal)]))
        }

        Formula::Negation(g) => match *g {
            Formula::Predicate(symbol, args) => {
                let literal = Literal::new(Term::application(symbol, args), false);
                Ok(BTreeSet::from([Clause::unit(literal)]))
            }

            // The negation of falsity is true everywhere, and so contributes no clause.
            Formula::Contradiction => Ok(BTreeSet::default()),

            _ => Err(BuildError::UnreducedFormula),
        },

        Formula::Contradiction => Ok(BTreeSet::from([Clause::empty()])),

        Formula::Implies(..) | Formula::Forall(..) | Formula::Exists(..) => {
            Err(BuildError::UnreducedFormula)
        }
    }
}
