/*!
Binary resolution of a pair of clauses.

Given clauses `L` and `R`, a literal `ℓ ∈ L`, and a literal `ℓ′ ∈ R` of opposite polarity whose atoms unify with most general unifier σ, the resolvent is σ applied to `(L \ {ℓ}) ∪ (R \ {ℓ′})`.
An empty resolvent witnesses the unsatisfiability of the clause set, as the parents admit no common interpretation.

# Renaming apart

The variables of the two parents are distinct universals even when they share a name, so before a pair of literals is sought the right parent has every variable renamed to a fresh name.
Without the renaming a clause could not soundly resolve against itself, or against a clause sharing a variable with it --- the shared name would be read as one variable where the logic has two.

On multiple candidate literal pairs the first pair in the (derived, deterministic) literal order is taken.
The saturation loop revisits clauses, so no pair is lost to this choice.
*/

use crate::{
    context::{GenericContext, NameSupply},
    structures::{clause::Clause, substitution::Substitution, term::Term},
    unification::unify,
};

/// The resolvent of `left` and `right` on the first resolvable literal pair, if any pair resolves.
///
/// The resolvent is returned in canonical form.
pub fn resolvent(names: &mut NameSupply, left: &Clause, right: &Clause) -> Option<Clause> {
    let right = rename_apart(names, right);

    for left_literal in left.literals() {
        for right_literal in right.literals() {
            if left_literal.polarity() == right_literal.polarity() {
                continue;
            }

            if let Some(sigma) = unify(left_literal.atom(), right_literal.atom()) {
                let remainder = left
                    .without(left_literal)
                    .union(&right.without(right_literal));

                return Some(remainder.substitute(&sigma).canonical());
            }
        }
    }

    None
}

/// The clause with every variable renamed to a fresh name.
fn rename_apart(names: &mut NameSupply, clause: &Clause) -> Clause {
    let variables = clause.variables();
    if variables.is_empty() {
        return clause.clone();
    }

    let mut renaming = Substitution::default();
    for variable in variables {
        renaming.bind(variable, Term::variable(names.fresh()));
    }

    clause.substitute(&renaming)
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The resolvent of `left` and `right`, drawing fresh names from the context to rename the parents apart.
    pub fn resolvent(&mut self, left: &Clause, right: &Clause) -> Option<Clause> {
        resolvent(&mut self.names, left, right)
    }
}
