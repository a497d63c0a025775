/*!
Standardization of bound names.

After standardization no two quantifiers across the formulas of one context bind the same name.
The [name supply](crate::context::NameSupply) records every bound name witnessed so far; a quantifier binding a name already witnessed has its variable renamed to a fresh name, and occurrences under the quantifier follow through an accumulated variable-for-variable substitution.

The record of witnessed names is shared across branches on purpose: sibling quantifiers must not reuse each other's names, as later passes pull quantifiers into a single prefix.
*/

use crate::{
    context::NameSupply,
    structures::{formula::Formula, substitution::Substitution, symbol::Symbol, term::Term},
};

/// Renames bound variables so every quantifier of the context binds a distinct name.
pub fn standardize(formula: Formula, names: &mut NameSupply) -> Formula {
    let renaming = Substitution::default();
    walk(formula, &renaming, names)
}

fn walk(formula: Formula, renaming: &Substitution, names: &mut NameSupply) -> Formula {
    match formula {
        Formula::Forall(v, g) => {
            let (v, renaming) = rebind(v, renaming, names);
            Formula::forall(v, walk(*g, &renaming, names))
        }

        Formula::Exists(v, g) => {
            let (v, renaming) = rebind(v, renaming, names);
            Formula::exists(v, walk(*g, &renaming, names))
        }

        Formula::Predicate(symbol, args) => Formula::Predicate(
            symbol,
            args.into_iter().map(|arg| renaming.apply(&arg)).collect(),
        ),

        Formula::Negation(g) => Formula::negation(walk(*g, renaming, names)),

        Formula::And(a, b) => {
            let a = walk(*a, renaming, names);
            Formula::and(a, walk(*b, renaming, names))
        }

        Formula::Or(a, b) => {
            let a = walk(*a, renaming, names);
            Formula::or(a, walk(*b, renaming, names))
        }

        Formula::Implies(a, b) => {
            let a = walk(*a, renaming, names);
            Formula::implies(a, walk(*b, renaming, names))
        }

        Formula::Contradiction => Formula::Contradiction,
    }
}

/// The name to bind in place of `v`, together with the renaming for the quantifier's scope.
fn rebind(v: Symbol, renaming: &Substitution, names: &mut NameSupply) -> (Symbol, Substitution) {
    match names.seen(&v) {
        true => {
            let fresh = names.fresh();

            let mut renaming = renaming.clone();
            renaming.bind(v, Term::variable(fresh.clone()));

            names.witness(fresh.clone());
            (fresh, renaming)
        }

        false => {
            names.witness(v.clone());
            (v, renaming.clone())
        }
    }
}
