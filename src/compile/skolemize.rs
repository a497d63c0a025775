/*!
Skolemization, and the stripping of the universal prefix.

Skolemization removes each existential quantifier by replacing its variable with the application of a fresh function symbol to the universal variables enclosing the quantifier.
As standardization has made every bound name unique, the existential's own name serves as the Skolem function symbol without risk of collision.

With the existentials gone the prefix is a block of universal quantifiers over a quantifier-free matrix, and [strip_universals] removes the block: the variables of a clause are implicitly universal.
*/

use crate::structures::{formula::Formula, substitution::Substitution, symbol::Symbol, term::Term};

/// Replaces each existentially quantified variable with a Skolem function of the enclosing universals.
pub fn skolemize(formula: Formula) -> Formula {
    let mut universals = Vec::default();
    let mut skolemization = Substitution::default();
    walk(formula, &mut universals, &mut skolemization)
}

fn walk(
    formula: Formula,
    universals: &mut Vec<Symbol>,
    skolemization: &mut Substitution,
) -> Formula {
    match formula {
        Formula::Forall(v, g) => {
            if !universals.contains(&v) {
                universals.push(v.clone());
            }
            Formula::forall(v, walk(*g, universals, skolemization))
        }

        Formula::Exists(v, g) => {
            let arguments = universals
                .iter()
                .map(|name| Term::variable(name.clone()))
                .collect();
            skolemization.bind(v.clone(), Term::application(v, arguments));

            walk(*g, universals, skolemization)
        }

        Formula::Predicate(symbol, args) => Formula::Predicate(
            symbol,
            args.into_iter()
                .map(|arg| skolemization.apply(&arg))
                .collect(),
        ),

        Formula::Negation(g) => Formula::negation(walk(*g, universals, skolemization)),

        Formula::And(a, b) => {
            let a = walk(*a, universals, skolemization);
            Formula::and(a, walk(*b, universals, skolemization))
        }

        Formula::Or(a, b) => {
            let a = walk(*a, universals, skolemization);
            Formula::or(a, walk(*b, universals, skolemization))
        }

        Formula::Implies(a, b) => {
            let a = walk(*a, universals, skolemization);
            Formula::implies(a, walk(*b, universals, skolemization))
        }

        Formula::Contradiction => Formula::Contradiction,
    }
}

/// Strips the leading block of universal quantifiers, returning the stripped names and the matrix.
pub fn strip_universals(formula: Formula) -> (Vec<Symbol>, Formula) {
    let mut universals = Vec::default();
    let mut matrix = formula;

    while let Formula::Forall(v, g) = matrix {
        universals.push(v);
        matrix = *g;
    }

    (universals, matrix)
}
