/*!
Prenex form.

After the pass every quantifier sits in a prefix above a quantifier-free matrix.
The pass recurses bottom-up: once the children of a conjunction or disjunction are in prenex form, their prefixes are pulled out to the left of the connective, the left child's prefix first.

Standardization has already made every bound name unique, so the float-up cannot capture a variable.
*/

use crate::structures::{formula::Formula, symbol::Symbol};

/// A quantifier of a prenex prefix.
enum Quantifier {
    Universal(Symbol),
    Existential(Symbol),
}

/// Floats every quantifier of `formula` up to a prefix, preserving left-to-right order.
pub fn prenex(formula: Formula) -> Formula {
    match formula {
        Formula::Forall(v, g) => Formula::forall(v, prenex(*g)),

        Formula::Exists(v, g) => Formula::exists(v, prenex(*g)),

        Formula::And(a, b) => pull(prenex(*a), prenex(*b), Formula::and),

        Formula::Or(a, b) => pull(prenex(*a), prenex(*b), Formula::or),

        // Negations apply to atoms after normalization, and conditionals are gone.
        _ => formula,
    }
}

/// Combines two prenex formulas with `connective`, pulling both prefixes above the connective.
fn pull(a: Formula, b: Formula, connective: fn(Formula, Formula) -> Formula) -> Formula {
    let (prefix_a, matrix_a) = split(a);
    let (prefix_b, matrix_b) = split(b);

    let mut formula = connective(matrix_a, matrix_b);

    for quantifier in prefix_a.into_iter().chain(prefix_b).rev() {
        formula = match quantifier {
            Quantifier::Universal(v) => Formula::forall(v, formula),
            Quantifier::Existential(v) => Formula::exists(v, formula),
        };
    }

    formula
}

/// Splits a prenex formula into its quantifier prefix, outermost first, and its matrix.
fn split(formula: Formula) -> (Vec<Quantifier>, Formula) {
    let mut prefix = Vec::default();
    let mut matrix = formula;

    loop {
        match matrix {
            Formula::Forall(v, g) => {
                prefix.push(Quantifier::Universal(v));
                matrix = *g;
            }

            Formula::Exists(v, g) => {
                prefix.push(Quantifier::Existential(v));
                matrix = *g;
            }

            _ => return (prefix, matrix),
        }
    }
}
