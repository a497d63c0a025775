/*!
Negation normal form.

After normalization, negation appears only directly on predicate atoms (or on `CONTR`), and no conditional remains.
The pass is a pair of mutually recursive functions: [positive] rewrites a formula, and [negative] rewrites the negation of a formula, pushing the negation inward by the usual dualities.

Normalization is idempotent: a formula in negation normal form is returned unchanged.
*/

use crate::structures::formula::Formula;

/// The negation normal form of `formula`.
pub fn normalize(formula: Formula) -> Formula {
    positive(formula)
}

/// `formula`, normalized.
fn positive(formula: Formula) -> Formula {
    match formula {
        Formula::Forall(v, g) => Formula::forall(v, positive(*g)),

        Formula::Exists(v, g) => Formula::exists(v, positive(*g)),

        Formula::Implies(a, b) => Formula::or(negative(*a), positive(*b)),

        Formula::And(a, b) => Formula::and(positive(*a), positive(*b)),

        Formula::Or(a, b) => Formula::or(positive(*a), positive(*b)),

        Formula::Negation(g) => negative(*g),

        Formula::Predicate(..) | Formula::Contradiction => formula,
    }
}

/// The negation of `formula`, normalized.
fn negative(formula: Formula) -> Formula {
    match formula {
        Formula::Forall(v, g) => Formula::exists(v, negative(*g)),

        Formula::Exists(v, g) => Formula::forall(v, negative(*g)),

        Formula::Implies(a, b) => Formula::and(positive(*a), negative(*b)),

        Formula::And(a, b) => Formula::or(negative(*a), negative(*b)),

        Formula::Or(a, b) => Formula::and(negative(*a), negative(*b)),

        Formula::Negation(g) => positive(*g),

        Formula::Predicate(..) | Formula::Contradiction => Formula::negation(formula),
    }
}
