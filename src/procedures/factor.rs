/*!
Factoring of a clause.

A factor of a clause merges two literals of the same polarity whose atoms unify: applying the unifier to the clause collapses the pair to one literal.
Binary resolution alone cannot refute some unsatisfiable sets --- `{p(x), p(y)}` with `{¬p(u), ¬p(v)}` is the classic example --- and deriving factors alongside resolvents closes the gap.

Factoring is gated by the [factoring](crate::config::Config::factoring) option, on by default.
*/

use crate::structures::clause::Clause;
use crate::unification::unify;

/// Every factor of `clause` obtained by unifying one pair of same-polarity literals, in canonical form.
pub fn factors(clause: &Clause) -> Vec<Clause> {
    let mut factors = Vec::default();

    let literals: Vec<_> = clause.literals().collect();

    for (index, first) in literals.iter().enumerate() {
        for second in literals.iter().skip(index + 1) {
            if first.polarity() != second.polarity() {
                continue;
            }

            if let Some(sigma) = unify(first.atom(), second.atom()) {
                let factor = clause.substitute(&sigma).canonical();

                // The unifier collapses the pair, so the factor is strictly shorter.
                if factor.size() < clause.size() {
                    factors.push(factor);
                }
            }
        }
    }

    factors
}
