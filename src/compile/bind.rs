/*!
Classification of bare argument symbols as variables or constants.

The grammar does not distinguish a variable from a constant: both are bare symbols in argument position.
The quantifiers in scope settle the question, and this pass settles it first so every later pass sees properly classified terms: a symbol is a variable exactly when a quantifier binding it encloses the occurrence, and a constant (a zero-argument application) otherwise.

A symbol applied to arguments is always a function symbol, though its arguments are classified in turn.
*/

use crate::structures::{formula::Formula, symbol::Symbol, term::Term};

/// Replaces each bare argument symbol bound by no enclosing quantifier with a constant.
pub fn bind_terms(formula: Formula) -> Formula {
    let mut scope = Vec::default();
    walk(formula, &mut scope)
}

fn walk(formula: Formula, scope: &mut Vec<Symbol>) -> Formula {
    match formula {
        Formula::Predicate(symbol, args) => Formula::Predicate(
            symbol,
            args.into_iter().map(|arg| classify(arg, scope)).collect(),
        ),

        Formula::Negation(g) => Formula::negation(walk(*g, scope)),

        Formula::And(a, b) => {
            let a = walk(*a, scope);
            Formula::and(a, walk(*b, scope))
        }

        Formula::Or(a, b) => {
            let a = walk(*a, scope);
            Formula::or(a, walk(*b, scope))
        }

        Formula::Implies(a, b) => {
            let a = walk(*a, scope);
            Formula::implies(a, walk(*b, scope))
        }

        Formula::Forall(v, g) => {
            scope.push(v.clone());
            let g = walk(*g, scope);
            scope.pop();
            Formula::forall(v, g)
        }

        Formula::Exists(v, g) => {
            scope.push(v.clone());
            let g = walk(*g, scope);
            scope.pop();
            Formula::exists(v, g)
        }

        Formula::Contradiction => Formula::Contradiction,
    }
}

fn classify(term: Term, scope: &[Symbol]) -> Term {
    match term {
        Term::Variable(name) => {
            if scope.contains(&name) {
                Term::Variable(name)
            } else {
                Term::constant(name)
            }
        }

        Term::Application { symbol, args } => Term::Application {
            symbol,
            args: args.into_iter().map(|arg| classify(arg, scope)).collect(),
        },
    }
}
