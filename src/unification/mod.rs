/*!
Unification of terms, by iterated examination of disagreements.

Two terms unify when some substitution maps both to the same term, and [unify] finds the most general such substitution, if any exists.
The algorithm repeatedly locates the first [disagreement](find_disagreement) between the terms, binds the variable side of the disagreement to the other side, applies the binding, and continues until the terms agree or no binding is possible.

The occurs check is mandatory: a variable never binds to a term containing that variable, as no substitution could make the two equal.

# Example

```rust
# use marten_fol::structures::term::Term;
# use marten_fol::unification::unify;
let left = Term::application("f", vec![Term::variable("x"), Term::constant("b")]);
let right = Term::application("f", vec![Term::constant("a"), Term::variable("y")]);

let sigma = unify(&left, &right).expect("unifiable");
assert_eq!(sigma.apply(&left), sigma.apply(&right));

let x = Term::variable("x");
let fx = Term::application("f", vec![x.clone()]);
assert!(unify(&x, &fx).is_none());
```
*/

use crate::structures::{substitution::Substitution, symbol::Symbol, term::Term};

/// The first disagreement between two terms, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Disagreement {
    /// The terms are syntactically identical.
    Equal,

    /// The terms differ at a position where neither side is a variable, so no substitution reconciles them.
    Conflict,

    /// The first position at which the terms differ and (at least) one side is a variable, with the variable's name first.
    Pair(Symbol, Term),
}

/// The first disagreement between `left` and `right`, walking both terms in lockstep, children left-to-right.
///
/// At corresponding positions:
/// - Syntactically equal subterms agree, and the walk continues.
/// - If (at least) one side is a variable, that pair is the disagreement.
/// - Applications with identical symbol and arity are walked into; any other pair of applications is a conflict.
pub fn find_disagreement(left: &Term, right: &Term) -> Disagreement {
    if left == right {
        return Disagreement::Equal;
    }

    match (left, right) {
        (Term::Variable(name), _) => Disagreement::Pair(name.clone(), right.clone()),

        (_, Term::Variable(name)) => Disagreement::Pair(name.clone(), left.clone()),

        (
            Term::Application {
                symbol: left_symbol,
                args: left_args,
            },
            Term::Application {
                symbol: right_symbol,
                args: right_args,
            },
        ) => {
            if left_symbol != right_symbol || left_args.len() != right_args.len() {
                return Disagreement::Conflict;
            }

            for (left_arg, right_arg) in left_args.iter().zip(right_args) {
                match find_disagreement(left_arg, right_arg) {
                    Disagreement::Equal => continue,
                    disagreement => return disagreement,
                }
            }

            Disagreement::Equal
        }
    }
}

/// Whether the variable `name` occurs anywhere in `term`.
pub fn occurs(name: &Symbol, term: &Term) -> bool {
    match term {
        Term::Variable(other) => name == other,

        Term::Application { args, .. } => args.iter().any(|arg| occurs(name, arg)),
    }
}

/// The most general unifier of `left` and `right`, if the two unify.
///
/// The returned substitution is idempotent: applying it twice is the same as applying it once.
pub fn unify(left: &Term, right: &Term) -> Option<Substitution> {
    let mut left = left.clone();
    let mut right = right.clone();
    let mut sigma = Substitution::default();

    loop {
        match find_disagreement(&left, &right) {
            Disagreement::Equal => return Some(sigma),

            Disagreement::Conflict => return None,

            Disagreement::Pair(name, term) => {
                if occurs(&name, &term) {
                    return None;
                }

                let mut binding = Substitution::default();
                binding.bind(name.clone(), term.clone());

                left = binding.apply(&left);
                right = binding.apply(&right);

                sigma.compose(name, term);
            }
        }
    }
}
