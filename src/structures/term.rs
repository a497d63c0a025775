/*!
Terms, aka. the arguments of predicates.

A term is either a variable or the application of a function symbol to a sequence of terms.
There is no separate constant case: a constant is the application of a symbol to no arguments.

Terms are value types: equality and hashing are structural, and the derived ordering is used to keep clauses in a canonical literal order.

```rust
# use marten_fol::structures::term::Term;
let x = Term::variable("x");
let b = Term::constant("b");
let fxb = Term::application("f", vec![x.clone(), b]);

assert!(x.is_variable());
assert!(!fxb.is_variable());
assert_eq!(fxb.to_string(), "(f x b)");
```
*/

use crate::structures::symbol::Symbol;

/// A first-order term.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A variable, scoped to the clause containing it.
    Variable(Symbol),

    /// The application of a function symbol to zero or more terms.
    Application {
        /// The function (or constant, or predicate) symbol applied.
        symbol: Symbol,

        /// The arguments of the application, possibly empty.
        args: Vec<Term>,
    },
}

impl Term {
    /// A fresh variable term with the given name.
    pub fn variable(name: impl Into<Symbol>) -> Self {
        Term::Variable(name.into())
    }

    /// The application of `symbol` to `args`.
    pub fn application(symbol: impl Into<Symbol>, args: Vec<Term>) -> Self {
        Term::Application {
            symbol: symbol.into(),
            args,
        }
    }

    /// A constant, i.e. the application of `symbol` to no arguments.
    pub fn constant(symbol: impl Into<Symbol>) -> Self {
        Term::Application {
            symbol: symbol.into(),
            args: Vec::default(),
        }
    }

    /// Whether the term is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Collects the names of every variable occurring in the term into `names`, in order of first occurrence.
    pub fn variables(&self, names: &mut Vec<Symbol>) {
        match self {
            Term::Variable(name) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }

            Term::Application { args, .. } => {
                for arg in args {
                    arg.variables(names);
                }
            }
        }
    }

}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(name) => write!(f, "{name}"),

            Term::Application { symbol, args } => {
                if args.is_empty() {
                    write!(f, "{symbol}")
                } else {
                    write!(f, "({symbol}")?;
                    for arg in args {
                        write!(f, " {arg}")?;
                    }
                    write!(f, ")")
                }
            }
        }
    }
}
