/*!
Formulas, aka. the abstract syntax of a first-order sentence.

A formula is the output of the [parser](crate::builder::parse) and the object transformed by the [compiler passes](crate::compile).
Clauses, rather than formulas, are what a solve operates on.

The constructors box their children, so compiler passes may be written over owned formulas without boxing noise.
*/

use crate::structures::{symbol::Symbol, term::Term};

/// The abstract syntax of a first-order sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// The application of a predicate symbol to zero or more terms.
    Predicate(Symbol, Vec<Term>),

    /// The negation of a formula.
    Negation(Box<Formula>),

    /// The conjunction of two formulas.
    And(Box<Formula>, Box<Formula>),

    /// The disjunction of two formulas.
    Or(Box<Formula>, Box<Formula>),

    /// A material conditional.
    Implies(Box<Formula>, Box<Formula>),

    /// Universal quantification of the given name over a formula.
    Forall(Symbol, Box<Formula>),

    /// Existential quantification of the given name over a formula.
    Exists(Symbol, Box<Formula>),

    /// Falsity, read from the `CONTR` token.
    Contradiction,
}

impl Formula {
    /// The application of `symbol` to `args`.
    pub fn predicate(symbol: impl Into<Symbol>, args: Vec<Term>) -> Self {
        Formula::Predicate(symbol.into(), args)
    }

    /// The negation of `formula`.
    pub fn negation(formula: Formula) -> Self {
        Formula::Negation(Box::new(formula))
    }

    /// The conjunction of `left` and `right`.
    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    /// The disjunction of `left` and `right`.
    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    /// The conditional with antecedent `left` and consequent `right`.
    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    /// Universal quantification of `name` over `formula`.
    pub fn forall(name: impl Into<Symbol>, formula: Formula) -> Self {
        Formula::Forall(name.into(), Box::new(formula))
    }

    /// Existential quantification of `name` over `formula`.
    pub fn exists(name: impl Into<Symbol>, formula: Formula) -> Self {
        Formula::Exists(name.into(), Box::new(formula))
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Predicate(symbol, args) => {
                if args.is_empty() {
                    write!(f, "({symbol})")
                } else {
                    write!(f, "({symbol}")?;
                    for arg in args {
                        write!(f, " {arg}")?;
                    }
                    write!(f, ")")
                }
            }

            Formula::Negation(g) => write!(f, "(NOT {g})"),
            Formula::And(a, b) => write!(f, "(AND {a} {b})"),
            Formula::Or(a, b) => write!(f, "(OR {a} {b})"),
            Formula::Implies(a, b) => write!(f, "(IMPLIES {a} {b})"),
            Formula::Forall(v, g) => write!(f, "(FORALL {v} {g})"),
            Formula::Exists(v, g) => write!(f, "(EXISTS {v} {g})"),
            Formula::Contradiction => write!(f, "(CONTR)"),
        }
    }
}
