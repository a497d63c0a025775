/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters, though for the moment this is limited to the source of randomness.
Still, this helps distinguish generic context methods against those intended for external use or a particular application.
In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use marten_fol::context::Context;
# use marten_fol::config::Config;
# use marten_fol::reports::Report;
let mut ctx = Context::from_config(Config::default());

assert!(ctx.add_formula("(FORALL x (p x))").is_ok());
assert!(ctx.add_formula("(NOT (p a))").is_ok());

assert!(ctx.solve().is_ok());
assert_eq!(ctx.report(), Report::Unsatisfiable);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod names;
pub use names::NameSupply;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// The clause database is known to be satisfiable, e.g. by saturation without the empty clause.
    Satisfiable,

    /// The clause database is known to be unsatisfiable, e.g. with the empty clause derived.
    Unsatisfiable,

    /// The consistency of the clause database is unknown.
    Solving,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}
