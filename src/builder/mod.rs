/*!
Tools for building a context.

# Basic methods

The library has two basic methods for populating a context:
- [add_formula](crate::context::GenericContext::add_formula), to lex, parse, and compile an S-expression formula string.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause directly.

A formula contributes every clause of its conjunctive normal form, and a context accumulates the clauses of each formula added: the conjunction of everything added is what a [solve](crate::procedures::solve) examines.

# Examples

A theory built from source strings.

```rust
# use marten_fol::context::Context;
# use marten_fol::config::Config;
# use marten_fol::reports::Report;
let mut ctx = Context::from_config(Config::default());

assert!(ctx.add_formula("(FORALL x (IMPLIES (p x) (q x)))").is_ok());
assert!(ctx.add_formula("(p a)").is_ok());

ctx.solve();
assert_eq!(ctx.report(), Report::Satisfiable);
```

A clause built directly.

```rust
# use marten_fol::context::Context;
# use marten_fol::config::Config;
# use marten_fol::builder::ClauseOk;
# use marten_fol::structures::{clause::Clause, literal::Literal, term::Term};
let mut ctx = Context::from_config(Config::default());

let atom = Term::application("p", vec![Term::constant("a")]);
let clause = Clause::unit(Literal::new(atom, true));

assert_eq!(ctx.add_clause(clause), Ok(ClauseOk::Added));
```
*/

pub mod lex;
pub mod parse;

use crate::{
    compile,
    context::{ContextState, GenericContext},
    misc::log::targets,
    structures::clause::Clause,
    types::err::ErrorKind,
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,

    /// An equal clause was already present (and so the clause was not added again).
    Duplicate,
}

/// Ok results when adding a formula to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulaOk {
    /// The formula was compiled, with the given count of fresh clauses added to the context.
    Added(usize),

    /// The formula compiled to a set containing the empty clause, so the context is inconsistent.
    Inconsistent,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Lexes, parses, and compiles `source`, adding the compiled clauses to the context.
    ///
    /// # Errors
    /// On a malformed source string; no clause is added to the context.
    pub fn add_formula(&mut self, source: &str) -> Result<FormulaOk, ErrorKind> {
        let formula = parse::parse_formula(source)?;
        let clauses = compile::compile(formula, &mut self.names)?;

        let mut fresh = 0;
        for clause in clauses {
            match self.add_clause(clause)? {
                ClauseOk::Added => fresh += 1,
                ClauseOk::Tautology | ClauseOk::Duplicate => {}
            }
        }

        match self.state {
            ContextState::Unsatisfiable => Ok(FormulaOk::Inconsistent),
            _ => Ok(FormulaOk::Added(fresh)),
        }
    }

    /// Adds `clause` to the context, unless the clause is a tautology.
    ///
    /// Adding the empty clause marks the context unsatisfiable.
    pub fn add_clause(&mut self, clause: Clause) -> Result<ClauseOk, ErrorKind> {
        if clause.is_tautology() {
            log::trace!(target: targets::CLAUSE_DB, "Tautology set aside: {clause}");
            self.counters.tautologies += 1;
            return Ok(ClauseOk::Tautology);
        }

        if clause.is_empty() {
            self.state = ContextState::Unsatisfiable;
        } else if matches!(self.state, ContextState::Configuration) {
            self.state = ContextState::Input;
        }

        match self.clause_db.insert(clause)? {
            true => Ok(ClauseOk::Added),
            false => Ok(ClauseOk::Duplicate),
        }
    }
}
