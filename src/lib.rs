/*!
A library for determining the consistency of finite sets of first-order formulas.

marten_fol reads first-order sentences written as S-expressions, compiles each sentence to a set of clauses in conjunctive normal form, and saturates the resulting clause set under binary resolution with unification, within a wall-clock budget.
A set whose saturation derives the empty clause is inconsistent.

# Orientation

The library is designed around the core structure of a [context].

Formulas may be added through their [S-expression source](crate::context::GenericContext::add_formula) or [programmatically](crate::context::GenericContext::add_clause) as clauses.

Internally, and at a high level, a solve is viewed in terms of a handful of cooperating parts:
- A formula is lowered to clauses by the [compiler passes](crate::compile).
- Clauses are stored in a [clause database](crate::db::clause).
- Resolvents are found through [unification](crate::unification) and added back to the database until the empty clause appears, the database is saturated, or the budget is spent.

Useful starting points, then, may be:
- The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
- The [compiler](crate::compile) to inspect the lowering of a formula to clauses.
- The [structures] to familiarise yourself with the elements of a solve (terms, literals, clauses, formulas).
- The [runner] for the examination of many formula sets at once, each on its own worker.

# Examples

+ Refute a small theory through the context directly.

```rust
# use marten_fol::{config::Config, context::Context, reports::Report};
let mut ctx = Context::from_config(Config::default());

assert!(ctx.add_formula("(FORALL x (IMPLIES (p x) (q x)))").is_ok());
assert!(ctx.add_formula("(p a)").is_ok());
assert!(ctx.add_formula("(NOT (q a))").is_ok());

assert!(ctx.solve().is_ok());
assert_eq!(ctx.report(), Report::Unsatisfiable);
```

+ Examine a collection of sets at once, with a shared budget.

```rust
# use marten_fol::runner::find_inconsistent;
# use std::time::Duration;
let sets = vec![
    vec!["(p a)".to_string(), "(NOT (p a))".to_string()],
    vec!["(p a)".to_string(), "(q b)".to_string()],
];

assert_eq!(find_inconsistent(&sets, Duration::from_secs(2)), vec![0]);
```

# Guiding principles

## Modularity

+ The prover is built of interconnected parts, but where possible interaction between parts happens through documented access points.
  For example, clauses are stored in a [clause database](crate::db::clause) whose internal structure is private, and the algorithm for determining consistency is factored into a collection of [procedures].
+ Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/) and [rand](https://docs.rs/rand/latest/rand/).

## Honest reports

A solve concludes with a [report](crate::reports::Report), and an `Unknown` report is a first-class outcome: first-order consistency is only semi-decidable, and a budget may be spent without an answer.
No part of the library trades an exhausted budget for a guess.

# Logs

To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
The targets are listed in [misc::log]. No log implementation is provided.
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod compile;
pub mod procedures;
pub mod runner;
pub mod unification;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod reports;

pub mod db;

pub mod misc;
