/*!
The compiler from formulas to clauses.

A parsed formula passes through a fixed sequence of tree transformations, each establishing an invariant the later passes (and a solve) rely on:

1. [bind_terms](bind::bind_terms) --- a bare symbol in argument position becomes a variable when a quantifier binding it is in scope, and a constant otherwise.
2. [normalize](normalize::normalize) --- negation normal form: conditionals are eliminated and negation appears only on atoms.
3. [standardize](standardize::standardize) --- bound names are made unique, context-wide, by renaming reuses to fresh names.
4. [prenex](prenex::prenex) --- quantifiers float to a prefix, preserving their left-to-right order.
5. [skolemize](skolemize::skolemize) --- each existential variable becomes a function of the enclosing universals, and existential quantifiers are dropped.
6. [strip_universals](skolemize::strip_universals) --- the universal prefix is stripped; clause variables are implicitly universal.
7. [distribute](distribute::distribute) --- disjunction distributes over conjunction, yielding a set of clauses.

Each pass is a pure function over an owned [Formula](crate::structures::formula::Formula), except standardization, which draws on the context's [name supply](crate::context::NameSupply).
*/

pub mod bind;
pub mod distribute;
pub mod normalize;
pub mod prenex;
pub mod skolemize;
pub mod standardize;

use std::collections::BTreeSet;

use crate::{
    context::NameSupply,
    misc::log::targets,
    structures::{clause::Clause, formula::Formula},
    types::err::ErrorKind,
};

/// Compiles `formula` to a set of clauses whose conjunction is equisatisfiable with the formula.
pub fn compile(formula: Formula, names: &mut NameSupply) -> Result<BTreeSet<Clause>, ErrorKind> {
    let formula = bind::bind_terms(formula);
    let formula = normalize::normalize(formula);
    let formula = standardize::standardize(formula, names);
    let formula = prenex::prenex(formula);
    let formula = skolemize::skolemize(formula);

    let (universals, matrix) = skolemize::strip_universals(formula);
    if !universals.is_empty() {
        log::debug!(target: targets::COMPILE, "Stripped universal prefix: {universals:?}");
    }

    let clauses = distribute::distribute(matrix)?;
    log::debug!(target: targets::COMPILE, "Compiled {} clause(s)", clauses.len());

    Ok(clauses)
}
