/*!
Clauses, aka. sets of literals, interpreted as the disjunction of those literals.

Clauses are value objects: two clauses are equal exactly when they contain the same literals, and a clause may be used as a member of a set.

- The empty clause is always false, and so witnesses the inconsistency of any clause set containing it.
- Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

```rust
# use marten_fol::structures::{clause::Clause, literal::Literal, term::Term};
let p = Literal::new(Term::application("p", vec![Term::constant("a")]), true);

let unit = Clause::unit(p.clone());
assert_eq!(unit.size(), 1);

let mixed = Clause::from_literals([p.clone(), p.negate()]);
assert!(mixed.is_tautology());
assert!(Clause::empty().is_empty());
```
*/

use std::collections::BTreeSet;

use crate::structures::{literal::Literal, substitution::Substitution, symbol::Symbol, term::Term};

/// A set of literals, interpreted as their disjunction.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// The empty clause, i.e. falsity.
    pub fn empty() -> Self {
        Clause::default()
    }

    /// The clause containing exactly `literal`.
    pub fn unit(literal: Literal) -> Self {
        let mut literals = BTreeSet::default();
        literals.insert(literal);
        Clause { literals }
    }

    /// The clause containing the given literals.
    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// An iterator over the literals of the clause, in their derived order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Whether the clause contains `literal`.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Whether the clause contains some literal together with its negation.
    ///
    /// A tautologous clause is true on any interpretation, and so never contributes to a refutation.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .filter(|literal| literal.polarity())
            .any(|literal| self.literals.contains(&literal.negate()))
    }

    /// The union of `self` and `other`.
    pub fn union(&self, other: &Clause) -> Clause {
        Clause {
            literals: self.literals.union(&other.literals).cloned().collect(),
        }
    }

    /// The clause with `literal` removed, if present.
    pub fn without(&self, literal: &Literal) -> Clause {
        let mut literals = self.literals.clone();
        literals.remove(literal);
        Clause { literals }
    }

    /// The clause with `substitution` applied to every literal.
    pub fn substitute(&self, substitution: &Substitution) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .map(|literal| literal.substitute(substitution))
                .collect(),
        }
    }

    /// The names of every variable occurring in the clause, in order of first occurrence.
    pub fn variables(&self) -> Vec<Symbol> {
        let mut names = Vec::default();
        for literal in &self.literals {
            literal.atom().variables(&mut names);
        }
        names
    }

    /// The clause with its variables renamed, in order of first occurrence, to `-1`, `-2`, ….
    ///
    /// Two derivations of the same clause up to variable naming map to the same canonical clause, so storing canonical clauses keeps a clause database free of duplicates differing only in fresh names.
    /// The renaming is a bijection on the clause's variables applied simultaneously, so distinct variables remain distinct.
    pub fn canonical(&self) -> Clause {
        let variables = self.variables();

        let mut renaming = Substitution::default();
        for (index, name) in variables.iter().enumerate() {
            let fresh = format!("-{}", index + 1);
            if *name != fresh {
                renaming.bind(name.clone(), Term::variable(fresh));
            }
        }

        match renaming.is_empty() {
            true => self.clone(),
            false => self.substitute(&renaming),
        }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
            for literal in literals {
                write!(f, " {literal}")?;
            }
        }
        write!(f, "}}")
    }
}
