/*!
Literals, aka. atoms paired with a polarity.

The atom of a literal is the application of a predicate symbol to terms, and the polarity records whether the atom occurs negated.

Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
Literals are hashable in order to allow for straightforward use of clauses as members of sets.

```rust
# use marten_fol::structures::{literal::Literal, term::Term};
let atom = Term::application("p", vec![Term::constant("a")]);
let literal = Literal::new(atom, true);

assert!(literal.polarity());
assert!(literal.complements(&literal.negate()));
assert_eq!(literal.negate().to_string(), "(NOT (p a))");
```
*/

use crate::structures::{substitution::Substitution, term::Term};

/// An atom paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    atom: Term,
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a polarity.
    ///
    /// The atom is expected to be an application of a predicate symbol.
    pub fn new(atom: Term, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &Term {
        &self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether `self` and `other` have syntactically equal atoms and opposite polarity.
    pub fn complements(&self, other: &Literal) -> bool {
        self.polarity != other.polarity && self.atom == other.atom
    }

    /// The literal with `substitution` applied to its atom.
    pub fn substitute(&self, substitution: &Substitution) -> Literal {
        Literal {
            atom: substitution.apply(&self.atom),
            polarity: self.polarity,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "(NOT {})", self.atom),
        }
    }
}
