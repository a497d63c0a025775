/*!
Substitutions, aka. finite maps from variable names to terms.

Application replaces each variable with its image in a single pass, without iterating to a fixpoint.
The substitutions produced by [unification](crate::unification) are idempotent, so a single pass suffices for them.

```rust
# use marten_fol::structures::{substitution::Substitution, term::Term};
let mut sigma = Substitution::default();
sigma.bind("x".to_string(), Term::constant("a"));

let term = Term::application("f", vec![Term::variable("x"), Term::variable("y")]);
assert_eq!(sigma.apply(&term).to_string(), "(f a y)");
```
*/

use std::collections::HashMap;

use crate::structures::{symbol::Symbol, term::Term};

/// A finite map from variable names to terms.
#[derive(Clone, Debug, Default)]
pub struct Substitution {
    map: HashMap<Symbol, Term>,
}

impl Substitution {
    /// The term bound to `name`, if any.
    pub fn get(&self, name: &Symbol) -> Option<&Term> {
        self.map.get(name)
    }

    /// Binds `name` to `term`, replacing any previous binding of `name`.
    pub fn bind(&mut self, name: Symbol, term: Term) {
        self.map.insert(name, term);
    }

    /// Whether the substitution has no bindings.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Applies the substitution to `term`, in a single simultaneous pass.
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Variable(name) => match self.map.get(name) {
                Some(image) => image.clone(),
                None => term.clone(),
            },

            Term::Application { symbol, args } => Term::Application {
                symbol: symbol.clone(),
                args: args.iter().map(|arg| self.apply(arg)).collect(),
            },
        }
    }

    /// Extends the substitution with `name ↦ term`, first applying the fresh binding to the image of every existing binding.
    ///
    /// Composing this way keeps the substitution idempotent: no bound name occurs in any image once the occurs check has excluded `name` from `term`.
    pub fn compose(&mut self, name: Symbol, term: Term) {
        let mut binding = Substitution::default();
        binding.bind(name.clone(), term.clone());

        for image in self.map.values_mut() {
            *image = binding.apply(image);
        }

        self.map.insert(name, term);
    }
}
