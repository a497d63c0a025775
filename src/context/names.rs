use std::collections::HashSet;

use crate::structures::symbol::Symbol;

/// A supply of fresh names, together with the record of bound names witnessed so far.
///
/// One supply serves every formula added to a context, so a bound name reused across two formulas of the same set is renamed in the second, and the names of compiled clauses are unique context-wide.
/// Fresh names are also drawn when the variables of a clause are renamed apart for resolution.
///
/// Fresh names count down from `-1`, printed in decimal.
/// The source alphabet has no `-`, so a fresh name cannot collide with a source name.
pub struct NameSupply {
    next: i64,
    seen: HashSet<Symbol>,
}

impl Default for NameSupply {
    fn default() -> Self {
        NameSupply {
            next: -1,
            seen: HashSet::default(),
        }
    }
}

impl NameSupply {
    /// A fresh name, distinct from every source name and every name previously supplied.
    pub fn fresh(&mut self) -> Symbol {
        let name = self.next.to_string();
        self.next -= 1;
        name
    }

    /// Whether `name` has been witnessed as a bound name.
    pub fn seen(&self, name: &Symbol) -> bool {
        self.seen.contains(name)
    }

    /// Records `name` as a bound name.
    pub fn witness(&mut self, name: Symbol) {
        self.seen.insert(name);
    }
}
