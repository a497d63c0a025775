/*!
(The representation of) a symbol.

Broadly, symbols are the names out of which terms and formulas are built: predicate symbols, function symbols, constant symbols, and variable names.
- 'Source' symbols are those read from a formula string, and are a run of ASCII alphanumerics. \
     Examples: `p`, `loves`, `3ab4`.
- 'Fresh' symbols are allocated internally, printed as a strictly decreasing decimal counter: `-1`, `-2`, ….

As the source alphabet has no `-`, a fresh symbol cannot collide with any source symbol, and two fresh symbols cannot collide with each other.

# Notes
- Whether a symbol names a variable or a constant is not a property of the symbol.
  The distinction is made by the term containing the symbol, fixed during compilation by the quantifiers in scope.
*/

/// A symbol, e.g. the name of a predicate, function, constant, or variable.
pub type Symbol = String;
