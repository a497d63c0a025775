/*!
Error types used in the library.

- Some of these are external --- e.g. a lex or parse error reports a malformed formula string, and the caller decides what to do with the containing set.
- Others guard internal invariants --- e.g. a [BuildError] notes a formula which failed to reduce to clauses, rather than a panic.

Names of the error enums --- for the most part --- overlap with the corresponding areas of the library.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error when reading tokens from a formula string.
    Lex(LexError),

    /// An error when parsing a token stream to a formula.
    Parse(ParseError),

    /// An error when compiling a formula to clauses.
    Build(BuildError),

    /// An error in the clause database.
    ClauseDB(ClauseDBError),

    /// The attempted action could not be completed given the state of the context.
    InvalidState,
}

/// Errors when reading tokens from a formula string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LexError {
    /// A character outside the token alphabet was read.
    UnexpectedCharacter(char),
}

impl From<LexError> for ErrorKind {
    fn from(e: LexError) -> Self {
        ErrorKind::Lex(e)
    }
}

/// Errors when parsing a token stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The token stream ended while a production was incomplete.
    UnexpectedEnd,

    /// A token which no production at the current position accepts.
    UnexpectedToken,

    /// A symbol was required, e.g. to name a quantified variable.
    ExpectedSymbol,

    /// A closing parenthesis was required.
    ExpectedClose,

    /// Tokens remained after a complete formula was parsed.
    TrailingInput,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when compiling a formula to clauses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A quantifier or conditional survived to distribution.
    ///
    /// The compiler passes remove these before distribution, so this notes a broken invariant rather than bad input.
    UnreducedFormula,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// The configured ceiling on stored clauses has been reached.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}
