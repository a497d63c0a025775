/*!
The parser from token streams to formulas.

A straightforward recursive descent over the grammar:

```text
formula   := symbol                       -- bare nullary predicate
           | '(' expr ')'
expr      := ('FORALL' | 'EXISTS') symbol formula
           | ('AND' | 'OR' | 'IMPLIES') formula formula
           | 'NOT' formula
           | 'CONTR'
           | symbol term*
term      := symbol
           | '(' symbol term* ')'
```

A bare symbol in argument position is parsed as a variable; whether it is in fact a variable or a constant is settled by the [first compiler pass](crate::compile::bind), which knows the quantifiers in scope.
*/

use crate::{
    builder::lex::{Lexer, Token},
    structures::{formula::Formula, symbol::Symbol, term::Term},
    types::err::{ErrorKind, ParseError},
};

/// Parses `source` to a formula.
///
/// The entire source must be consumed: trailing tokens are an error.
pub fn parse_formula(source: &str) -> Result<Formula, ErrorKind> {
    let mut parser = Parser {
        tokens: Lexer::new(source).peekable(),
    };

    let formula = parser.formula()?;

    match parser.tokens.next() {
        None => Ok(formula),
        Some(Err(e)) => Err(ErrorKind::from(e)),
        Some(Ok(_)) => Err(ErrorKind::from(ParseError::TrailingInput)),
    }
}

struct Parser<'s> {
    tokens: std::iter::Peekable<Lexer<'s>>,
}

impl Parser<'_> {
    /// The next token, with an exhausted stream as an error.
    fn next_token(&mut self) -> Result<Token, ErrorKind> {
        match self.tokens.next() {
            None => Err(ErrorKind::from(ParseError::UnexpectedEnd)),
            Some(Err(e)) => Err(ErrorKind::from(e)),
            Some(Ok(token)) => Ok(token),
        }
    }

    /// The next token, if it may be read without error.
    fn peek_token(&mut self) -> Option<&Token> {
        match self.tokens.peek() {
            Some(Ok(token)) => Some(token),
            _ => None,
        }
    }

    /// The next token as a symbol.
    fn symbol(&mut self) -> Result<Symbol, ErrorKind> {
        match self.next_token()? {
            Token::Symbol(symbol) => Ok(symbol),
            _ => Err(ErrorKind::from(ParseError::ExpectedSymbol)),
        }
    }

    /// The next token as a closing parenthesis.
    fn close(&mut self) -> Result<(), ErrorKind> {
        match self.next_token()? {
            Token::RightParen => Ok(()),
            _ => Err(ErrorKind::from(ParseError::ExpectedClose)),
        }
    }

    /// formula := symbol | '(' expr ')'
    fn formula(&mut self) -> Result<Formula, ErrorKind> {
        match self.next_token()? {
            Token::Symbol(symbol) => Ok(Formula::Predicate(symbol, Vec::default())),

            Token::LeftParen => {
                let expr = self.expr()?;
                self.close()?;
                Ok(expr)
            }

            _ => Err(ErrorKind::from(ParseError::UnexpectedToken)),
        }
    }

    /// The body of a parenthesised formula.
    fn expr(&mut self) -> Result<Formula, ErrorKind> {
        match self.next_token()? {
            Token::Forall => {
                let v = self.symbol()?;
                Ok(Formula::forall(v, self.formula()?))
            }

            Token::Exists => {
                let v = self.symbol()?;
                Ok(Formula::exists(v, self.formula()?))
            }

            Token::And => {
                let a = self.formula()?;
                Ok(Formula::and(a, self.formula()?))
            }

            Token::Or => {
                let a = self.formula()?;
                Ok(Formula::or(a, self.formula()?))
            }

            Token::Implies => {
                let a = self.formula()?;
                Ok(Formula::implies(a, self.formula()?))
            }

            Token::Not => Ok(Formula::negation(self.formula()?)),

            Token::Contradiction => Ok(Formula::Contradiction),

            Token::Symbol(predicate) => {
                let mut args = Vec::default();
                loop {
                    match self.peek_token() {
                        Some(Token::RightParen) | None => break,
                        Some(_) => args.push(self.term()?),
                    }
                }
                Ok(Formula::Predicate(predicate, args))
            }

            _ => Err(ErrorKind::from(ParseError::UnexpectedToken)),
        }
    }

    /// term := symbol | '(' symbol term* ')'
    fn term(&mut self) -> Result<Term, ErrorKind> {
        match self.next_token()? {
            Token::Symbol(symbol) => Ok(Term::variable(symbol)),

            Token::LeftParen => {
                let symbol = self.symbol()?;

                let mut args = Vec::default();
                loop {
                    match self.peek_token() {
                        Some(Token::RightParen) | None => break,
                        Some(_) => args.push(self.term()?),
                    }
                }

                self.close()?;
                Ok(Term::application(symbol, args))
            }

            _ => Err(ErrorKind::from(ParseError::UnexpectedToken)),
        }
    }
}
