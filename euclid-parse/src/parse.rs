//! Recursive descent parsing of proofs.
//!
//! The grammar is:
//!
//! ~~~ text
//! proof            := "PROVE" ":" formula "." clause+
//! clause           := let-clause | therefore-clause | formula-clause
//! let-clause       := "LET" SYMBOL ("BE" "A" compound-symbol | "=" term) "."
//! therefore-clause := "THEREFORE" formula "."
//! formula-clause   := ("BY" justification)? formula ("WHERE" SYMBOL "BE" "A" compound-symbol)? "."
//! formula          := "IF" formula "THEN" formula
//!                   | term "=" term
//!                   | term "BE" "A" compound-symbol
//! term             := SYMBOL | NUMBER | NUMBER SYMBOL | NUMBER "(" term ")" | "(" term ")"
//! justification    := "DEFINITION" | "SUBSTITUTION"
//! compound-symbol  := SYMBOL+
//! ~~~
//!
//! A proof without clauses is accepted by the parser.

use crate::lex::{LexError, Lexer, Pos, Token, TokenKind, Value};
use crate::{Binding, Clause, ClauseKind, CompoundSymbol, Formula, Justification, Proof, Term, Where};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::iter::Peekable;
use itertools::Itertools;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Lex(LexError),
    /// the next token is not of any of the expected kinds
    Expected {
        expected: &'static [TokenKind],
        found: TokenKind,
        pos: Pos,
    },
    /// input ended while a construct was still open
    PrematureEnd { expected: &'static [TokenKind] },
    /// input continued after a complete construct
    Trailing { found: TokenKind, pos: Pos },
}

impl Error {
    /// Return the position where the error was detected, if known.
    pub fn pos(&self) -> Option<Pos> {
        match self {
            Self::Lex(e) => Some(e.pos),
            Self::Expected { pos, .. } | Self::Trailing { pos, .. } => Some(*pos),
            Self::PrematureEnd { .. } => None,
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Expected {
                expected,
                found,
                pos,
            } => write!(
                f,
                "got {}, expected {}, {}",
                found,
                expected.iter().format(" or "),
                pos
            ),
            Self::PrematureEnd { .. } => write!(f, "premature end of input"),
            Self::Trailing { found, pos } => {
                write!(f, "got {}, expected end of input, {}", found, pos)
            }
        }
    }
}

type Result<T> = core::result::Result<T, Error>;

/// Cursor over the tokens of a text, with one token of lookahead.
pub struct Tokens<'s>(Peekable<Lexer<'s>>);

impl<'s> Tokens<'s> {
    pub fn new(s: &'s str) -> Self {
        Self(Lexer::new(s).peekable())
    }

    /// Return the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<&Token<'s>>> {
        match self.0.peek() {
            Some(Ok(tok)) => Ok(Some(tok)),
            Some(Err(e)) => Err(Error::Lex(e.clone())),
            None => Ok(None),
        }
    }

    fn peek_kind(&mut self) -> Result<Option<TokenKind>> {
        Ok(self.peek()?.map(|tok| tok.kind))
    }

    /// Return true if the next token is of the given kind.
    pub fn next_is(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.peek_kind()? == Some(kind))
    }

    /// Consume the next token, if there is one.
    pub fn next(&mut self) -> Result<Option<Token<'s>>> {
        self.0.next().transpose().map_err(Error::Lex)
    }

    /// Consume the next token, failing if it is not one of the given kinds.
    pub fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Token<'s>> {
        match self.next()? {
            Some(tok) if expected.contains(&tok.kind) => Ok(tok),
            Some(tok) => Err(Error::Expected {
                expected,
                found: tok.kind,
                pos: tok.pos,
            }),
            None => Err(Error::PrematureEnd { expected }),
        }
    }

    /// Return the position of the next token, failing at the end of input.
    fn pos(&mut self, expected: &'static [TokenKind]) -> Result<Pos> {
        match self.peek()? {
            Some(tok) => Ok(tok.pos),
            None => Err(Error::PrematureEnd { expected }),
        }
    }

    fn symbol(&mut self) -> Result<&'s str> {
        let tok = self.expect(&[TokenKind::Symbol])?;
        match tok.value {
            Value::Text(s) => Ok(s),
            Value::Number(_) => Err(Error::Expected {
                expected: &[TokenKind::Symbol],
                found: TokenKind::Number,
                pos: tok.pos,
            }),
        }
    }
}

pub trait Parse<'s>: Sized {
    fn parse(tokens: &mut Tokens<'s>) -> Result<Self>;

    /// Parse the whole string, failing if anything remains.
    fn parse_str(s: &'s str) -> Result<Self> {
        let mut tokens = Tokens::new(s);
        let y = Self::parse(&mut tokens)?;
        match tokens.next()? {
            None => Ok(y),
            Some(tok) => Err(Error::Trailing {
                found: tok.kind,
                pos: tok.pos,
            }),
        }
    }
}

const TERM_START: &[TokenKind] = &[TokenKind::Symbol, TokenKind::Number, TokenKind::LPar];
const FORMULA_START: &[TokenKind] = &[
    TokenKind::If,
    TokenKind::Symbol,
    TokenKind::Number,
    TokenKind::LPar,
];
const CLAUSE_START: &[TokenKind] = &[
    TokenKind::Let,
    TokenKind::Therefore,
    TokenKind::By,
    TokenKind::If,
    TokenKind::Symbol,
    TokenKind::Number,
    TokenKind::LPar,
];

impl<'s> Parse<'s> for Proof<&'s str> {
    fn parse(tokens: &mut Tokens<'s>) -> Result<Self> {
        tokens.expect(&[TokenKind::Prove])?;
        tokens.expect(&[TokenKind::Colon])?;
        let pos = tokens.pos(FORMULA_START)?;
        let statement = Formula::parse(tokens)?;
        tokens.expect(&[TokenKind::Dot])?;

        let mut clauses = Vec::new();
        while tokens.peek()?.is_some() {
            clauses.push(Clause::parse(tokens)?)
        }
        Ok(Self {
            statement,
            pos,
            clauses,
        })
    }
}

impl<'s> Parse<'s> for Clause<&'s str> {
    fn parse(tokens: &mut Tokens<'s>) -> Result<Self> {
        let pos = tokens.pos(CLAUSE_START)?;
        let kind = match tokens.peek_kind()? {
            Some(TokenKind::Let) => ClauseKind::parse_let(tokens)?,
            Some(TokenKind::Therefore) => {
                tokens.next()?;
                ClauseKind::Therefore(Formula::parse(tokens)?)
            }
            _ => ClauseKind::parse_formula(tokens)?,
        };
        tokens.expect(&[TokenKind::Dot])?;
        Ok(Self { kind, pos })
    }
}

impl<'s> ClauseKind<&'s str> {
    fn parse_let(tokens: &mut Tokens<'s>) -> Result<Self> {
        tokens.expect(&[TokenKind::Let])?;
        let symbol = tokens.symbol()?;
        let binding = match tokens.expect(&[TokenKind::Be, TokenKind::Eq])?.kind {
            TokenKind::Eq => Binding::Term(Term::parse(tokens)?),
            _ => {
                tokens.expect(&[TokenKind::A])?;
                Binding::Category(CompoundSymbol::parse(tokens)?)
            }
        };
        Ok(Self::Let(symbol, binding))
    }

    fn parse_formula(tokens: &mut Tokens<'s>) -> Result<Self> {
        let justification = if tokens.next_is(TokenKind::By)? {
            tokens.next()?;
            Some(Justification::parse(tokens)?)
        } else {
            None
        };

        let formula = Formula::parse(tokens)?;

        let where_clause = if tokens.next_is(TokenKind::Where)? {
            tokens.next()?;
            let symbol = tokens.symbol()?;
            tokens.expect(&[TokenKind::Be])?;
            tokens.expect(&[TokenKind::A])?;
            let category = CompoundSymbol::parse(tokens)?;
            Some(Where { symbol, category })
        } else {
            None
        };

        Ok(Self::Formula {
            justification,
            formula,
            where_clause,
        })
    }
}

impl<'s> Parse<'s> for Justification {
    fn parse(tokens: &mut Tokens<'s>) -> Result<Self> {
        use TokenKind::{Definition, Substitution};
        match tokens.expect(&[Definition, Substitution])?.kind {
            Definition => Ok(Self::Definition),
            _ => Ok(Self::Substitution),
        }
    }
}

impl<'s> Parse<'s> for Formula<&'s str> {
    fn parse(tokens: &mut Tokens<'s>) -> Result<Self> {
        if tokens.next_is(TokenKind::If)? {
            tokens.next()?;
            let hypothesis = Self::parse(tokens)?;
            tokens.expect(&[TokenKind::Then])?;
            let consequent = Self::parse(tokens)?;
            return Ok(Self::conditional(hypothesis, consequent));
        }

        let tm = Term::parse(tokens)?;
        match tokens.expect(&[TokenKind::Eq, TokenKind::Be])?.kind {
            TokenKind::Eq => Ok(Self::Equality(tm, Term::parse(tokens)?)),
            _ => {
                tokens.expect(&[TokenKind::A])?;
                Ok(Self::IsA(tm, CompoundSymbol::parse(tokens)?))
            }
        }
    }
}

impl<'s> Parse<'s> for Term<&'s str> {
    fn parse(tokens: &mut Tokens<'s>) -> Result<Self> {
        let tok = tokens.expect(TERM_START)?;
        match (tok.kind, tok.value) {
            (TokenKind::Symbol, Value::Text(s)) => Ok(Self::Symbol(s)),
            (TokenKind::Number, Value::Number(n)) => match tokens.peek_kind()? {
                // `2 x`
                Some(TokenKind::Symbol) => Ok(Self::product(n, Self::Symbol(tokens.symbol()?))),
                // `2 (t)`
                Some(TokenKind::LPar) => {
                    tokens.next()?;
                    Ok(Self::product(n, Self::parse_and_rpar(tokens)?))
                }
                _ => Ok(Self::Number(n)),
            },
            // `(t)`
            (TokenKind::LPar, _) => Ok(Self::parenthesized(Self::parse_and_rpar(tokens)?)),
            (found, _) => Err(Error::Expected {
                expected: TERM_START,
                found,
                pos: tok.pos,
            }),
        }
    }
}

impl<'s> Term<&'s str> {
    /// Parse a term followed by a closing parenthesis ')'.
    fn parse_and_rpar(tokens: &mut Tokens<'s>) -> Result<Self> {
        let tm = Self::parse(tokens)?;
        tokens.expect(&[TokenKind::RPar])?;
        Ok(tm)
    }
}

impl<'s> Parse<'s> for CompoundSymbol<&'s str> {
    fn parse(tokens: &mut Tokens<'s>) -> Result<Self> {
        let mut c = Self::new(tokens.symbol()?);
        while tokens.next_is(TokenKind::Symbol)? {
            c.push(tokens.symbol()?)
        }
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;
    use alloc::string::ToString;

    type Tm = Term<&'static str>;

    fn sym(s: &'static str) -> Tm {
        Term::Symbol(s)
    }

    fn int(i: u64) -> Tm {
        Term::Number(Number::Int(i))
    }

    #[test]
    fn terms() -> Result<()> {
        assert_eq!(Term::parse_str("x")?, sym("x"));
        assert_eq!(Term::parse_str("42")?, int(42));
        assert_eq!(
            Term::parse_str("2 x")?,
            Term::product(Number::Int(2), sym("x"))
        );
        assert_eq!(
            Term::parse_str("2 (3 y)")?,
            Term::product(Number::Int(2), Term::product(Number::Int(3), sym("y")))
        );
        assert_eq!(Term::parse_str("((x))")?, Term::parenthesized(Term::parenthesized(sym("x"))));
        Ok(())
    }

    #[test]
    fn formulas() -> Result<()> {
        assert_eq!(
            Formula::parse_str("n is an even integer")?,
            Formula::IsA(sym("n"), CompoundSymbol(Vec::from(["even", "integer"])))
        );
        let eq = |l, r| Formula::Equality(l, r);
        assert_eq!(
            Formula::parse_str("if x = 1 then if y = x then y = 1")?,
            Formula::conditional(
                eq(sym("x"), int(1)),
                Formula::conditional(eq(sym("y"), sym("x")), eq(sym("y"), int(1)))
            )
        );
        Ok(())
    }

    #[test]
    fn clauses() -> Result<()> {
        let c = Clause::parse_str("By definition n = 2 k where k is an integer.")?;
        let ClauseKind::Formula { justification, where_clause, .. } = c.kind else {
            panic!("formula clause expected")
        };
        assert_eq!(justification, Some(Justification::Definition));
        assert_eq!(where_clause.map(|w| w.symbol), Some("k"));

        let c = Clause::parse_str("Let x = (y).")?;
        assert_eq!(
            c.kind,
            ClauseKind::Let("x", Binding::Term(Term::parenthesized(sym("y"))))
        );
        assert_eq!(c.formula(), None);
        Ok(())
    }

    #[test]
    fn proof() -> Result<()> {
        let text = "PROVE: if x = 1 then x = x.\n  x = 1.\n  THEREFORE x = x.\n";
        let proof = Proof::parse_str(text)?;
        assert!(matches!(proof.statement, Formula::Conditional(..)));
        assert_eq!(proof.clauses.len(), 2);
        assert_eq!(proof.clauses[1].pos, Pos { line: 3, column: 3 });

        // an empty body is syntactically fine
        assert_eq!(Proof::parse_str("Prove: x = x.")?.clauses.len(), 0);
        Ok(())
    }

    #[test]
    fn round_trip() -> Result<()> {
        let texts = [
            "Prove: if n is an even integer then 3 n is an even integer.\n\
             n is an even integer.\n\
             By definition n = 2 k where k is an integer.\n\
             Let m = 3 n.\n\
             By substitution m = 3 (2 k).\n\
             Let z be a number.\n\
             Therefore 3 n is an even integer.",
            "prove: (x) = 2 ((y)). x = 24.5. therefore x = 6.0.",
            "prove: x = 0.0000001. y = 12345678901234567890.5. therefore 0.5 x = y.",
        ];
        for text in texts {
            let proof = Proof::parse_str(text)?;
            let printed = proof.to_string();
            assert_eq!(Proof::parse_str(&printed)?, proof);
        }
        Ok(())
    }

    #[test]
    fn negative() {
        use TokenKind::*;
        let err = |s| Proof::parse_str(s).unwrap_err();

        assert_eq!(err(""), Error::PrematureEnd { expected: &[Prove] });
        assert_eq!(err("Prove: x = 1"), Error::PrematureEnd { expected: &[Dot] });
        assert!(matches!(
            err("Prove x = 1."),
            Error::Expected { found: Symbol, pos: Pos { line: 1, column: 7 }, .. }
        ));
        assert!(matches!(
            err("Prove: x is 1."),
            Error::Expected { expected: &[A], found: TokenKind::Number, .. }
        ));
        assert!(matches!(
            err("Prove: x = x. Let 1 = x."),
            Error::Expected { expected: &[Symbol], found: TokenKind::Number, .. }
        ));
        assert!(matches!(
            err("Prove: x = x. By induction x = x."),
            Error::Expected { expected: &[Definition, Substitution], found: Symbol, .. }
        ));
        assert!(matches!(err("Prove: x = x. x = y +"), Error::Lex(_)));
        assert_eq!(err("Prove: x = x. x = (y").to_string(), "premature end of input");
        assert_eq!(
            Term::parse_str("x y").unwrap_err(),
            Error::Trailing { found: Symbol, pos: Pos { line: 1, column: 3 } }
        );
    }
}
