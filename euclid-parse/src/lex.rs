//! Tokenisation of proof text.

use crate::Number;
use core::fmt::{self, Display};
use logos::Logos;

/// Position of a token in the source, 1-based.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

impl Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Line bookkeeping carried by the lexer.
#[derive(Debug)]
pub struct Lines {
    line: usize,
    /// byte offset where the current line starts
    start: usize,
}

impl Default for Lines {
    fn default() -> Self {
        Self { line: 1, start: 0 }
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(extras = Lines)]
enum Lexeme<'s> {
    #[regex(r"[0-9]+(\.[0-9]+)?", number)]
    Number(Number),

    #[token("=")]
    Eq,

    #[token(":")]
    Colon,

    #[token("(")]
    LPar,

    #[token(")")]
    RPar,

    #[token(".")]
    Dot,

    #[regex("[A-Za-z][A-Za-z0-9_]*")]
    Word(&'s str),

    #[token("\n", newline)]
    Newline,

    #[regex(r"[ ,\t\r\f]+", logos::skip)]
    Space,

    #[error]
    Error,
}

fn number<'s>(lex: &mut logos::Lexer<'s, Lexeme<'s>>) -> Option<Number> {
    lex.slice().parse().ok().filter(Number::is_finite)
}

fn newline<'s>(lex: &mut logos::Lexer<'s, Lexeme<'s>>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.start = lex.span().end;
    logos::Skip
}

/// Kind of a token.
///
/// The spellings `is` and `an` are lexed as [`Be`](Self::Be) and [`A`](Self::A),
/// so that the parser never has to distinguish them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Prove,
    Let,
    Where,
    By,
    Be,
    A,
    Definition,
    Substitution,
    If,
    Then,
    Therefore,
    Symbol,
    Number,
    Eq,
    Colon,
    LPar,
    RPar,
    Dot,
}

const KEYWORDS: [(&str, TokenKind); 13] = [
    ("prove", TokenKind::Prove),
    ("let", TokenKind::Let),
    ("where", TokenKind::Where),
    ("by", TokenKind::By),
    ("be", TokenKind::Be),
    ("is", TokenKind::Be),
    ("a", TokenKind::A),
    ("an", TokenKind::A),
    ("definition", TokenKind::Definition),
    ("substitution", TokenKind::Substitution),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("therefore", TokenKind::Therefore),
];

impl TokenKind {
    /// Return the keyword denoted by a word, ignoring case.
    pub fn keyword(word: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(kw, _)| kw.eq_ignore_ascii_case(word))
            .map(|(_, kind)| *kind)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Prove => "PROVE",
            Self::Let => "LET",
            Self::Where => "WHERE",
            Self::By => "BY",
            Self::Be => "BE",
            Self::A => "A",
            Self::Definition => "DEFINITION",
            Self::Substitution => "SUBSTITUTION",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Therefore => "THEREFORE",
            Self::Symbol => "SYMBOL",
            Self::Number => "NUMBER",
            Self::Eq => "EQ",
            Self::Colon => "COLON",
            Self::LPar => "LPAREN",
            Self::RPar => "RPAREN",
            Self::Dot => "DOT",
        };
        s.fmt(f)
    }
}

/// Payload of a token: its source text, or the value of a number literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'s> {
    Text(&'s str),
    Number(Number),
}

#[derive(Clone, Debug)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub value: Value<'s>,
    pub pos: Pos,
}

impl<'s> Token<'s> {
    /// Construct a token without a meaningful position.
    pub fn new(kind: TokenKind, value: Value<'s>) -> Self {
        let pos = Pos::default();
        Self { kind, value, pos }
    }
}

/// Tokens are equal if their kinds and values are, regardless of position.
impl<'s> PartialEq for Token<'s> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

/// Text that no token pattern matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub text: alloc::string::String,
    pub pos: Pos,
}

impl Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} unexpected on {}", self.text, self.pos)
    }
}

/// Lazy, single-pass tokeniser.
pub struct Lexer<'s>(logos::Lexer<'s, Lexeme<'s>>);

impl<'s> Lexer<'s> {
    pub fn new(s: &'s str) -> Self {
        Self(Lexeme::lexer(s))
    }

    fn pos(&self) -> Pos {
        let lines = &self.0.extras;
        let column = self.0.span().start - lines.start + 1;
        Pos {
            line: lines.line,
            column,
        }
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Result<Token<'s>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.0.next()?;
        let pos = self.pos();
        let text = self.0.slice();
        let (kind, value) = match lexeme {
            Lexeme::Number(n) => (TokenKind::Number, Value::Number(n)),
            Lexeme::Word(w) => (TokenKind::keyword(w).unwrap_or(TokenKind::Symbol), Value::Text(w)),
            Lexeme::Eq => (TokenKind::Eq, Value::Text(text)),
            Lexeme::Colon => (TokenKind::Colon, Value::Text(text)),
            Lexeme::LPar => (TokenKind::LPar, Value::Text(text)),
            Lexeme::RPar => (TokenKind::RPar, Value::Text(text)),
            Lexeme::Dot => (TokenKind::Dot, Value::Text(text)),
            // skipped by their callbacks
            Lexeme::Newline | Lexeme::Space | Lexeme::Error => {
                let text = text.into();
                return Some(Err(LexError { text, pos }));
            }
        };
        Some(Ok(Token { kind, value, pos }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn lex(s: &str) -> Vec<Token> {
        Lexer::new(s).collect::<Result<_, _>>().unwrap()
    }

    fn text(kind: TokenKind, s: &str) -> Token {
        Token::new(kind, Value::Text(s))
    }

    #[test]
    fn short_sentence() {
        use TokenKind::*;
        let tokens = lex("Let x be an integer.");
        assert_eq!(
            tokens,
            [
                text(Let, "Let"),
                text(Symbol, "x"),
                text(Be, "be"),
                text(A, "an"),
                text(Symbol, "integer"),
                text(Dot, "."),
            ]
        );
    }

    #[test]
    fn keywords() {
        let kinds: Vec<_> = lex("prove let where by be is a an Definition SUBSTITUTION if then therefore")
            .into_iter()
            .map(|tok| tok.kind)
            .collect();
        use TokenKind::*;
        let expected = [
            Prove,
            Let,
            Where,
            By,
            Be,
            Be,
            A,
            A,
            Definition,
            Substitution,
            If,
            Then,
            Therefore,
        ];
        assert_eq!(kinds, expected);

        let kind = |s| lex(s)[0].kind;
        assert_eq!(kind("is"), kind("be"));
        assert_eq!(kind("an"), kind("a"));
    }

    #[test]
    fn numbers() {
        let tokens = lex("0 1 697 24.837");
        let num = |n| Token::new(TokenKind::Number, Value::Number(n));
        assert_eq!(
            tokens,
            [
                num(Number::Int(0)),
                num(Number::Int(1)),
                num(Number::Int(697)),
                num(Number::Frac(24.837)),
            ]
        );
    }

    #[test]
    fn terminated_number() {
        let kinds: Vec<_> = lex("x = 1.").into_iter().map(|tok| tok.kind).collect();
        use TokenKind::*;
        assert_eq!(kinds, [Symbol, Eq, Number, Dot]);
    }

    #[test]
    fn positions() {
        let tokens = lex("Prove: x = x.\n  x = x,\n");
        let pos = |line, column| Pos { line, column };
        assert_eq!(tokens[0].pos, pos(1, 1));
        assert_eq!(tokens[2].pos, pos(1, 8));
        assert_eq!(tokens[6].pos, pos(2, 3));
        assert_eq!(tokens[8].pos, pos(2, 7));
    }

    #[test]
    fn unexpected() {
        let err = Lexer::new("x = 1.\nx + y")
            .find_map(Result::err)
            .unwrap();
        assert_eq!(err.text, "+");
        assert_eq!(err.pos, Pos { line: 2, column: 3 });
    }

    #[test]
    fn huge_numbers() {
        let mut digits = "1".repeat(400);
        let err = Lexer::new(&digits).find_map(Result::err).unwrap();
        assert_eq!(err.pos, Pos { line: 1, column: 1 });

        digits += ".5";
        let err = Lexer::new(&digits).find_map(Result::err).unwrap();
        assert_eq!(err.text, digits);
    }
}
