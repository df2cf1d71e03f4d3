//! Parser for the Euclid proof language
//!
//! Example usage:
//!
//! ~~~
//! use euclid_parse::{Error, Formula, Parse, Proof};
//!
//! let proof = "Prove: if x = 1 then x = x. x = 1. Therefore x = x.";
//! let proof = Proof::parse_str(proof)?;
//! assert!(matches!(proof.statement, Formula::Conditional(..)));
//! assert_eq!(proof.clauses.len(), 2);
//! # Ok::<_, Error>(())
//! ~~~
#![no_std]

extern crate alloc;

mod clause;
mod formula;
pub mod lex;
mod number;
pub mod parse;
mod symb;
mod term;

pub use clause::{Binding, Clause, ClauseKind, Justification, Proof, Where};
pub use formula::Formula;
pub use lex::{LexError, Pos, Token, TokenKind};
pub use number::Number;
pub use parse::{Error, Parse, Tokens};
pub use symb::CompoundSymbol;
pub use term::Term;

/// Lazily tokenise a string.
pub fn lex(s: &str) -> lex::Lexer<'_> {
    lex::Lexer::new(s)
}

/// Parse a proof.
pub fn parse(s: &str) -> Result<Proof<&str>, Error> {
    Proof::parse_str(s)
}
