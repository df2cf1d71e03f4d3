//! Common error type.

use alloc::string::String;
use core::fmt::{self, Display};
use euclid_parse::{Error as ParseError, LexError, Pos};

/// Reason why a well-formed proof does not prove its statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SemanticError {
    EmptyBody,
    /// first clause does not state the hypothesis of a conditional statement
    HypothesisMismatch(Option<Pos>),
    /// last clause does not state the consequent of a conditional statement
    ConsequentMismatch(Option<Pos>),
    /// first clause does not state the (non-conditional) statement
    StatementMismatch(Option<Pos>),
    /// the formula of a clause is not established
    DoesNotFollow(String, Pos),
}

impl SemanticError {
    pub fn pos(&self) -> Option<Pos> {
        match self {
            Self::EmptyBody => None,
            Self::HypothesisMismatch(pos)
            | Self::ConsequentMismatch(pos)
            | Self::StatementMismatch(pos) => *pos,
            Self::DoesNotFollow(_, pos) => Some(*pos),
        }
    }
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBody => "the body of the proof is empty".fmt(f),
            Self::HypothesisMismatch(_) => "the first statement of the proof does not match \
                the hypothesis of the if statement to be proven"
                .fmt(f),
            Self::ConsequentMismatch(_) => {
                "the final statement of the proof does not match the consequent to be proven".fmt(f)
            }
            Self::StatementMismatch(_) => {
                "the first statement of the proof does not match the statement to be proven".fmt(f)
            }
            Self::DoesNotFollow(formula, _) => write!(f, "`{}` does not follow", formula),
        }
    }
}

/// Common error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
    Semantic(SemanticError),
    /// violation of an invariant that holds for every parsed proof
    Internal(&'static str),
}

impl Error {
    /// Return the source position that the error refers to, if any.
    pub fn pos(&self) -> Option<Pos> {
        match self {
            Self::Parse(e) => e.pos(),
            Self::Semantic(e) => e.pos(),
            Self::Internal(_) => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Parse(err.into())
    }
}

impl From<SemanticError> for Error {
    fn from(err: SemanticError) -> Self {
        Self::Semantic(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Semantic(e) => e.fmt(f),
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}
