//! Validation of whole proofs.

use crate::error::{Error, SemanticError};
use crate::{follows, Knowledge};
use alloc::string::{String, ToString};
use core::borrow::Borrow;
use core::fmt::{self, Display};
use core::hash::Hash;
use euclid_parse::{Binding, Clause, ClauseKind, Formula, Pos, Proof, Term};

/// Outcome of checking a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected { message: String, pos: Option<Pos> },
}

impl From<Error> for Verdict {
    fn from(err: Error) -> Self {
        let pos = err.pos();
        let message = err.to_string();
        Self::Rejected { message, pos }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => "No errors were detected in the proof.".fmt(f),
            Self::Rejected { message, .. } => write!(f, "Error: {}", message),
        }
    }
}

/// Parse and validate a proof, yielding a verdict.
///
/// ~~~
/// # use euclid::{check, Verdict};
/// let proof = "Prove: if x = 1 then x = x. x = 1. Therefore x = x.";
/// assert_eq!(check(proof), Verdict::Accepted);
///
/// let Verdict::Rejected { message, .. } = check("Prove: x = 1.") else {
///     panic!("proof without body accepted")
/// };
/// assert_eq!(message, "the body of the proof is empty");
/// ~~~
pub fn check(text: &str) -> Verdict {
    match validate_str(text) {
        Ok(()) => Verdict::Accepted,
        Err(e) => e.into(),
    }
}

/// Parse and validate a proof.
pub fn validate_str(text: &str) -> Result<(), Error> {
    let proof = euclid_parse::parse(text)?;
    log::info!("Parsed proof with {} clauses", proof.clauses.len());
    validate(&proof)
}

/// Validate a parsed proof.
///
/// Fails at the first clause that is not established.
pub fn validate<S>(proof: &Proof<S>) -> Result<(), Error>
where
    S: Borrow<str> + Clone + Eq + Hash + Display,
{
    let assumed = boundary(proof)?;

    let mut kb = Knowledge::new();
    for (i, clause) in proof.clauses.iter().enumerate() {
        if i < assumed {
            log::info!("Assume {}", clause);
        } else {
            log::info!("Check {}", clause);
            check_clause(&kb, clause)?;
        }
        // every clause is validated using only the knowledge before it
        record_clause(&mut kb, clause);
    }
    Ok(())
}

/// Check that the first and last clauses match the statement,
/// returning the number of clauses that are assumed rather than checked.
///
/// For a statement `if h then c`, the first clause must state `h`, and
/// the last clause must state `c`.
/// Otherwise, the first clause must state the statement.
fn boundary<S: PartialEq>(proof: &Proof<S>) -> Result<usize, Error> {
    let (first, last) = match (proof.clauses.first(), proof.clauses.last()) {
        (Some(first), Some(last)) => (first, last),
        (None, None) => return Err(SemanticError::EmptyBody.into()),
        _ => return Err(Error::Internal("proof has a first, but no last clause")),
    };

    match &proof.statement {
        Formula::Conditional(hypothesis, consequent) => {
            if first.formula() != Some(&**hypothesis) {
                return Err(SemanticError::HypothesisMismatch(Some(first.pos)).into());
            }
            if last.formula() != Some(&**consequent) {
                return Err(SemanticError::ConsequentMismatch(Some(last.pos)).into());
            }
            // the hypothesis holds by assumption
            Ok(1)
        }
        statement => {
            if first.formula() != Some(statement) {
                return Err(SemanticError::StatementMismatch(Some(first.pos)).into());
            }
            Ok(0)
        }
    }
}

fn check_clause<S>(kb: &Knowledge<S>, clause: &Clause<S>) -> Result<(), Error>
where
    S: Borrow<str> + Clone + Eq + Hash + Display,
{
    let (formula, justification) = match &clause.kind {
        ClauseKind::Let(..) => return Ok(()),
        ClauseKind::Formula {
            formula,
            justification,
            ..
        } => (formula, *justification),
        ClauseKind::Therefore(formula) => (formula, None),
    };
    if follows(kb, formula, justification) {
        Ok(())
    } else {
        Err(SemanticError::DoesNotFollow(formula.to_string(), clause.pos).into())
    }
}

fn record_clause<S>(kb: &mut Knowledge<S>, clause: &Clause<S>)
where
    S: Clone + Eq + Hash + Display,
{
    match &clause.kind {
        ClauseKind::Let(x, Binding::Term(tm)) => kb.record_equivalence(&Term::Symbol(x.clone()), tm),
        ClauseKind::Let(x, Binding::Category(c)) => kb.record_category(&Term::Symbol(x.clone()), c),
        ClauseKind::Formula {
            formula,
            where_clause,
            ..
        } => {
            kb.record(formula);
            if let Some(w) = where_clause {
                kb.record_category(&Term::Symbol(w.symbol.clone()), &w.category)
            }
        }
        ClauseKind::Therefore(formula) => kb.record(formula),
    }
}
