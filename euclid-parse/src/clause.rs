use crate::{CompoundSymbol, Formula, Pos, Term};
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Rule cited by a clause to claim that its formula is established.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Justification {
    Definition,
    Substitution,
}

impl Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition => "definition".fmt(f),
            Self::Substitution => "substitution".fmt(f),
        }
    }
}

/// What a `let` clause binds a symbol to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding<S> {
    /// `let x = t`
    Term(Term<S>),
    /// `let x be a c`
    Category(CompoundSymbol<S>),
}

/// `where x is a c`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Where<S> {
    pub symbol: S,
    pub category: CompoundSymbol<S>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClauseKind<S> {
    /// Introduce a symbol
    Let(S, Binding<S>),
    /// Establish a formula, possibly citing a justification
    Formula {
        justification: Option<Justification>,
        formula: Formula<S>,
        where_clause: Option<Where<S>>,
    },
    /// Conclude a formula
    Therefore(Formula<S>),
}

/// Sentence of a proof body, together with the position of its first token.
#[derive(Clone, Debug)]
pub struct Clause<S> {
    pub kind: ClauseKind<S>,
    pub pos: Pos,
}

impl<S> Clause<S> {
    /// Return the formula stated by the clause, if any.
    ///
    /// `let` clauses declare, but do not state anything.
    pub fn formula(&self) -> Option<&Formula<S>> {
        match &self.kind {
            ClauseKind::Let(..) => None,
            ClauseKind::Formula { formula, .. } | ClauseKind::Therefore(formula) => Some(formula),
        }
    }
}

/// Clauses are equal if their contents are, regardless of position.
impl<S: PartialEq> PartialEq for Clause<S> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<S: Eq> Eq for Clause<S> {}

/// Statement to prove, followed by the clauses proving it.
#[derive(Clone, Debug)]
pub struct Proof<S> {
    pub statement: Formula<S>,
    /// position of the statement
    pub pos: Pos,
    pub clauses: Vec<Clause<S>>,
}

impl<S: PartialEq> PartialEq for Proof<S> {
    fn eq(&self, other: &Self) -> bool {
        self.statement == other.statement && self.clauses == other.clauses
    }
}

impl<S: Eq> Eq for Proof<S> {}

impl<S: Display> Display for ClauseKind<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(x, Binding::Term(tm)) => write!(f, "let {} = {}.", x, tm),
            Self::Let(x, Binding::Category(c)) => write!(f, "let {} be a {}.", x, c),
            Self::Formula {
                justification,
                formula,
                where_clause,
            } => {
                justification
                    .iter()
                    .try_for_each(|j| write!(f, "by {} ", j))?;
                formula.fmt(f)?;
                where_clause
                    .iter()
                    .try_for_each(|w| write!(f, " where {} is a {}", w.symbol, w.category))?;
                write!(f, ".")
            }
            Self::Therefore(formula) => write!(f, "therefore {}.", formula),
        }
    }
}

impl<S: Display> Display for Clause<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl<S: Display> Display for Proof<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "prove: {}.", self.statement)?;
        self.clauses.iter().try_for_each(|c| writeln!(f, "{}", c))
    }
}
