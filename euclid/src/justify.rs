//! Checking whether formulas follow from knowledge.

use crate::{predicate, Knowledge};
use core::borrow::Borrow;
use core::fmt::Display;
use core::hash::Hash;
use euclid_parse::{CompoundSymbol, Formula, Justification, Term};

/// Return true if a formula follows from knowledge under the given justification.
///
/// * `definition` establishes that a term belongs to a category,
///   either because this was recorded before, or
///   because the term is a number for which the category holds as a
///   [built-in predicate](crate::predicate).
/// * `substitution` establishes that two syntactically different terms are equal,
///   by replacing terms with terms known to be equivalent.
/// * Without justification, a formula must follow from recorded knowledge alone.
///
/// A conditional formula follows if its consequent follows from
/// the knowledge extended by its hypothesis.
/// All other combinations, such as an equality by definition, do not follow.
///
/// ~~~
/// # use euclid::{follows, Knowledge};
/// # use euclid_parse::{Formula, Justification, Parse};
/// let mut kb = Knowledge::new();
/// kb.record(&Formula::parse_str("x = 2 y")?);
///
/// let f = Formula::parse_str("x = 2 (y)")?;
/// assert!(follows(&kb, &f, None));
/// assert!(follows(&kb, &f, Some(Justification::Substitution)));
/// assert!(!follows(&kb, &f, Some(Justification::Definition)));
///
/// let f = Formula::parse_str("x is an even integer")?;
/// assert!(!follows(&kb, &f, Some(Justification::Definition)));
/// # Ok::<_, euclid_parse::Error>(())
/// ~~~
pub fn follows<S>(kb: &Knowledge<S>, formula: &Formula<S>, justification: Option<Justification>) -> bool
where
    S: Borrow<str> + Clone + Eq + Hash + Display,
{
    use Justification::{Definition, Substitution};
    let holds = match (formula, justification) {
        (Formula::Conditional(hypothesis, consequent), _) => {
            let mut kb = kb.clone();
            kb.record(hypothesis);
            follows(&kb, consequent, justification)
        }
        (Formula::IsA(tm, c), None) => kb.has_category(tm, c),
        (Formula::IsA(tm, c), Some(Definition)) => kb.has_category(tm, c) || builtin(kb, tm, c),
        (Formula::Equality(l, r), None) => kb.are_equivalent(l, r),
        (Formula::Equality(l, r), Some(Substitution)) => {
            l.unparenthesized() != r.unparenthesized() && kb.are_equivalent(l, r)
        }
        (Formula::IsA(..), Some(Substitution)) | (Formula::Equality(..), Some(Definition)) => false,
    };
    log::trace!("follows: {} -> {}", formula, holds);
    holds
}

/// Return true if the term resolves to a number for which the category holds.
fn builtin<S>(kb: &Knowledge<S>, tm: &Term<S>, category: &CompoundSymbol<S>) -> bool
where
    S: Borrow<str> + Clone + Eq + Hash + Display,
{
    kb.numbers(tm).any(|n| predicate::holds(category, n))
}
