//! Built-in predicates on number literals.
//!
//! | name      | holds for                       |
//! |-----------|---------------------------------|
//! | `even`    | integral literals divisible by 2 |
//! | `odd`     | integral literals not divisible by 2 |
//! | `integer` | integral literals               |
//! | `number`  | all literals                    |
//!
//! Predicate names are compared case-insensitively.

use core::borrow::Borrow;
use euclid_parse::{CompoundSymbol, Number};

type Predicate = fn(Number) -> bool;

const PREDICATES: [(&str, Predicate); 4] = [
    ("even", is_even),
    ("odd", is_odd),
    ("integer", is_integer),
    ("number", is_number),
];

fn is_even(n: Number) -> bool {
    n.parity() == Some(0)
}

fn is_odd(n: Number) -> bool {
    n.parity() == Some(1)
}

fn is_integer(n: Number) -> bool {
    n.parity().is_some()
}

fn is_number(_: Number) -> bool {
    true
}

/// Return the built-in predicate with the given name.
pub fn get(name: &str) -> Option<Predicate> {
    PREDICATES
        .iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(name))
        .map(|(_, f)| *f)
}

/// Return true if every word of the category is a built-in predicate
/// that holds for the number.
///
/// ~~~
/// # use euclid::predicate::holds;
/// # use euclid_parse::{CompoundSymbol, Number};
/// let even_integer = CompoundSymbol(Vec::from(["even", "integer"]));
/// assert!(holds(&even_integer, Number::Int(4)));
/// assert!(!holds(&even_integer, Number::Int(5)));
/// assert!(!holds(&CompoundSymbol(Vec::from(["prime"])), Number::Int(5)));
/// ~~~
pub fn holds<S: Borrow<str>>(category: &CompoundSymbol<S>, n: Number) -> bool {
    category
        .words()
        .all(|w| get(w.borrow()).map_or(false, |p| p(n)))
}

#[test]
fn parity() {
    let odd = |i| holds(&CompoundSymbol::new("ODD"), Number::Int(i));
    assert!(odd(1));
    assert!(odd(697));
    assert!(!odd(0));

    let even = |f| holds(&CompoundSymbol::new("even"), Number::Frac(f));
    assert!(even(4.0));
    assert!(!even(4.5));
    assert!(!even(3.0));
}
