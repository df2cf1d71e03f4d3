use alloc::vec::Vec;
use core::fmt::{self, Display};
use itertools::Itertools;

/// Category name consisting of one or more words, such as "even integer".
///
/// Compound symbols are compared word by word, respecting order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompoundSymbol<S>(pub Vec<S>);

impl<S> CompoundSymbol<S> {
    pub fn new(first: S) -> Self {
        Self(Vec::from([first]))
    }

    pub fn push(&mut self, word: S) {
        self.0.push(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &S> {
        self.0.iter()
    }
}

impl<S: Display> Display for CompoundSymbol<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().format(" "))
    }
}
