use crate::{CompoundSymbol, Term};
use alloc::boxed::Box;
use core::fmt::{self, Display};

/// Statement about terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula<S> {
    /// `t1 = t2`
    Equality(Term<S>, Term<S>),
    /// `t is a c`
    IsA(Term<S>, CompoundSymbol<S>),
    /// `if h then c`
    Conditional(Box<Formula<S>>, Box<Formula<S>>),
}

impl<S> Formula<S> {
    pub fn conditional(hypothesis: Self, consequent: Self) -> Self {
        Self::Conditional(Box::new(hypothesis), Box::new(consequent))
    }
}

impl<S: Display> Display for Formula<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Equality(l, r) => write!(f, "{} = {}", l, r),
            Self::IsA(tm, c) => write!(f, "{} is a {}", tm, c),
            Self::Conditional(h, c) => write!(f, "if {} then {}", h, c),
        }
    }
}
