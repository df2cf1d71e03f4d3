use crate::Number;
use alloc::boxed::Box;
use core::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term<S> {
    Symbol(S),
    Number(Number),
    /// Multiplication with a literal coefficient (`2 x` or `2 (x)`)
    Product(Number, Box<Term<S>>),
    /// Parentheses around a term; they carry no meaning
    Parenthesized(Box<Term<S>>),
}

impl<S> Term<S> {
    pub fn product(coefficient: Number, factor: Self) -> Self {
        Self::Product(coefficient, Box::new(factor))
    }

    pub fn parenthesized(tm: Self) -> Self {
        Self::Parenthesized(Box::new(tm))
    }

    /// Remove all parentheses surrounding the term.
    pub fn strip(&self) -> &Self {
        match self {
            Self::Parenthesized(tm) => tm.strip(),
            tm => tm,
        }
    }

    /// Return the term without any parentheses, also inside products.
    pub fn unparenthesized(&self) -> Self
    where
        S: Clone,
    {
        match self.strip() {
            Self::Product(c, tm) => Self::product(*c, tm.unparenthesized()),
            tm => tm.clone(),
        }
    }
}

impl<S: Display> Display for Term<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Symbol(s) => s.fmt(f),
            Self::Number(n) => n.fmt(f),
            Self::Product(c, tm) => match &**tm {
                Self::Symbol(s) => write!(f, "{} {}", c, s),
                tm => write!(f, "{} ({})", c, tm),
            },
            Self::Parenthesized(tm) => write!(f, "({})", tm),
        }
    }
}
