use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use core::str::FromStr;

/// Number literal.
///
/// Literals without a decimal point are integers;
/// all others are fractional.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    Int(u64),
    Frac(f64),
}

impl Number {
    /// Return false for fractional literals too large to be represented.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Frac(f) => f.is_finite(),
        }
    }

    /// Return the remainder of the number modulo 2,
    /// provided that the number is integral.
    pub fn parity(&self) -> Option<u8> {
        match self {
            Self::Int(i) => Some((i % 2) as u8),
            Self::Frac(f) if f % 1.0 == 0.0 => Some((f % 2.0) as u8),
            Self::Frac(_) => None,
        }
    }
}

/// Numbers are compared by representation, never by numeric value:
/// `1` and `1.0` are different literals.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(i1), Self::Int(i2)) => i1 == i2,
            (Self::Frac(f1), Self::Frac(f2)) => f1.to_bits() == f2.to_bits(),
            _ => false,
        }
    }
}

// the lexer never produces NaN
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Int(i) => (0u8, i).hash(state),
            Self::Frac(f) => (1u8, f.to_bits()).hash(state),
        }
    }
}

impl FromStr for Number {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('.') {
            // a digit sequence with one inner dot always parses as float
            Ok(Self::Frac(s.parse().unwrap_or(f64::INFINITY)))
        } else {
            s.parse().map(Self::Int)
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => i.fmt(f),
            // `Display` never uses exponents, but drops the decimal point of integral floats
            Self::Frac(x) if x % 1.0 == 0.0 => write!(f, "{}.0", x),
            Self::Frac(x) => x.fmt(f),
        }
    }
}

#[test]
fn parity() {
    assert_eq!("4".parse::<Number>().map(|n| n.parity()), Ok(Some(0)));
    assert_eq!("7".parse::<Number>().map(|n| n.parity()), Ok(Some(1)));
    assert_eq!("6.0".parse::<Number>().map(|n| n.parity()), Ok(Some(0)));
    assert_eq!("6.5".parse::<Number>().map(|n| n.parity()), Ok(None));
    assert!("99999999999999999999999".parse::<Number>().is_err());
}

#[test]
fn display() {
    use alloc::string::{String, ToString};
    let show = |s: &str| s.parse::<Number>().map(|n| n.to_string());
    assert_eq!(show("42"), Ok(String::from("42")));
    assert_eq!(show("6.0"), Ok(String::from("6.0")));
    assert_eq!(show("24.837"), Ok(String::from("24.837")));
    assert_eq!(show("0.0000001"), Ok(String::from("0.0000001")));

    let large = show("12345678901234567890.5").unwrap();
    assert!(!large.contains('e') && large.ends_with(".0"));
    assert_eq!(large.parse::<Number>(), "12345678901234567890.5".parse());

    assert!(!Number::Frac(f64::INFINITY).is_finite());
}
