use core::fmt::{self, Display};
use std::io;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    /// a file could not be read
    Io(String, io::Error),
    /// a proof was rejected
    Euclid(String, euclid::Error),
}

impl Error {
    /// Return the name of the file that the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::Io(path, _) | Self::Euclid(path, _) => path,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "cannot read {}: {}", path, e),
            // parse errors carry their position in the message
            Self::Euclid(_, e @ euclid::Error::Semantic(se)) => match se.pos() {
                Some(pos) => write!(f, "{}: {}", pos, e),
                None => e.fmt(f),
            },
            Self::Euclid(_, e) => e.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position() {
        let check = |text| euclid::validate_str(text).unwrap_err();

        let e = Error::Euclid("-".into(), check("Prove: x = 1.\ny = 1."));
        assert_eq!(
            e.to_string(),
            "line 2, column 1: the first statement of the proof \
             does not match the statement to be proven"
        );

        let e = Error::Euclid("-".into(), check("Prove: x = 1."));
        assert_eq!(e.to_string(), "the body of the proof is empty");

        let e = Error::Euclid("-".into(), check("Prove: x = 1.\nx = ."));
        assert!(e.to_string().ends_with("line 2, column 5"));
    }
}
