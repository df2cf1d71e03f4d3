use crate::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;

/// Contents of a file, together with the name it was read from.
pub struct PathRead {
    pub path: String,
    pub read: String,
}

pub type PathReads<'a> = Box<dyn Iterator<Item = Result<PathRead, Error>> + Send + 'a>;

const STDIN: &str = "-";

impl PathRead {
    /// Read all of standard input.
    pub fn stdin() -> Result<Self, Error> {
        let path = String::from(STDIN);
        let mut read = String::new();
        match io::stdin().read_to_string(&mut read) {
            Ok(_) => Ok(Self { path, read }),
            Err(e) => Err(Error::Io(path, e)),
        }
    }

    /// Return stdin if no files given, else lazily read the files.
    pub fn from_pathbufs(files: &[PathBuf]) -> PathReads<'_> {
        if files.is_empty() {
            Box::new(std::iter::once_with(Self::stdin))
        } else {
            Box::new(files.iter().map(Self::try_from))
        }
    }
}

impl TryFrom<&PathBuf> for PathRead {
    type Error = Error;

    fn try_from(file: &PathBuf) -> Result<Self, Self::Error> {
        if file.as_os_str() == STDIN {
            return Self::stdin();
        }
        let path = file.display().to_string();
        log::info!("Read {}", path);
        match std::fs::read_to_string(file) {
            Ok(read) => Ok(Self { path, read }),
            Err(e) => Err(Error::Io(path, e)),
        }
    }
}

#[test]
fn missing() {
    let files = [PathBuf::from("does/not/exist.txt")];
    let reads: Vec<_> = PathRead::from_pathbufs(&files).collect();
    assert_eq!(reads.len(), 1);
    match &reads[0] {
        Err(e @ Error::Io(..)) => assert_eq!(e.path(), "does/not/exist.txt"),
        _ => panic!("missing file was read"),
    }
}
