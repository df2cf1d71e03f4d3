use crate::Stage;
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version)]
/// A checker for proofs written in structured English
pub struct Opt {
    /// Perform only operations until (excluding) the given stage.
    ///
    /// Possible values are: parse, check.
    #[arg(long)]
    pub omit: Option<Stage>,

    /// Read given number of files in advance (∞ if argument omitted)
    ///
    /// If this option is used, files are read and checked simultaneously.
    /// If this option is given with a number n, then
    /// maximally n files are read in advance.
    /// If this option is given without an extra argument, then
    /// the number of files read in advance is unbounded.
    #[arg(long, short = 'c')]
    pub channel_capacity: Option<Option<usize>>,

    /// Check concurrently
    ///
    /// If this option is used, proofs are checked in parallel.
    /// If this option is given with a number n, then
    /// maximally n proofs are concurrently checked.
    /// If this option is given without an extra argument, then
    /// the number of concurrently checked proofs is
    /// determined automatically from the number of CPUs.
    ///
    /// This option enables the reading of files in advance ("-c"),
    /// by default with an unbounded capacity.
    #[arg(long, short = 'j')]
    pub jobs: Option<Option<usize>>,

    /// Files to process, each containing a single proof
    ///
    /// To read from standard input, use "-" as file name,
    /// or give no file at all.
    #[arg(name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    pub fn omits(&self, stage: Stage) -> bool {
        self.omit.map_or(false, |omit| omit <= stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(args: &[&str]) -> Result<Opt, clap::Error> {
        Opt::try_parse_from(core::iter::once("eucheck").chain(args.iter().copied()))
    }

    #[test]
    fn omit() {
        let o = opt(&["--omit", "parse", "a.txt"]).unwrap();
        assert!(o.omits(Stage::Parse) && o.omits(Stage::Check));

        let o = opt(&["--omit", "check"]).unwrap();
        assert!(!o.omits(Stage::Parse) && o.omits(Stage::Check));
        assert!(o.files.is_empty());

        assert!(opt(&["--omit", "share"]).is_err());
    }

    #[test]
    fn jobs() {
        let o = opt(&["a.txt", "-j"]).unwrap();
        assert_eq!(o.jobs, Some(None));
        assert_eq!(o.channel_capacity, None);

        let o = opt(&["-j", "4", "-c", "2", "a.txt", "b.txt"]).unwrap();
        assert_eq!(o.jobs, Some(Some(4)));
        assert_eq!(o.channel_capacity, Some(Some(2)));
        assert_eq!(o.files.len(), 2);
    }

    #[test]
    fn usage() {
        assert!(opt(&["--frobnicate"]).is_err());
        assert!(opt(&["-j", "many"]).is_err());
    }
}
