mod error;
mod opt;
pub mod par;
mod path_read;
pub mod seq;
mod stage;

pub use error::Error;
pub use opt::Opt;
pub use path_read::{PathRead, PathReads};
pub use stage::Stage;

/// Exit code for invalid command-line arguments.
pub const USAGE: u8 = 1;
/// Exit code if a proof is rejected or a file cannot be read.
pub const FAILURE: u8 = 2;

/// Return the exit code for the results of processing files.
pub fn exit_code(results: &[Result<String, Error>]) -> u8 {
    if results.iter().all(Result::is_ok) {
        0
    } else {
        FAILURE
    }
}

/// Parse and validate the proof contained in a file.
///
/// Return the name of the file if the proof is accepted.
pub fn process(pr: PathRead, opt: &Opt) -> Result<String, Error> {
    let PathRead { path, read } = pr;
    if opt.omits(Stage::Parse) {
        return Ok(path);
    }

    let proof = match euclid_parse::parse(&read) {
        Ok(proof) => proof,
        Err(e) => return Err(Error::Euclid(path, e.into())),
    };
    log::info!("Parsed {} with {} clauses", path, proof.clauses.len());

    if opt.omits(Stage::Check) {
        return Ok(path);
    }
    match euclid::validate(&proof) {
        Ok(()) => Ok(path),
        Err(e) => Err(Error::Euclid(path, e)),
    }
}

/// Process a stream of files, in parallel if requested.
///
/// The results are in the same order as the files.
pub fn consume<I>(iter: I, opt: &Opt) -> Vec<Result<String, Error>>
where
    I: Iterator<Item = Result<PathRead, Error>> + Send,
{
    if opt.jobs.is_some() {
        par::consume(iter, opt)
    } else {
        seq::consume(iter, opt)
    }
}
