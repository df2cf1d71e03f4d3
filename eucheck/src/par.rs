//! Parallel proof processing.
//!
//! Every proof is validated with its own knowledge,
//! so proofs can be checked independently of each other.

use crate::{process, Error, Opt, PathRead};
use rayon::iter::{ParallelBridge, ParallelIterator};

pub fn consume<I>(iter: I, opt: &Opt) -> Vec<Result<String, Error>>
where
    I: Iterator<Item = Result<PathRead, Error>> + Send,
{
    let mut results: Vec<_> = iter
        .enumerate()
        .par_bridge()
        .map(|(i, pr)| (i, pr.and_then(|pr| process(pr, opt))))
        .collect();
    // restore the order of the input files
    results.sort_by_key(|(i, _)| *i);
    results.into_iter().map(|(_, result)| result).collect()
}
