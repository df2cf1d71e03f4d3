//! Sequential proof processing.

use crate::{process, Error, Opt, PathRead};

pub fn consume<I>(iter: I, opt: &Opt) -> Vec<Result<String, Error>>
where
    I: Iterator<Item = Result<PathRead, Error>>,
{
    iter.map(|pr| process(pr?, opt)).collect()
}
