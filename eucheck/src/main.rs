//! A checker for proofs written in structured English.

use clap::Parser;
use eucheck::{consume, exit_code, Error, Opt, PathRead, FAILURE, USAGE};
use std::process::ExitCode;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const ACCEPTED: &str = "No errors were detected in the proof.";

fn main() -> ExitCode {
    env_logger::init();

    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) => {
            let _ = e.print();
            // `--help` and `--version` also end up here
            return if e.use_stderr() {
                ExitCode::from(USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // if a precise number of parallel jobs has been given
    if let Some(Some(jobs)) = opt.jobs {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs);
        if let Err(e) = pool.build_global() {
            log::warn!("Could not set up thread pool: {}", e)
        }
    }

    // lazily read all specified files
    let mut iter = PathRead::from_pathbufs(&opt.files);

    let parallel = opt.jobs.is_some();

    // if parallel execution is enabled, assume an unbounded channel by default
    let channel = if parallel {
        Some(opt.channel_capacity.unwrap_or(None))
    } else {
        opt.channel_capacity
    };

    let results = match channel {
        Some(capacity) => {
            let (sender, receiver) = match capacity {
                Some(capacity) => flume::bounded(capacity),
                None => flume::unbounded(),
            };

            let optr = opt.clone();
            let consumer = std::thread::spawn(move || consume(receiver.into_iter(), &optr));

            // sending fails prematurely if consumption fails
            // in that case, get the error below
            let _ = iter.try_for_each(|pr| sender.send(pr));

            // signalise that we are done sending files
            // (otherwise the consumer will eventually wait forever)
            drop(sender);

            // wait for all files to be consumed
            match consumer.join() {
                Ok(results) => results,
                Err(_) => {
                    eprintln!("Error: proof checking thread panicked");
                    return ExitCode::from(FAILURE);
                }
            }
        }
        None => consume(iter, &opt),
    };

    report(&results, opt.files.len() > 1)
}

/// Print the outcome for every file, returning the exit code.
fn report(results: &[Result<String, Error>], show_path: bool) -> ExitCode {
    for result in results {
        match result {
            Ok(path) if show_path => println!("{}: {}", path, ACCEPTED),
            Ok(_) => println!("{}", ACCEPTED),
            Err(e) if show_path => eprintln!("Error: {}: {}", e.path(), e),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    ExitCode::from(exit_code(results))
}
