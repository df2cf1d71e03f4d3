#![no_std]
#![forbid(unsafe_code)]

//! Validation of proofs written in structured English.
//!
//! This is the library underlying the `eucheck` proof checker.
//!
//! # Usage
//!
//! A proof consists of a statement to be proven, followed by
//! a sequence of clauses that establish the statement.
//! For example:
//!
//! ~~~ text
//! Prove: if n is an even integer then m is an even integer.
//! n is an even integer.
//! Let m = n.
//! By definition m is an even integer.
//! Therefore m is an even integer.
//! ~~~
//!
//! How is a proof validated?
//! The proof text is parsed to a [`euclid_parse::Proof`].
//! We then verify that the first and last clauses of the proof
//! correspond to the statement.
//! Finally, we walk through the clauses, keeping track of
//! everything established so far in a [`Knowledge`] base.
//! Every clause must [follow](follows) from the knowledge
//! accumulated by the clauses before it,
//! possibly citing a justification such as `by definition`.
//!
//! ~~~
//! # use euclid::{check, Verdict};
//! let proof = "
//!     Prove: if n is an even integer then m is an even integer.
//!     n is an even integer.
//!     Let m = n.
//!     By definition m is an even integer.
//!     Therefore m is an even integer.";
//! assert_eq!(check(proof), Verdict::Accepted);
//! ~~~
//!
//! # Organisation
//!
//! * The [`Knowledge`] base stores equivalences and categories of terms.
//! * The [`follows`] function decides whether a formula follows from knowledge.
//! * The [`predicate`] module contains the categories that
//!   can be established for numbers by definition.
//! * The [`validate()`] function walks through the clauses of a whole proof.

extern crate alloc;

mod error;
mod justify;
mod knowledge;
pub mod predicate;
mod validate;

pub use error::{Error, SemanticError};
pub use justify::follows;
pub use knowledge::Knowledge;
pub use validate::{check, validate, validate_str, Verdict};
