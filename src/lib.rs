//! collocate - bigram collocation statistics
//!
//! Ranks the bigrams containing a target word by five association measures
//! (t-test, chi-square, log-likelihood ratio, PMI, MI) and filters the
//! hypothesis-test rankings by significance.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod measures;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod significance;
pub mod template;

pub use error::{CollocateError, CollocateResult};
