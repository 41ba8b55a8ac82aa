//! Regroups flat Go test functions named `TestGroup_Case` into one parallel
//! test per group with a `t.Run` sub-test per case.
pub mod aggregator;
pub mod classifier;
pub mod cli;
pub mod command;
pub mod config;
mod error;
pub mod extractor;
mod path_helpers;
pub mod renderer;
pub mod types;

pub use command::generate::{Destination, GenerateOutcome, execute, generate};
pub use error::{Result, SubtestifyError};

#[cfg(test)]
pub mod test_helpers;
