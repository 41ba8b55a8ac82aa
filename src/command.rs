//! Command execution for subtestify.
//!
//! A run is a strict sequential pipeline:
//!
//! 1. **Read**: load the Go source file named on the command line
//! 2. **Parse**: build a syntax tree with tree-sitter, aborting on any
//!    syntax error
//! 3. **Extract**: classify top-level test functions and capture their
//!    bodies, skipping (and logging) names that do not classify
//! 4. **Aggregate**: fold subtests into groups in first-seen order
//! 5. **Render**: run the tera template of the selected output mode
//! 6. **Write**: create the standalone file, append to the input, or print
//!
//! Any failure other than a per-declaration classification error aborts the
//! run. No cleanup of partially written output is attempted.

/// Regroup a Go test file.
pub mod generate;
