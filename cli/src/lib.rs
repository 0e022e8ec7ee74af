//! Scaffolder CLI library.
//!
//! This crate drives the `create-tslib` binary: it checks the target
//! directory, collects answers, writes the file plan produced by
//! `tslib_scaffold` and installs the development dependencies. It can be
//! consumed programmatically for testing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`deps`] - Dependency installation through a command executor
//! - [`error`] - Error types and exit codes
//! - [`materialize`] - Writing a file plan to disk
//! - [`output`] - User-facing messages and dry-run rendering
//! - [`pipeline`] - Stage orchestration
//! - [`precondition`] - Empty target directory check
//! - [`progress`] - Install spinner
//! - [`prompt`] - Interactive and file-based answer sources

pub mod cli;
pub mod deps;
pub mod error;
pub mod materialize;
pub mod output;
pub mod pipeline;
pub mod precondition;
pub mod progress;
pub mod prompt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
