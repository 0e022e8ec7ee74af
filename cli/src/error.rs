//! Error types for the scaffolder CLI.
//!
//! Each variant maps to one stage of the scaffold pipeline and to a distinct
//! process exit code, so scripts can tell a non-empty directory from a failed
//! install without parsing messages.

use camino::Utf8PathBuf;
use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;
use tslib_scaffold::error::{AnswerError, PlanError};

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failures outside the pipeline stages.
pub const EXIT_OTHER: i32 = 1;
/// Exit code when the target directory is unusable.
pub const EXIT_PRECONDITION: i32 = 2;
/// Exit code when answers could not be collected.
pub const EXIT_ANSWERS: i32 = 3;
/// Exit code when writing the project files failed.
pub const EXIT_WRITE: i32 = 4;
/// Exit code when installing dependencies failed.
pub const EXIT_INSTALL: i32 = 5;

/// Errors that can occur while scaffolding a project.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The target directory already has entries.
    #[error("Folder \"{path}\" is not empty !")]
    PreconditionFailed {
        /// Target directory.
        path: Utf8PathBuf,
        /// Number of entries found.
        entries: usize,
    },

    /// The target directory could not be listed.
    #[error("cannot read target directory {path}")]
    TargetUnreadable {
        /// Target directory.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The interactive prompt was cancelled or the terminal failed.
    #[error("prompt aborted")]
    PromptAborted {
        /// The underlying terminal error.
        #[source]
        source: std::io::Error,
    },

    /// The answers file could not be read or its answers are invalid.
    #[error(transparent)]
    Answers(#[from] AnswerError),

    /// The file plan could not be rendered or is malformed.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Writing a planned artifact failed.
    #[error("failed to create {path}")]
    WriteFailed {
        /// Absolute path of the artifact that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An external tool is not on `PATH`.
    #[error("{tool} not found on PATH")]
    ToolNotFound {
        /// The missing executable.
        tool: String,
        /// The lookup error.
        #[source]
        source: which::Error,
    },

    /// An external tool could not be started.
    #[error("failed to run {tool}")]
    CommandSpawn {
        /// The executable that failed to start.
        tool: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An install step exited unsuccessfully.
    #[error("{tool} exited unsuccessfully: {message}")]
    InstallFailed {
        /// The tool that failed.
        tool: &'static str,
        /// Captured standard error, trimmed.
        message: String,
    },

    /// The target directory path is not valid UTF-8.
    #[error("target directory {} is not valid UTF-8", path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Test stub received an unexpected or mismatched command invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

impl ScaffoldError {
    /// Process exit code for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold_cli::error::{EXIT_INSTALL, ScaffoldError};
    ///
    /// let err = ScaffoldError::InstallFailed {
    ///     tool: "npm",
    ///     message: "E404".to_owned(),
    /// };
    /// assert_eq!(err.exit_code(), EXIT_INSTALL);
    /// ```
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PreconditionFailed { .. } | Self::TargetUnreadable { .. } => EXIT_PRECONDITION,
            Self::PromptAborted { .. } | Self::Answers(_) => EXIT_ANSWERS,
            Self::WriteFailed { .. } => EXIT_WRITE,
            Self::ToolNotFound { .. } | Self::CommandSpawn { .. } | Self::InstallFailed { .. } => {
                EXIT_INSTALL
            }
            Self::Plan(_) | Self::NonUtf8Path { .. } | Self::Io(_) => EXIT_OTHER,
            #[cfg(any(test, feature = "test-support"))]
            Self::StubMismatch { .. } => EXIT_OTHER,
        }
    }

    /// Returns true for failures raised by the dependency install stage.
    #[must_use]
    pub fn is_install_failure(&self) -> bool {
        self.exit_code() == EXIT_INSTALL
    }

    /// The error message followed by each underlying cause, joined by `: `.
    #[must_use]
    pub fn with_causes(&self) -> String {
        let mut text = self.to_string();
        let mut source = StdError::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !text.ends_with(&cause_text) {
                text.push_str(": ");
                text.push_str(&cause_text);
            }
            source = cause.source();
        }
        text
    }
}

/// Result type alias using [`ScaffoldError`].
pub type Result<T> = std::result::Result<T, ScaffoldError>;
