//! Error types for answer validation and file planning.
//!
//! Derivation itself cannot fail once answers are validated, so the errors
//! here cover the two edges of the core: turning raw input into answers, and
//! rendering the derived configuration into a file plan.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while validating or loading answers.
#[derive(Debug, Error)]
pub enum AnswerError {
    /// The project name was empty or whitespace only.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The output directory normalised to an empty path.
    #[error("output directory must not be empty")]
    EmptyOutDir,

    /// The output directory was an absolute path.
    #[error("output directory {path} must be relative to the project root")]
    AbsoluteOutDir {
        /// Output directory as entered.
        path: String,
    },

    /// The output directory contained a `..` component.
    #[error("output directory {path} must not leave the project root")]
    OutDirEscapesRoot {
        /// Output directory as entered.
        path: String,
    },

    /// The output directory is, or lies under, a generated file.
    #[error("output directory {path} collides with generated file {file}")]
    OutDirCollides {
        /// Output directory as entered.
        path: String,
        /// The generated file in the way.
        file: &'static str,
    },

    /// A module format other than `CommonJS` or `ES6` was requested.
    #[error("unknown module format {value}; expected CommonJS or ES6")]
    UnknownModuleFormat {
        /// The rejected value.
        value: String,
    },

    /// The answers file could not be read.
    #[error("failed to read answers file {path}")]
    ReadAnswers {
        /// Path to the answers file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The answers file was not valid TOML or did not match the schema.
    #[error("invalid answers file {path}: {source}")]
    ParseAnswers {
        /// Path to the answers file.
        path: Utf8PathBuf,
        /// The underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised while turning a derived configuration into a file plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A JSON artifact could not be serialised.
    #[error("failed to render {file}")]
    Render {
        /// Name of the artifact being rendered.
        file: &'static str,
        /// The underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },

    /// A file entry was listed before the directory that contains it.
    #[error("{path} is planned before its parent directory {parent}")]
    ParentNotPlanned {
        /// The file entry.
        path: Utf8PathBuf,
        /// The directory that should precede it.
        parent: Utf8PathBuf,
    },

    /// The same path appears twice in the plan.
    #[error("{path} is planned more than once")]
    DuplicateEntry {
        /// The repeated path.
        path: Utf8PathBuf,
    },
}
