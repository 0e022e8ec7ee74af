//! Configuration derivation and file planning for TypeScript library
//! scaffolds.
//!
//! This crate holds the pure part of the scaffolder: given the user's
//! answers it derives a package manifest, compiler configuration, optional
//! tool configurations and the ordered list of files to write. It performs
//! no terminal or process I/O; the `tslib-scaffold-cli` crate collects the
//! answers, writes the plan and installs dependencies.
//!
//! # Modules
//!
//! - [`answers`] - Answer sets and their validated newtypes
//! - [`config`] - TOML answers file loader
//! - [`derivation`] - Mapping answers to the derived configuration
//! - [`error`] - Answer and plan error types
//! - [`manifest`] - The generated `package.json`
//! - [`plan`] - Ordered file plan and JSON rendering
//! - [`tooling`] - Prettier, ESLint and Jest templates
//! - [`tsconfig`] - The generated `tsconfig.json`

pub mod answers;
pub mod config;
pub mod derivation;
pub mod error;
pub mod manifest;
pub mod plan;
pub mod tooling;
pub mod tsconfig;

pub use answers::{AdvancedAnswers, BasicAnswers, ModuleFormat, OutDir, ProjectName};
pub use derivation::{DerivedConfig, DevDependency, derive};
pub use plan::{EntryKind, FilePlan, PlanEntry};
