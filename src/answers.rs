//! Answer sets collected from the user.
//!
//! [`BasicAnswers`] and [`AdvancedAnswers`] are the only inputs to
//! [`crate::derivation::derive`]. The newtypes here enforce the invariants the
//! derivation relies on, so invalid input is rejected where it is collected.

use crate::derivation::normalize_out_dir;
use crate::error::AnswerError;
use crate::plan::GENERATED_FILES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output directory used when the user accepts the default.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// A non-empty project name, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a raw project name.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::EmptyProjectName`] when the name is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold::answers::ProjectName;
    ///
    /// let name = ProjectName::new("  My Lib ")?;
    /// assert_eq!(name.as_str(), "My Lib");
    /// assert!(ProjectName::new("   ").is_err());
    /// # Ok::<(), tslib_scaffold::error::AnswerError>(())
    /// ```
    pub fn new(raw: &str) -> Result<Self, AnswerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnswerError::EmptyProjectName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Get the project name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An output directory as entered, checked to normalise to a usable path.
///
/// The raw text is kept; normalisation happens during derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutDir(String);

impl OutDir {
    /// Validate a raw output directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory is empty after normalisation, is
    /// absolute, contains a `..` component, or would be created where a
    /// generated file goes.
    pub fn new(raw: &str) -> Result<Self, AnswerError> {
        let trimmed = raw.trim();
        let normalized = normalize_out_dir(trimmed);
        if normalized.is_empty() {
            return Err(AnswerError::EmptyOutDir);
        }
        if is_absolute(&normalized) {
            return Err(AnswerError::AbsoluteOutDir {
                path: trimmed.to_owned(),
            });
        }
        if normalized.split('/').any(|component| component == "..") {
            return Err(AnswerError::OutDirEscapesRoot {
                path: trimmed.to_owned(),
            });
        }
        if let Some(file) = colliding_file(&normalized) {
            return Err(AnswerError::OutDirCollides {
                path: trimmed.to_owned(),
                file,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Get the output directory as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OutDir {
    fn default() -> Self {
        Self(DEFAULT_OUT_DIR.to_owned())
    }
}

/// The generated file that `normalized` equals or lies beneath, if any.
fn colliding_file(normalized: &str) -> Option<&'static str> {
    let cleaned = normalized
        .split('/')
        .filter(|component| !component.is_empty() && *component != ".")
        .collect::<Vec<_>>()
        .join("/");
    GENERATED_FILES.into_iter().find(|file| {
        cleaned
            .strip_prefix(file)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

fn is_absolute(normalized: &str) -> bool {
    if normalized.starts_with('/') {
        return true;
    }
    // Windows drive prefix such as `C:` or `C:/out`.
    let mut chars = normalized.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic()
    )
}

/// Module system emitted by the TypeScript compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModuleFormat {
    /// `"module": "CommonJS"`.
    #[default]
    #[serde(rename = "CommonJS")]
    CommonJs,
    /// `"module": "ES6"`.
    #[serde(rename = "ES6")]
    Es6,
}

impl ModuleFormat {
    /// All formats in prompt order.
    pub const ALL: [Self; 2] = [Self::CommonJs, Self::Es6];

    /// The value written to `tsconfig.json`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommonJs => "CommonJS",
            Self::Es6 => "ES6",
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleFormat {
    type Err = AnswerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| AnswerError::UnknownModuleFormat {
                value: value.to_owned(),
            })
    }
}

/// Answers every run collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAnswers {
    /// Human-readable project name.
    pub name: ProjectName,
    /// Build output directory.
    pub out_dir: OutDir,
    /// Whether to initialise a git repository.
    pub git_init: bool,
    /// Whether the advanced questions were asked.
    pub advanced_mode: bool,
}

/// Answers to the advanced questions, or their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedAnswers {
    /// Compiler module format.
    pub module_format: ModuleFormat,
    /// Whether `strict` is enabled in `tsconfig.json`.
    pub strict: bool,
    /// Whether Prettier is configured.
    pub use_prettier: bool,
    /// Whether ESLint is configured.
    pub use_eslint: bool,
    /// Whether Jest is configured.
    pub use_jest: bool,
}

impl Default for AdvancedAnswers {
    /// The set substituted when the user skips advanced configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold::answers::{AdvancedAnswers, ModuleFormat};
    ///
    /// let answers = AdvancedAnswers::default();
    /// assert_eq!(answers.module_format, ModuleFormat::CommonJs);
    /// assert!(answers.strict && answers.use_prettier && answers.use_eslint);
    /// assert!(!answers.use_jest);
    /// ```
    fn default() -> Self {
        Self {
            module_format: ModuleFormat::CommonJs,
            strict: true,
            use_prettier: true,
            use_eslint: true,
            use_jest: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tab("\t")]
    fn blank_project_names_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            ProjectName::new(raw),
            Err(AnswerError::EmptyProjectName)
        ));
    }

    #[rstest]
    #[case::plain("dist", "dist")]
    #[case::trailing_slash("build/", "build/")]
    #[case::nested_windows("out\\lib", "out\\lib")]
    #[case::trimmed(" lib ", "lib")]
    fn usable_out_dirs_keep_raw_text(#[case] raw: &str, #[case] expected: &str) {
        let out_dir = OutDir::new(raw).expect("valid out dir");
        assert_eq!(out_dir.as_str(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_slash("/")]
    #[case::only_backslashes("\\\\")]
    fn out_dirs_that_normalise_to_nothing_are_rejected(#[case] raw: &str) {
        assert!(matches!(OutDir::new(raw), Err(AnswerError::EmptyOutDir)));
    }

    #[rstest]
    #[case::unix("/var/out")]
    #[case::drive("C:\\out")]
    fn absolute_out_dirs_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            OutDir::new(raw),
            Err(AnswerError::AbsoluteOutDir { .. })
        ));
    }

    #[test]
    fn parent_traversal_is_rejected() {
        assert!(matches!(
            OutDir::new("build/../../x"),
            Err(AnswerError::OutDirEscapesRoot { .. })
        ));
    }

    #[rstest]
    #[case::manifest("package.json", "package.json")]
    #[case::source_stub("src/index.ts", "src/index.ts")]
    #[case::under_source_stub("src/index.ts/x", "src/index.ts")]
    #[case::dotted("./tsconfig.json/", "tsconfig.json")]
    #[case::windows_separators("tests\\test.ts", "tests/test.ts")]
    fn out_dirs_on_generated_files_are_rejected(#[case] raw: &str, #[case] expected: &str) {
        assert!(matches!(
            OutDir::new(raw),
            Err(AnswerError::OutDirCollides { file, .. }) if file == expected
        ));
    }

    #[rstest]
    #[case::shares_source_dir("src")]
    #[case::beside_stub("src/lib")]
    #[case::prefix_only("package.json.d")]
    fn out_dirs_near_generated_files_are_accepted(#[case] raw: &str) {
        assert!(OutDir::new(raw).is_ok());
    }

    #[rstest]
    #[case("CommonJS", ModuleFormat::CommonJs)]
    #[case("commonjs", ModuleFormat::CommonJs)]
    #[case("ES6", ModuleFormat::Es6)]
    #[case(" es6 ", ModuleFormat::Es6)]
    fn module_format_parses_case_insensitively(#[case] raw: &str, #[case] expected: ModuleFormat) {
        assert_eq!(raw.parse::<ModuleFormat>().expect("known format"), expected);
    }

    #[test]
    fn unknown_module_format_is_rejected() {
        let err = "AMD".parse::<ModuleFormat>().expect_err("AMD is unsupported");
        assert!(err.to_string().contains("AMD"));
    }

    #[test]
    fn default_out_dir_is_dist() {
        assert_eq!(OutDir::default().as_str(), DEFAULT_OUT_DIR);
    }
}
