//! Answers file loader.
//!
//! An answers file is a TOML preset that replaces the interactive prompts:
//!
//! ```toml
//! name = "My Cool Lib"
//! out_dir = "build"
//! git = true
//!
//! [advanced]
//! module = "ES6"
//! strict = false
//! jest = true
//! ```
//!
//! The presence of the `[advanced]` table means advanced mode. Keys missing
//! from it fall back to [`AdvancedAnswers::default`]; unknown keys are
//! rejected so a typo never silently becomes a default.

use crate::answers::{
    AdvancedAnswers, BasicAnswers, DEFAULT_OUT_DIR, ModuleFormat, OutDir, ProjectName,
};
use crate::error::AnswerError;
use camino::Utf8Path;
use serde::Deserialize;

/// Parsed contents of an answers file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnswersFile {
    /// Project name.
    pub name: String,
    /// Output directory, `dist` when omitted.
    #[serde(default = "AnswersFile::default_out_dir")]
    pub out_dir: String,
    /// Whether to initialise git.
    #[serde(default)]
    pub git: bool,
    /// Advanced answers; `None` means the defaults apply.
    #[serde(default)]
    pub advanced: Option<AdvancedSection>,
}

/// The `[advanced]` table of an answers file.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AdvancedSection {
    /// Module format.
    pub module: ModuleFormat,
    /// Strict mode.
    pub strict: bool,
    /// Prettier toggle.
    pub prettier: bool,
    /// ESLint toggle.
    pub eslint: bool,
    /// Jest toggle.
    pub jest: bool,
}

impl Default for AdvancedSection {
    fn default() -> Self {
        let defaults = AdvancedAnswers::default();
        Self {
            module: defaults.module_format,
            strict: defaults.strict,
            prettier: defaults.use_prettier,
            eslint: defaults.use_eslint,
            jest: defaults.use_jest,
        }
    }
}

impl From<AdvancedSection> for AdvancedAnswers {
    fn from(section: AdvancedSection) -> Self {
        Self {
            module_format: section.module,
            strict: section.strict,
            use_prettier: section.prettier,
            use_eslint: section.eslint,
            use_jest: section.jest,
        }
    }
}

impl AnswersFile {
    fn default_out_dir() -> String {
        DEFAULT_OUT_DIR.to_owned()
    }

    /// Parse answers from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is malformed or does not match the
    /// schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold::config::AnswersFile;
    ///
    /// let answers = AnswersFile::parse("name = \"demo\"")?;
    /// assert_eq!(answers.out_dir, "dist");
    /// assert!(answers.advanced.is_none());
    /// # Ok::<(), toml::de::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse an answers file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::ReadAnswers`] if the file cannot be read and
    /// [`AnswerError::ParseAnswers`] if it is not a valid answers file.
    pub fn load(path: &Utf8Path) -> Result<Self, AnswerError> {
        let text = std::fs::read_to_string(path).map_err(|source| AnswerError::ReadAnswers {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text).map_err(|source| AnswerError::ParseAnswers {
            path: path.to_owned(),
            source,
        })
    }

    /// Validate the basic answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or output directory is invalid.
    pub fn basic_answers(&self) -> Result<BasicAnswers, AnswerError> {
        Ok(BasicAnswers {
            name: ProjectName::new(&self.name)?,
            out_dir: OutDir::new(&self.out_dir)?,
            git_init: self.git,
            advanced_mode: self.advanced.is_some(),
        })
    }

    /// Advanced answers from the `[advanced]` table, or the defaults.
    #[must_use]
    pub fn advanced_answers(&self) -> AdvancedAnswers {
        self.advanced.map(AdvancedAnswers::from).unwrap_or_default()
    }
}
