//! Answer collection.
//!
//! Answers come from an [`AnswerSource`]: the interactive
//! [`TerminalPrompter`] or a TOML answers file read by [`FileAnswers`].
//! Advanced answers are only requested when the basic answers ask for
//! advanced mode; otherwise the default set applies.

use crate::error::{Result, ScaffoldError};
use camino::{Utf8Path, Utf8PathBuf};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::{debug, info};
use tslib_scaffold::answers::DEFAULT_OUT_DIR;
use tslib_scaffold::config::AnswersFile;
use tslib_scaffold::{AdvancedAnswers, BasicAnswers, ModuleFormat, OutDir, ProjectName};

/// A source of scaffold answers.
pub trait AnswerSource {
    /// Collect the basic answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the answers cannot be obtained.
    fn basic(&mut self) -> Result<BasicAnswers>;

    /// Collect the advanced answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the answers cannot be obtained.
    fn advanced(&mut self) -> Result<AdvancedAnswers>;
}

/// Collect a complete answer set from `source`.
///
/// # Errors
///
/// Propagates the source's error.
pub fn collect_answers(source: &mut dyn AnswerSource) -> Result<(BasicAnswers, AdvancedAnswers)> {
    let basic = source.basic()?;
    let advanced = if basic.advanced_mode {
        source.advanced()?
    } else {
        AdvancedAnswers::default()
    };
    info!(
        "collected answers for {} (advanced: {})",
        basic.name, basic.advanced_mode
    );
    Ok((basic, advanced))
}

/// Interactive prompts on the terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl TerminalPrompter {
    /// Create a prompter with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn yes_no(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(aborted)
    }
}

fn aborted(err: dialoguer::Error) -> ScaffoldError {
    ScaffoldError::PromptAborted {
        source: std::io::Error::other(err),
    }
}

impl AnswerSource for TerminalPrompter {
    fn basic(&mut self) -> Result<BasicAnswers> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Project name")
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                ProjectName::new(input).map(|_| ()).map_err(|err| err.to_string())
            })
            .interact_text()
            .map_err(aborted)?;
        let out_dir: String = Input::with_theme(&self.theme)
            .with_prompt("Output dir")
            .default(DEFAULT_OUT_DIR.to_owned())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                OutDir::new(input).map(|_| ()).map_err(|err| err.to_string())
            })
            .interact_text()
            .map_err(aborted)?;
        let git_init = self.yes_no("Init git", true)?;
        let advanced_mode = self.yes_no("Advanced config", true)?;

        Ok(BasicAnswers {
            name: ProjectName::new(&name)?,
            out_dir: OutDir::new(&out_dir)?,
            git_init,
            advanced_mode,
        })
    }

    fn advanced(&mut self) -> Result<AdvancedAnswers> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Module type")
            .items(&ModuleFormat::ALL)
            .default(0)
            .interact()
            .map_err(aborted)?;
        let module_format = ModuleFormat::ALL.get(index).copied().unwrap_or_default();
        let strict = self.yes_no("Strict mode", true)?;
        let use_prettier = self.yes_no("Use Prettier", true)?;
        let use_eslint = self.yes_no("Use ESLint", true)?;
        let use_jest = self.yes_no("Install Jest", false)?;

        Ok(AdvancedAnswers {
            module_format,
            strict,
            use_prettier,
            use_eslint,
            use_jest,
        })
    }
}

/// Answers read from a TOML answers file.
///
/// The file is read on first use, so a missing file is reported after the
/// target directory check rather than before it.
#[derive(Debug, Clone)]
pub struct FileAnswers {
    path: Utf8PathBuf,
    file: Option<AnswersFile>,
}

impl FileAnswers {
    /// Answers to be read from `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// Wrap an already parsed answers file.
    #[must_use]
    pub fn from_file(file: AnswersFile) -> Self {
        Self {
            path: Utf8PathBuf::new(),
            file: Some(file),
        }
    }

    /// Path the answers are read from; empty for parsed answers.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn loaded(&mut self) -> Result<&AnswersFile> {
        let file = match self.file.take() {
            Some(file) => file,
            None => {
                debug!("reading answers from {}", self.path);
                AnswersFile::load(&self.path)?
            }
        };
        Ok(self.file.insert(file))
    }
}

impl AnswerSource for FileAnswers {
    fn basic(&mut self) -> Result<BasicAnswers> {
        Ok(self.loaded()?.basic_answers()?)
    }

    fn advanced(&mut self) -> Result<AdvancedAnswers> {
        Ok(self.loaded()?.advanced_answers())
    }
}
