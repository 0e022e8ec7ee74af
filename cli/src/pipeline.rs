//! Scaffold pipeline orchestration.
//!
//! Runs the stages in order: precondition check, answer collection,
//! derivation, materialisation and dependency install. Each stage returns a
//! `Result` and the first failure ends the run. Answers, commands and
//! console output are injected so the whole pipeline runs in tests without a
//! terminal or child processes.

use crate::deps::{CommandExecutor, install_command_line, install_dependencies};
use crate::error::{Result, ScaffoldError};
use crate::materialize::materialize;
use crate::output::{
    FILES_CREATED, INSTALL_FAILED, PROJECT_CREATED, Reporter, dry_run_lines,
};
use crate::precondition::ensure_empty;
use crate::progress::{INSTALL_MESSAGE, Spinner};
use crate::prompt::{AnswerSource, collect_answers};
use camino::Utf8PathBuf;
use log::info;
use tslib_scaffold::{FilePlan, derive};

/// Settings for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Project directory.
    pub root: Utf8PathBuf,
    /// Report the plan instead of writing it.
    pub dry_run: bool,
    /// Skip the dependency install stage.
    pub skip_install: bool,
    /// Suppress the spinner.
    pub quiet: bool,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Files were written and dependencies installed.
    Created,
    /// Files were written; the install stage was skipped.
    CreatedWithoutInstall,
    /// Nothing was written.
    DryRun,
}

/// Collaborators the pipeline talks to.
pub struct Collaborators<'a> {
    /// Where answers come from.
    pub answers: &'a mut dyn AnswerSource,
    /// Runs install commands.
    pub executor: &'a dyn CommandExecutor,
    /// Receives user-facing messages.
    pub reporter: &'a mut dyn Reporter,
}

/// Run the scaffold pipeline.
///
/// # Errors
///
/// Returns the first stage failure; see [`ScaffoldError::exit_code`] for how
/// each maps to an exit status.
pub fn scaffold(options: &RunOptions, collaborators: Collaborators<'_>) -> Result<Outcome> {
    let Collaborators {
        answers,
        executor,
        reporter,
    } = collaborators;

    ensure_empty(&options.root)?;
    let (basic, advanced) = collect_answers(answers)?;
    let config = derive(&basic, &advanced);
    let plan = FilePlan::from_config(&config)?;
    let packages = config.install_packages();

    if options.dry_run {
        let install = (!options.skip_install)
            .then(|| install_command_line(&packages, config.git_init));
        for line in dry_run_lines(&plan, install.as_deref()) {
            reporter.info(&line);
        }
        return Ok(Outcome::DryRun);
    }

    materialize(&options.root, &plan)?;
    reporter.success(FILES_CREATED);

    if options.skip_install {
        info!("dependency install skipped");
        reporter.success(PROJECT_CREATED);
        return Ok(Outcome::CreatedWithoutInstall);
    }

    let spinner = Spinner::start(INSTALL_MESSAGE, options.quiet);
    let installed = install_dependencies(executor, &packages, config.git_init);
    spinner.finish();
    installed?;

    reporter.success(PROJECT_CREATED);
    Ok(Outcome::Created)
}

/// Report a failed run.
///
/// Install failures get the fixed headline followed by the cause; every
/// other failure is a single `[Failed]` line.
pub fn report_failure(reporter: &mut dyn Reporter, err: &ScaffoldError) {
    if err.is_install_failure() {
        reporter.error(INSTALL_FAILED);
        reporter.info(&err.with_causes());
    } else {
        reporter.error(&err.with_causes());
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
