//! `create-tslib` entrypoint.
//!
//! Scaffolds a TypeScript library project in an empty directory, then
//! installs its development dependencies.

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use std::io::IsTerminal;
use tslib_scaffold_cli::cli::Cli;
use tslib_scaffold_cli::deps::SystemCommandExecutor;
use tslib_scaffold_cli::error::{EXIT_SUCCESS, Result, ScaffoldError};
use tslib_scaffold_cli::output::{Reporter, TerminalReporter};
use tslib_scaffold_cli::pipeline::{Collaborators, Outcome, RunOptions, report_failure, scaffold};
use tslib_scaffold_cli::prompt::{AnswerSource, FileAnswers, TerminalPrompter};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let stderr = std::io::stderr();
    let color = !cli.no_color && stderr.is_terminal();
    colored::control::set_override(color);
    let mut reporter = TerminalReporter::new(stderr, color);

    let run_result = run(&cli, &mut reporter);
    let exit_code = exit_code_for_run_result(run_result, &mut reporter);
    if exit_code != EXIT_SUCCESS {
        std::process::exit(exit_code);
    }
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(cli.log_level());
    builder.parse_default_env();
    if builder.try_init().is_err() {
        debug!("logger already installed");
    }
}

fn run(cli: &Cli, reporter: &mut dyn Reporter) -> Result<Outcome> {
    let options = RunOptions {
        root: target_dir(cli)?,
        dry_run: cli.dry_run,
        skip_install: cli.skip_install,
        quiet: cli.quiet,
    };
    debug!("scaffolding into {}", options.root);

    let mut source = answer_source(cli);
    let executor = SystemCommandExecutor::new(options.root.clone());
    scaffold(
        &options,
        Collaborators {
            answers: source.as_mut(),
            executor: &executor,
            reporter,
        },
    )
}

/// The answers file when one was given, otherwise the terminal prompts.
fn answer_source(cli: &Cli) -> Box<dyn AnswerSource> {
    match &cli.answers {
        Some(path) => Box::new(FileAnswers::new(path.clone())),
        None => Box::new(TerminalPrompter::new()),
    }
}

/// Resolves `--dir` against the current directory.
fn target_dir(cli: &Cli) -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|path| ScaffoldError::NonUtf8Path { path })?;
    Ok(match &cli.dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}

fn exit_code_for_run_result(result: Result<Outcome>, reporter: &mut dyn Reporter) -> i32 {
    match result {
        Ok(outcome) => {
            debug!("run finished: {outcome:?}");
            EXIT_SUCCESS
        }
        Err(err) => {
            report_failure(reporter, &err);
            err.exit_code()
        }
    }
}
