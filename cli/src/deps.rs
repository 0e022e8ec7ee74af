//! Development dependency installation.
//!
//! Installs the derived dev dependencies with `npm` and, only when that
//! succeeds and git was requested, initialises a repository. Commands run
//! through [`CommandExecutor`] so the sequencing can be tested without
//! spawning processes.

use crate::error::{Result, ScaffoldError};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::process::{Command, Output};

/// Package manager used to install dev dependencies.
pub const PACKAGE_MANAGER: &str = "npm";

/// Version control tool used for `git init`.
pub const VCS: &str = "git";

/// Arguments that precede the package list.
pub const INSTALL_ARGS: [&str; 2] = ["i", "--save-dev"];

/// Abstraction for running external commands.
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor {
    /// Runs a command with arguments and returns the captured output.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be found or started.
    fn run<'a>(&self, cmd: &str, args: &[&'a str]) -> Result<Output>;
}

/// Executes commands on the host system inside the project directory.
///
/// The executable is looked up on `PATH` first so a missing tool is
/// reported by name, and so `npm.cmd` shims resolve on Windows.
///
/// # Examples
///
/// ```no_run
/// use tslib_scaffold_cli::deps::{CommandExecutor, SystemCommandExecutor};
///
/// let executor = SystemCommandExecutor::new("/tmp/my-lib");
/// let output = executor.run("npm", &["--version"])?;
/// assert!(output.status.success());
/// # Ok::<(), tslib_scaffold_cli::error::ScaffoldError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SystemCommandExecutor {
    working_dir: Utf8PathBuf,
}

impl SystemCommandExecutor {
    /// Create an executor that runs commands in `working_dir`.
    #[must_use]
    pub fn new(working_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Directory commands run in.
    #[must_use]
    pub fn working_dir(&self) -> &Utf8Path {
        &self.working_dir
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output> {
        let program = which::which(cmd).map_err(|source| ScaffoldError::ToolNotFound {
            tool: cmd.to_owned(),
            source,
        })?;
        debug!("resolved {cmd} to {}", program.display());
        Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|source| ScaffoldError::CommandSpawn {
                tool: cmd.to_owned(),
                source,
            })
    }
}

/// Arguments passed to the package manager for `packages`.
///
/// # Examples
///
/// ```
/// use tslib_scaffold_cli::deps::install_args;
///
/// assert_eq!(
///     install_args(&["typescript", "jest"]),
///     vec!["i", "--save-dev", "typescript", "jest"]
/// );
/// ```
#[must_use]
pub fn install_args<'a>(packages: &[&'a str]) -> Vec<&'a str> {
    INSTALL_ARGS
        .iter()
        .copied()
        .chain(packages.iter().copied())
        .collect()
}

/// Shell-style rendering of the install step, for dry runs and logs.
///
/// # Examples
///
/// ```
/// use tslib_scaffold_cli::deps::install_command_line;
///
/// assert_eq!(
///     install_command_line(&["typescript"], true),
///     "npm i --save-dev typescript && git init"
/// );
/// ```
#[must_use]
pub fn install_command_line(packages: &[&str], git_init: bool) -> String {
    let mut line = format!("{PACKAGE_MANAGER} {}", install_args(packages).join(" "));
    if git_init {
        line.push_str(" && ");
        line.push_str(VCS);
        line.push_str(" init");
    }
    line
}

/// Install `packages` as dev dependencies, then run `git init` if requested.
///
/// `git init` only runs after a successful install.
///
/// # Errors
///
/// Returns [`ScaffoldError::InstallFailed`] naming the tool whose command
/// exited unsuccessfully, or the executor's error if a command could not be
/// started.
pub fn install_dependencies(
    executor: &dyn CommandExecutor,
    packages: &[&str],
    git_init: bool,
) -> Result<()> {
    run_tool(executor, PACKAGE_MANAGER, &install_args(packages))?;
    if git_init {
        run_tool(executor, VCS, &["init"])?;
    }
    Ok(())
}

/// Runs one tool and maps a non-zero exit to [`ScaffoldError::InstallFailed`].
fn run_tool(executor: &dyn CommandExecutor, tool: &'static str, args: &[&str]) -> Result<()> {
    debug!("running {tool} {}", args.join(" "));
    let output = executor.run(tool, args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScaffoldError::InstallFailed {
            tool,
            message: stderr.trim().to_owned(),
        });
    }

    Ok(())
}
