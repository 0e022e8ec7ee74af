//! CLI argument definitions for `create-tslib`.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use camino::Utf8PathBuf;
use clap::Parser;
use log::LevelFilter;

/// Scaffold a TypeScript library project.
#[derive(Parser, Debug, Clone)]
#[command(name = "create-tslib")]
#[command(version, about)]
#[command(long_about = concat!(
    "Scaffold a TypeScript library project.\n\n",
    "Run in an empty directory. The scaffolder asks for a project name, an ",
    "output directory, whether to initialise git and, optionally, advanced ",
    "settings (module format, strict mode, Prettier, ESLint, Jest). It then ",
    "writes package.json, tsconfig.json and the selected tool configurations, ",
    "and installs the development dependencies with npm.",
))]
#[command(after_help = concat!(
    "ANSWERS FILE:\n",
    "  name = \"My Cool Lib\"\n",
    "  out_dir = \"dist\"\n",
    "  git = true\n",
    "  [advanced]          # optional; presence enables advanced mode\n",
    "  module = \"ES6\"\n",
    "  jest = true\n\n",
    "EXIT CODES:\n",
    "  0  success\n",
    "  2  target directory missing or not empty\n",
    "  3  prompt aborted or invalid answers file\n",
    "  4  a project file could not be written\n",
    "  5  dependency installation failed\n\n",
    "EXAMPLES:\n",
    "  Scaffold interactively in the current directory:\n",
    "    $ create-tslib\n\n",
    "  Scaffold non-interactively into ./my-lib without installing:\n",
    "    $ create-tslib -C my-lib --answers answers.toml --skip-install\n\n",
    "  Preview the files for a preset:\n",
    "    $ create-tslib --answers answers.toml --dry-run",
))]
pub struct Cli {
    /// Project directory [default: current directory].
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<Utf8PathBuf>,

    /// Read answers from a TOML file instead of prompting.
    #[arg(long, value_name = "FILE")]
    pub answers: Option<Utf8PathBuf>,

    /// Show the files and install command without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Write the project files but do not install dependencies.
    #[arg(long)]
    pub skip_install: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            dir: None,
            answers: None,
            dry_run: false,
            skip_install: false,
            quiet: false,
            verbosity: 0,
            no_color: false,
        }
    }
}

impl Cli {
    /// Log level selected by `-v` flags; `warn` by default.
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use log::LevelFilter;
    /// use tslib_scaffold_cli::cli::Cli;
    ///
    /// assert_eq!(Cli::parse_from(["create-tslib"]).log_level(), LevelFilter::Warn);
    /// assert_eq!(Cli::parse_from(["create-tslib", "-vv"]).log_level(), LevelFilter::Debug);
    /// ```
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
