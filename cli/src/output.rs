//! User-facing console output.
//!
//! Messages go through a [`Reporter`] so the pipeline can be driven with a
//! recording reporter in tests. Diagnostics belong to the `log` facade and
//! never pass through here.

use colored::Colorize;
use std::io::Write;
use tslib_scaffold::FilePlan;

/// Confirmation printed after all files are written.
pub const FILES_CREATED: &str = "> Files created.";

/// Final confirmation of a successful scaffold.
pub const PROJECT_CREATED: &str = "[Success] Project created successfully. Happy coding!";

/// Headline for a failed dependency install.
pub const INSTALL_FAILED: &str = "Error when installing dependencies !";

/// Prefix for failure lines.
pub const FAILED_PREFIX: &str = "[Failed]";

/// Sink for the scaffolder's user-facing messages.
pub trait Reporter {
    /// Neutral progress information.
    fn info(&mut self, message: &str);
    /// A completed step.
    fn success(&mut self, message: &str);
    /// A failure; `message` excludes the `[Failed]` prefix.
    fn error(&mut self, message: &str);
}

/// Writes messages to a stream, optionally coloured.
pub struct TerminalReporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalReporter<W> {
    /// Create a reporter writing to `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold_cli::output::{Reporter, TerminalReporter};
    ///
    /// let mut reporter = TerminalReporter::new(Vec::new(), false);
    /// reporter.error("boom");
    /// assert_eq!(reporter.into_inner(), b"[Failed] boom\n");
    /// ```
    #[must_use]
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Recover the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if writeln!(self.out, "{line}").is_err() {
            // Best-effort output; ignore write failures.
        }
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn info(&mut self, message: &str) {
        self.write_line(message);
    }

    fn success(&mut self, message: &str) {
        if self.color {
            let line = message.green().to_string();
            self.write_line(&line);
        } else {
            self.write_line(message);
        }
    }

    fn error(&mut self, message: &str) {
        let line = format!("{FAILED_PREFIX} {message}");
        if self.color {
            let coloured = line.red().to_string();
            self.write_line(&coloured);
        } else {
            self.write_line(&line);
        }
    }
}

/// Lines describing a plan and install step for a dry run.
///
/// # Examples
///
/// ```
/// use tslib_scaffold_cli::output::dry_run_lines;
/// use tslib_scaffold::{FilePlan, PlanEntry};
///
/// let plan = FilePlan::from_entries(vec![PlanEntry::directory("src")]);
/// let lines = dry_run_lines(&plan, Some("npm i --save-dev typescript"));
/// assert!(lines.iter().any(|line| line.contains("src")));
/// ```
#[must_use]
pub fn dry_run_lines(plan: &FilePlan, install: Option<&str>) -> Vec<String> {
    let mut lines = vec!["Dry run - no files will be written".to_owned()];
    lines.push(String::new());
    lines.push("Files:".to_owned());
    for entry in plan {
        let suffix = if entry.is_directory() { "/" } else { "" };
        lines.push(format!("  {:<10} {}{suffix}", entry.kind.to_string(), entry.path));
    }
    lines.push(String::new());
    match install {
        Some(command) => lines.push(format!("Install: {command}")),
        None => lines.push("Install: skipped".to_owned()),
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tslib_scaffold::{EntryKind, PlanEntry};

    fn render(color: bool, emit: impl FnOnce(&mut TerminalReporter<Vec<u8>>)) -> String {
        let mut reporter = TerminalReporter::new(Vec::new(), color);
        emit(&mut reporter);
        String::from_utf8(reporter.into_inner()).expect("output is UTF-8")
    }

    #[test]
    fn plain_error_has_failed_prefix() {
        let text = render(false, |reporter| reporter.error(INSTALL_FAILED));
        assert_eq!(text, "[Failed] Error when installing dependencies !\n");
    }

    #[rstest]
    #[case::info(|r: &mut TerminalReporter<Vec<u8>>| r.info(FILES_CREATED), FILES_CREATED)]
    #[case::success(|r: &mut TerminalReporter<Vec<u8>>| r.success(PROJECT_CREATED), PROJECT_CREATED)]
    fn plain_messages_are_unadorned(
        #[case] emit: fn(&mut TerminalReporter<Vec<u8>>),
        #[case] expected: &str,
    ) {
        assert_eq!(render(false, emit), format!("{expected}\n"));
    }

    #[test]
    fn coloured_error_keeps_message_text() {
        colored::control::set_override(true);
        let text = render(true, |reporter| reporter.error("boom"));
        colored::control::unset_override();
        assert!(text.contains("[Failed] boom"));
        assert!(text.starts_with("\u{1b}["));
    }

    #[test]
    fn dry_run_lists_every_entry_and_install_command() {
        let plan = FilePlan::from_entries(vec![
            PlanEntry::file("package.json", EntryKind::Json, "{}".to_owned()),
            PlanEntry::directory("src"),
        ]);

        let lines = dry_run_lines(&plan, Some("npm i --save-dev typescript"));

        assert!(lines.contains(&"  json       package.json".to_owned()));
        assert!(lines.contains(&"  directory  src/".to_owned()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Install: npm i --save-dev typescript")
        );
    }
}
