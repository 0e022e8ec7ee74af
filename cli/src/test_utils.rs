//! Shared test utilities for the scaffolder CLI.
//!
//! Available to unit tests and, through the `test-support` feature, to
//! integration tests.

use crate::deps::CommandExecutor;
use crate::error::{Result, ScaffoldError};
use crate::output::Reporter;
use crate::prompt::AnswerSource;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::process::{ExitStatus, Output};
use tslib_scaffold::{AdvancedAnswers, BasicAnswers};

/// Creates an `ExitStatus` from an exit code (Unix implementation).
#[cfg(unix)]
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;

    ExitStatus::from_raw(code << 8)
}

/// Creates an `ExitStatus` from an exit code (Windows implementation).
#[cfg(windows)]
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;

    ExitStatus::from_raw(code.unsigned_abs())
}

/// Creates a successful command `Output` with empty stdout and stderr.
#[must_use]
pub fn success_output() -> Output {
    Output {
        status: exit_status(0),
        stdout: Vec::new(),
        stderr: Vec::new(),
    }
}

/// Creates a failed command `Output` with the given stderr message.
#[must_use]
pub fn failure_output(stderr: &str) -> Output {
    Output {
        status: exit_status(1),
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

/// Represents an expected command invocation for testing.
#[derive(Debug)]
pub struct ExpectedCall {
    /// The command to execute (e.g., "npm").
    pub cmd: &'static str,
    /// The arguments to pass to the command.
    pub args: Vec<&'static str>,
    /// The result to return when this command is invoked.
    pub result: Result<Output>,
}

/// A stub implementation of `CommandExecutor` for testing.
///
/// Returns predefined results for an expected sequence of invocations and
/// reports [`ScaffoldError::StubMismatch`] for anything else.
#[derive(Debug)]
pub struct StubExecutor {
    expected: RefCell<VecDeque<ExpectedCall>>,
    received: RefCell<Vec<String>>,
}

impl StubExecutor {
    /// Creates a new `StubExecutor` with the given expected calls.
    #[must_use]
    pub fn new(expected: Vec<ExpectedCall>) -> Self {
        Self {
            expected: RefCell::new(expected.into()),
            received: RefCell::new(Vec::new()),
        }
    }

    /// A stub that expects no invocations at all.
    #[must_use]
    pub fn idle() -> Self {
        Self::new(Vec::new())
    }

    /// Command lines received so far, as `cmd arg...`.
    #[must_use]
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }

    /// Returns true when every expected invocation has been consumed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.expected.borrow().is_empty()
    }
}

impl CommandExecutor for StubExecutor {
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output> {
        let line = std::iter::once(cmd)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.received.borrow_mut().push(line.clone());

        let call = self
            .expected
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ScaffoldError::StubMismatch {
                message: format!("unexpected invocation: {line}"),
            })?;
        if call.cmd != cmd || call.args.as_slice() != args {
            return Err(ScaffoldError::StubMismatch {
                message: format!(
                    "expected {} {}, got {line}",
                    call.cmd,
                    call.args.join(" ")
                ),
            });
        }
        call.result
    }
}

/// An answer source returning fixed answers.
#[derive(Debug, Clone)]
pub struct ScriptedAnswers {
    basic: BasicAnswers,
    advanced: AdvancedAnswers,
    basic_asked: bool,
    advanced_asked: bool,
}

impl ScriptedAnswers {
    /// Answers that return `basic`, and `advanced` when asked.
    #[must_use]
    pub fn new(basic: BasicAnswers, advanced: AdvancedAnswers) -> Self {
        Self {
            basic,
            advanced,
            basic_asked: false,
            advanced_asked: false,
        }
    }

    /// Returns true if the basic answers were requested.
    #[must_use]
    pub fn basic_asked(&self) -> bool {
        self.basic_asked
    }

    /// Returns true if the advanced answers were requested.
    #[must_use]
    pub fn advanced_asked(&self) -> bool {
        self.advanced_asked
    }
}

impl AnswerSource for ScriptedAnswers {
    fn basic(&mut self) -> Result<BasicAnswers> {
        self.basic_asked = true;
        Ok(self.basic.clone())
    }

    fn advanced(&mut self) -> Result<AdvancedAnswers> {
        self.advanced_asked = true;
        Ok(self.advanced)
    }
}

/// A reporter that records messages instead of printing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    /// Recorded lines, with `info:`, `success:` or `error:` prefixes.
    pub lines: Vec<String>,
}

impl RecordingReporter {
    /// Returns true if any recorded line equals `line`.
    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|recorded| recorded == line)
    }
}

impl Reporter for RecordingReporter {
    fn info(&mut self, message: &str) {
        self.lines.push(format!("info: {message}"));
    }

    fn success(&mut self, message: &str) {
        self.lines.push(format!("success: {message}"));
    }

    fn error(&mut self, message: &str) {
        self.lines.push(format!("error: {message}"));
    }
}
