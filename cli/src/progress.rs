//! Install spinner.
//!
//! The spinner is cosmetic: it ticks on its own thread while the install
//! command blocks and is cleared when the step finishes.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner frames, with the last entry shown when finished.
pub const FRAMES: [&str; 11] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];

/// Interval between spinner frames.
pub const TICK: Duration = Duration::from_millis(200);

/// Message shown beside the spinner.
pub const INSTALL_MESSAGE: &str = "Installing dependencies";

/// A running spinner, or nothing when progress output is suppressed.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Start a spinner with `message`, unless `quiet` is set.
    #[must_use]
    pub fn start(message: &str, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&FRAMES)
                .template("{spinner:.green} {msg:.green}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_owned());
        bar.enable_steady_tick(TICK);
        Self { bar: Some(bar) }
    }

    /// Returns true if the spinner is drawing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Stop the spinner and clear its line.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
