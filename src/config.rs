//! Run configuration for the test harness.
//!
//! Both toggles are fixed when the hosting program constructs its
//! [`Harness`](crate::Harness): there are no setters, no environment
//! variables, and no config files. A program that wants a different
//! configuration builds a different harness.

// Color constants for terminal output
pub(crate) const RESET: &str = "\x1b[0m";
pub(crate) const RED: &str = "\x1b[31m";
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const BLUE: &str = "\x1b[34m";

/// Configuration for test execution and reporting.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarnessConfig {
    /// Wrap pass/fail tags and diagnostic prefixes in ANSI color codes.
    pub colorize: bool,
    /// Once one test has failed, skip every subsequent test in the run.
    pub fail_fast: bool,
}

impl HarnessConfig {
    /// Configuration with colors enabled only when stdout is a terminal.
    pub fn auto_color(fail_fast: bool) -> Self {
        Self {
            colorize: atty::is(atty::Stream::Stdout),
            fail_fast,
        }
    }

    /// Apply color formatting to text if colors are enabled.
    pub fn paint(&self, text: &str, color: &str) -> String {
        if self.colorize {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}
