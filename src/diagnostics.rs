//! The single diagnostic type of the harness.
//!
//! An assertion failure is non-fatal and non-propagating: it is recorded,
//! printed, and execution continues. There is consequently no `Result`
//! channel here — the type exists to pin the diagnostic line format in one
//! place.

use thiserror::Error;

use crate::config::{HarnessConfig, BLUE, RED};

/// A failed assertion: where it happened and what the checked expression
/// looked like in source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}:{line}:{test}: error: assertion failed: {expression}")]
pub struct AssertionFailure {
    /// Source file of the assertion call site.
    pub file: &'static str,
    /// Source line of the assertion call site.
    pub line: u32,
    /// Name of the test procedure being executed.
    pub test: String,
    /// Rendered source text of the failed expression.
    pub expression: String,
}

impl AssertionFailure {
    /// The diagnostic line, color-wrapped per configuration: blue location
    /// prefix, red `error:`, blue remainder.
    pub fn render(&self, config: &HarnessConfig) -> String {
        format!(
            "{} {} {}",
            config.paint(&format!("{}:{}:{}:", self.file, self.line, self.test), BLUE),
            config.paint("error:", RED),
            config.paint(&format!("assertion failed: {}", self.expression), BLUE),
        )
    }
}
