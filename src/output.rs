//! Handles all console output produced by the harness.
//!
//! Every line the harness prints — pass/fail tags, assertion diagnostics,
//! the final report — flows through an [`OutputSink`], so a hosting program
//! (or a test of the harness itself) can capture the run verbatim instead
//! of scraping stdout.

use std::cell::RefCell;
use std::rc::Rc;

/// Destination for harness output, one call per console line.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// Writes output to stdout for the default runner use.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Collects output into a String for testing or programmatic capture.
#[derive(Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
    }
}

/// Cloneable handle to a shared sink. The run model is single-threaded, so
/// `Rc<RefCell<..>>` suffices; there is no locking discipline to uphold.
#[derive(Clone)]
pub struct SharedOutput(pub Rc<RefCell<dyn OutputSink>>);

impl SharedOutput {
    pub fn new(sink: impl OutputSink + 'static) -> Self {
        Self(Rc::new(RefCell::new(sink)))
    }

    /// A handle writing to stdout.
    pub fn stdout() -> Self {
        Self::new(StdoutSink)
    }

    pub fn emit(&self, text: &str) {
        self.0.borrow_mut().emit(text);
    }
}
