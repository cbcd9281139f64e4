//! Test execution and reporting.
//!
//! A [`Harness`] owns the state of one run: the executed/failed/skipped
//! counters, the optional setup/teardown hooks, the configuration, and the
//! output sink. The hosting program instantiates one harness, feeds it test
//! procedures in whatever order it chooses, prints the report, and derives
//! its process exit code from [`Harness::all_passed`]. Nothing here is
//! process-global; two harnesses in one process do not observe each other.
//!
//! # Example
//!
//! ```rust
//! use minicheck::{check_eq, Harness, HarnessConfig, TestCtx};
//!
//! fn test_addition(t: &mut TestCtx) {
//!     check_eq!(t, 2 + 2, 4);
//! }
//!
//! let mut harness = Harness::new(HarnessConfig::default());
//! harness.run_test("test_addition", test_addition);
//! harness.print_report();
//! assert!(harness.all_passed());
//! ```

use crate::config::{HarnessConfig, GREEN, RED};
use crate::diagnostics::AssertionFailure;
use crate::output::SharedOutput;

// =============================================================================
// PER-TEST CONTEXT
// =============================================================================

/// Handle given to a running test procedure.
///
/// Carries the failed-so-far flag for the current invocation and the path
/// through which assertion diagnostics are printed. A fresh context is built
/// for every executed test, so the flag always starts out clear.
pub struct TestCtx<'a> {
    name: &'a str,
    config: HarnessConfig,
    out: SharedOutput,
    failed: bool,
}

impl TestCtx<'_> {
    /// Name of the test procedure currently executing.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Whether this invocation has recorded at least one failed assertion.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Record a failed assertion: print its diagnostic line and mark the
    /// invocation failed. Execution of the test procedure continues; the
    /// assertion macros call this and fall through.
    pub fn fail_at(&mut self, file: &'static str, line: u32, expression: &str) {
        let failure = AssertionFailure {
            file,
            line,
            test: self.name.to_string(),
            expression: expression.to_string(),
        };
        self.out.emit(&failure.render(&self.config));
        self.failed = true;
    }
}

// =============================================================================
// HARNESS STATE AND EXECUTION
// =============================================================================

/// Summary counts of a finished (or in-progress) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// State of one test run.
pub struct Harness {
    config: HarnessConfig,
    out: SharedOutput,
    tests_run: usize,
    tests_failed: usize,
    tests_skipped: usize,
    setup: Option<Box<dyn FnMut()>>,
    teardown: Option<Box<dyn FnMut()>>,
}

impl Harness {
    /// A harness reporting to stdout.
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_output(config, SharedOutput::stdout())
    }

    /// A harness reporting to the given sink. Tests of hosting programs use
    /// this with an [`OutputBuffer`](crate::OutputBuffer) to capture the run.
    pub fn with_output(config: HarnessConfig, out: SharedOutput) -> Self {
        Self {
            config,
            out,
            tests_run: 0,
            tests_failed: 0,
            tests_skipped: 0,
            setup: None,
            teardown: None,
        }
    }

    /// Install the setup hook, replacing any previous one. Runs immediately
    /// before every executed test.
    pub fn set_setup(&mut self, hook: impl FnMut() + 'static) {
        self.setup = Some(Box::new(hook));
    }

    /// Install the teardown hook, replacing any previous one. Runs
    /// immediately after every executed test, failures included.
    pub fn set_teardown(&mut self, hook: impl FnMut() + 'static) {
        self.teardown = Some(Box::new(hook));
    }

    /// Execute one named test procedure.
    ///
    /// Under fail-fast, once any test has failed, subsequent invocations are
    /// skipped outright: no hooks, no output line, no `tests_run` tick.
    /// An executed procedure always completes this operation regardless of
    /// how many of its assertions failed.
    pub fn run_test(&mut self, name: &str, test: impl FnOnce(&mut TestCtx)) {
        if self.config.fail_fast && self.tests_failed > 0 {
            self.tests_skipped += 1;
            return;
        }

        if let Some(setup) = self.setup.as_mut() {
            setup();
        }
        let mut ctx = TestCtx {
            name,
            config: self.config,
            out: self.out.clone(),
            failed: false,
        };
        test(&mut ctx);
        if let Some(teardown) = self.teardown.as_mut() {
            teardown();
        }

        let tag = if ctx.failed {
            self.config.paint("[FAIL]", RED)
        } else {
            self.config.paint("[PASS]", GREEN)
        };
        self.out.emit(&format!("{} {}", tag, name));

        self.tests_run += 1;
        if ctx.failed {
            self.tests_failed += 1;
        }
    }

    /// Print the final summary line from the current counters.
    pub fn print_report(&self) {
        self.out.emit("");
        self.out.emit(&format!(
            "REPORT: executed {} tests, {} failed ({} skipped){}.",
            self.tests_run,
            self.tests_failed,
            self.tests_skipped,
            if self.config.fail_fast { " (failfast)" } else { "" },
        ));
    }

    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    pub fn tests_failed(&self) -> usize {
        self.tests_failed
    }

    pub fn tests_skipped(&self) -> usize {
        self.tests_skipped
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            executed: self.tests_run,
            failed: self.tests_failed,
            skipped: self.tests_skipped,
        }
    }

    /// Exit-code convention helper: the hosting program is expected to exit
    /// nonzero when this returns false.
    pub fn all_passed(&self) -> bool {
        self.tests_failed == 0
    }
}
