pub use crate::config::HarnessConfig;
pub use crate::diagnostics::AssertionFailure;
pub use crate::harness::{Harness, RunSummary, TestCtx};
pub use crate::output::{OutputBuffer, OutputSink, SharedOutput, StdoutSink};
pub use crate::suite::Suite;

pub mod assert;
pub mod config;
pub mod diagnostics;
pub mod harness;
pub mod output;
pub mod suite;
