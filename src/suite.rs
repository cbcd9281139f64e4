//! Ordered suites of named test procedures.
//!
//! There is no discovery mechanism: a [`Suite`] is the explicit list of
//! `(name, procedure)` pairs the hosting program chooses to run, in the
//! order it chooses to run them. The [`suite!`](crate::suite!) and
//! [`run_test!`](crate::run_test!) macros derive the name from the function
//! identifier so declarations stay a compile-time naming convention.

use crate::harness::{Harness, TestCtx};

type TestProc = Box<dyn FnMut(&mut TestCtx)>;

/// An ordered list of named test procedures.
#[derive(Default)]
pub struct Suite {
    tests: Vec<(String, TestProc)>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a test procedure. Order of addition is order of execution.
    pub fn add(&mut self, name: impl Into<String>, test: impl FnMut(&mut TestCtx) + 'static) -> &mut Self {
        self.tests.push((name.into(), Box::new(test)));
        self
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Feed every test to the harness in insertion order. Reporting stays
    /// with the caller: run the suite, then [`Harness::print_report`].
    pub fn run(mut self, harness: &mut Harness) {
        for (name, test) in self.tests.iter_mut() {
            harness.run_test(name, |ctx| test(ctx));
        }
    }
}

/// Build a [`Suite`] from test function identifiers, naming each test after
/// its function.
#[macro_export]
macro_rules! suite {
    ($($test:ident),* $(,)?) => {{
        let mut suite = $crate::Suite::new();
        $(suite.add(stringify!($test), $test);)*
        suite
    }};
}

/// Run a single test function under a harness, naming it after the function.
#[macro_export]
macro_rules! run_test {
    ($harness:expr, $test:ident) => {
        $harness.run_test(stringify!($test), $test)
    };
}
