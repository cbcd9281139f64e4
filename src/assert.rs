//! Assertion macros.
//!
//! All assertions are non-fatal: a failed check prints one diagnostic line
//! through the test's [`TestCtx`](crate::TestCtx) and execution continues
//! with the next statement. The primitive is [`check!`]; every derived form
//! expands to a rewrite of its operands into a single boolean expression
//! handed to the primitive, so the diagnostic always shows the literal
//! source text of what was checked.
//!
//! ```rust
//! use minicheck::{check, check_eq, check_str_contains, Harness, HarnessConfig, TestCtx};
//!
//! fn test_strings(t: &mut TestCtx) {
//!     check!(t, !"".contains('x'));
//!     check_eq!(t, "ab".len(), 2);
//!     check_str_contains!(t, "haystack", "stack");
//! }
//!
//! let mut harness = Harness::new(HarnessConfig::default());
//! harness.run_test("test_strings", test_strings);
//! assert!(harness.all_passed());
//! ```

/// Check a boolean expression.
///
/// `check!(ctx, cond)` captures the expression text itself; the
/// three-argument form takes an explicit rendered text and is what the
/// derived macros expand through. The condition is evaluated exactly once.
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr) => {
        $crate::check!($ctx, $cond, stringify!($cond))
    };
    ($ctx:expr, $cond:expr, $text:expr) => {
        if !($cond) {
            $ctx.fail_at(file!(), line!(), $text);
        }
    };
}

/// Check that an expression is false.
#[macro_export]
macro_rules! check_false {
    ($ctx:expr, $cond:expr) => {
        $crate::check!($ctx, !($cond))
    };
}

/// Check two values for equality.
#[macro_export]
macro_rules! check_eq {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::check!($ctx, $a == $b)
    };
}

/// Check two values for inequality.
#[macro_export]
macro_rules! check_ne {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::check!($ctx, $a != $b)
    };
}

/// Check `a < b`.
#[macro_export]
macro_rules! check_lt {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::check!($ctx, $a < $b)
    };
}

/// Check `a <= b`.
#[macro_export]
macro_rules! check_le {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::check!($ctx, $a <= $b)
    };
}

/// Check `a > b`.
#[macro_export]
macro_rules! check_gt {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::check!($ctx, $a > $b)
    };
}

/// Check `a >= b`.
#[macro_export]
macro_rules! check_ge {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::check!($ctx, $a >= $b)
    };
}

/// Check two strings for byte-wise equality.
#[macro_export]
macro_rules! check_str_eq {
    ($ctx:expr, $a:expr, $b:expr) => {
        $crate::check!($ctx, $a.as_bytes() == $b.as_bytes())
    };
}

/// Check that the first string contains the second as a substring. An empty
/// needle always passes.
#[macro_export]
macro_rules! check_str_contains {
    ($ctx:expr, $haystack:expr, $needle:expr) => {
        $crate::check!($ctx, $haystack.contains($needle))
    };
}

/// Check that two floating-point values differ by at most `tol`. The rewrite
/// resolves at the operands' own float width, and the boundary case
/// `|a - b| == tol` passes.
#[macro_export]
macro_rules! check_approx_eq {
    ($ctx:expr, $a:expr, $b:expr, $tol:expr) => {
        $crate::check!($ctx, ($a - $b).abs() <= $tol)
    };
}
