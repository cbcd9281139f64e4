// Sample hosting program: declares three tests, runs them, and derives the
// process exit code from the failed count.
// Usage: cargo run --bin sample_suite [failfast] [colors]

use std::env;
use std::process;

use minicheck::{check_eq, check_gt, suite, Harness, HarnessConfig, TestCtx};

fn test_one(t: &mut TestCtx) {
    check_eq!(t, 3, 3);
}

fn test_two(t: &mut TestCtx) {
    check_eq!(t, 10, 16);
}

fn test_three(t: &mut TestCtx) {
    check_gt!(t, 42, 1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = HarnessConfig::auto_color(args.iter().any(|a| a == "failfast"));
    if args.iter().any(|a| a == "colors") {
        config.colorize = true;
    }

    let mut harness = Harness::new(config);
    suite![test_one, test_two, test_three].run(&mut harness);
    harness.print_report();

    if !harness.all_passed() {
        process::exit(1);
    }
}
