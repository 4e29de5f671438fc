use std::collections::BTreeMap;

use colored::Colorize;

use crate::runner::{CheckKind, Tally};

pub(super) fn print_checks(checks: &BTreeMap<CheckKind, Tally>) {
    println!("\n{}", "Checks by kind:".bold());
    for (kind, tally) in checks {
        let failed = if tally.failed == 0 {
            tally.failed.to_string().normal()
        } else {
            tally.failed.to_string().red()
        };
        println!(
            "  {:8} {:>5} checks | {:>5} passed | {:>5} failed | {}",
            kind.label(),
            tally.total(),
            tally.passed,
            failed,
            pass_rate(tally)
        );
    }
}

fn pass_rate(tally: &Tally) -> String {
    match tally.total() {
        0 => "-".to_string(),
        total => format!("{:.1}%", tally.passed as f64 * 100.0 / total as f64),
    }
}
