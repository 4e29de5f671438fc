//! Aggregated view of a suite run, printed with `--analyze`.

mod dropped;
mod issues;
mod kinds;

use std::collections::BTreeMap;

use colored::Colorize;
use importmap::UnresolvableTarget;

use crate::runner::{CheckKind, FixtureReport, Tally};

#[derive(Debug, Default)]
pub struct Analysis {
    pub checks: BTreeMap<CheckKind, Tally>,
    /// Issue class to occurrences and one sample message.
    pub issues: BTreeMap<&'static str, (usize, String)>,
    pub dropped: Vec<UnresolvableTarget>,
    pub skip_reasons: BTreeMap<String, usize>,
}

impl Analysis {
    pub fn record(&mut self, report: &FixtureReport) {
        if let Some(reason) = &report.skipped {
            *self.skip_reasons.entry(reason.clone()).or_default() += 1;
            return;
        }

        for (kind, tally) in &report.checks {
            self.checks.entry(*kind).or_default().absorb(*tally);
        }
        for issue in &report.issues {
            self.issues
                .entry(issue.class())
                .or_insert_with(|| (0, issue.to_string()))
                .0 += 1;
        }
        self.dropped.extend(report.dropped.iter().cloned());
    }
}

pub fn print_analysis(analysis: &Analysis) {
    println!("\n{}", "Analysis".bold().cyan());
    kinds::print_checks(&analysis.checks);
    issues::print_issues(&analysis.issues);
    dropped::print_dropped(&analysis.dropped);

    if !analysis.skip_reasons.is_empty() {
        println!("\n{}", "Skipped fixtures:".bold());
        for (reason, count) in &analysis.skip_reasons {
            println!("  {count:>4}x {reason}");
        }
    }
}
