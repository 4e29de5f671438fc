use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;

use crate::fixture::parse_fixture;
use crate::runner::{FixtureReport, run_fixture};
use crate::stats::Analysis;

/// Per-file outcomes of a suite run, in discovery order.
pub struct SuiteSummary {
    pub reports: Vec<(PathBuf, FixtureReport)>,
    pub analysis: Analysis,
}

impl SuiteSummary {
    pub fn failed(&self) -> impl Iterator<Item = &(PathBuf, FixtureReport)> {
        self.reports.iter().filter(|(_, report)| report.is_failed())
    }
}

pub fn run_suite(files: &[PathBuf], verbose: bool) -> SuiteSummary {
    let reports: Vec<_> = files
        .par_iter()
        .map(|path| (path.clone(), load_and_run(path)))
        .collect();

    let mut analysis = Analysis::default();
    for (path, report) in &reports {
        analysis.record(report);
        if verbose {
            print_report(path, report);
        }
    }

    SuiteSummary { reports, analysis }
}

fn load_and_run(path: &Path) -> FixtureReport {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return FixtureReport::skipped(format!("unreadable: {err}")),
    };
    let fixture = match parse_fixture(&source) {
        Ok(fixture) => fixture,
        Err(err) => return FixtureReport::skipped(format!("invalid fixture: {err}")),
    };

    panic::catch_unwind(AssertUnwindSafe(|| run_fixture(&fixture)))
        .unwrap_or_else(|payload| FixtureReport::panicked(panic_text(payload.as_ref())))
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|text| text.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

fn print_report(path: &Path, report: &FixtureReport) {
    if let Some(reason) = &report.skipped {
        println!("{} {} ({reason})", "skip".yellow(), path.display());
        return;
    }
    if !report.is_failed() {
        println!("{} {}", "ok".green(), path.display());
        return;
    }
    match &report.description {
        Some(description) => println!("{} {} ({description})", "fail".red().bold(), path.display()),
        None => println!("{} {}", "fail".red().bold(), path.display()),
    }
    for issue in &report.issues {
        println!("    {issue}");
    }
}
