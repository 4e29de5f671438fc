use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;
use crate::discovery::collect_fixture_files;
use crate::execution::{SuiteSummary, run_suite};
use crate::stats::print_analysis;

const FAILURE_SAMPLE: usize = 10;

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let started = Instant::now();

    let files = collect_fixture_files(&cli.path);
    if files.is_empty() {
        eprintln!("{} no fixtures under {}", "error:".red().bold(), cli.path.display());
        return ExitCode::from(2);
    }

    let summary = run_suite(&files, cli.verbose);
    print_summary(&summary, started.elapsed().as_secs_f64());

    if cli.analyze {
        print_analysis(&summary.analysis);
    }

    let failed = summary.failed().count();
    if failed == 0 {
        return ExitCode::SUCCESS;
    }
    if !cli.verbose {
        print_failures(&summary);
    }
    ExitCode::FAILURE
}

fn print_summary(summary: &SuiteSummary, seconds: f64) {
    let skipped = summary
        .reports
        .iter()
        .filter(|(_, report)| report.is_skipped())
        .count();
    let failed = summary.failed().count();
    let passed = summary.reports.len() - skipped - failed;
    let dropped = summary.analysis.dropped.len();

    println!(
        "\n{} fixtures in {seconds:.2}s: {} passed, {} failed, {} skipped",
        summary.reports.len(),
        passed.to_string().green().bold(),
        failed.to_string().red().bold(),
        skipped.to_string().yellow()
    );
    if dropped > 0 {
        println!("{dropped} mapping(s) dropped as unresolvable (see --analyze)");
    }
}

fn print_failures(summary: &SuiteSummary) {
    println!("\n{}", "Failures:".red().bold());
    let mut failed = summary.failed();
    for (path, report) in failed.by_ref().take(FAILURE_SAMPLE) {
        let first = report.issues.first().map(ToString::to_string).unwrap_or_default();
        let more = report.issues.len().saturating_sub(1);
        if more == 0 {
            println!("  {}: {first}", path.display());
        } else {
            println!("  {}: {first} (+{more} more)", path.display());
        }
    }
    let rest = failed.count();
    if rest > 0 {
        println!("  {rest} more failing fixture(s), rerun with --verbose");
    }
}
