use std::collections::BTreeMap;

use colored::Colorize;

/// Conflict problems first: they stop composition, so any lookup
/// mismatches in the same fixture may be a consequence.
pub(super) fn print_issues(issues: &BTreeMap<&'static str, (usize, String)>) {
    if issues.is_empty() {
        return;
    }

    let (conflicts, mismatches): (Vec<_>, Vec<_>) = issues
        .iter()
        .partition(|(class, _)| class.ends_with("conflict"));

    println!("\n{}", "Issues:".bold());
    for (class, (count, sample)) in conflicts.into_iter().chain(mismatches) {
        println!("  {:>4}x {:20} e.g. {sample}", count, class.red());
    }
}
