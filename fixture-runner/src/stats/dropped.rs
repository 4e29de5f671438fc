use colored::Colorize;
use importmap::UnresolvableTarget;

pub(super) fn print_dropped(dropped: &[UnresolvableTarget]) {
    if dropped.is_empty() {
        return;
    }

    println!("\n{}", "Dropped mappings:".bold());
    for warning in dropped {
        match &warning.scope {
            Some(scope) => println!("  {} {warning} in scope {scope}", "warn".yellow()),
            None => println!("  {} {warning}", "warn".yellow()),
        }
    }
}
