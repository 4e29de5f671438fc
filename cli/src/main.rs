use std::path::PathBuf;
use std::process;

use clap::Parser;
use importmap::{Context, Resolution};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod load;
mod repl;

#[derive(Parser)]
#[command(name = "importmap", about = "Resolve module specifiers against import maps")]
struct Cli {
    /// Specifiers to resolve
    specifiers: Vec<String>,
    /// Import map JSON file to compose (repeatable, applied in order)
    #[arg(long = "map", value_name = "FILE")]
    maps: Vec<PathBuf>,
    /// Base URL the maps are resolved against (default: current directory)
    #[arg(long)]
    base: Option<String>,
    /// URL of the importing module (default: the base URL)
    #[arg(long)]
    parent: Option<String>,
    /// Resolve a relative URL against the base, without the maps
    #[arg(long, value_name = "REL")]
    url: Option<String>,
    /// Print the composed import map as JSON
    #[arg(long)]
    print_map: bool,
    /// Log composition and lookup details
    #[arg(long, short)]
    verbose: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.version {
        println!(
            "{} {}",
            "importmap".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let base = cli.base.clone().unwrap_or_else(default_base);
    for (flag, value) in [("--base", Some(&base)), ("--parent", cli.parent.as_ref())] {
        if let Some(value) = value
            && !importmap::is_url(value)
        {
            eprintln!(
                "{} {flag} must be an absolute URL, got '{}'",
                "error:".red().bold(),
                value.yellow()
            );
            process::exit(2);
        }
    }

    let mut ctx = Context::new(base);
    for path in &cli.maps {
        if let Err(message) = load::load_map_file(&mut ctx, path) {
            eprintln!("{message}");
            process::exit(1);
        }
    }

    if cli.specifiers.is_empty() && cli.url.is_none() && !cli.print_map {
        if let Err(err) = repl::run(ctx, cli.parent) {
            eprintln!("{} {err}", "repl error:".red().bold());
            process::exit(1);
        }
        return;
    }

    if let Some(relative) = &cli.url {
        match ctx.resolve_url(relative) {
            Some(url) => println!("{url}"),
            None => {
                eprintln!(
                    "{} '{}' is a bare specifier, not a URL",
                    "error:".red().bold(),
                    relative.yellow()
                );
                process::exit(1);
            }
        }
    }

    if cli.print_map {
        match ctx.map().to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        }
    }

    let mut failed = false;
    for specifier in &cli.specifiers {
        match ctx.resolve(specifier, cli.parent.as_deref()) {
            Resolution::Resolved(url) => println!("{url}"),
            Resolution::Blocked => {
                failed = true;
                eprintln!(
                    "{} '{}' is blocked by the import map",
                    "blocked:".red().bold(),
                    specifier.yellow()
                );
            }
            Resolution::Unmapped => {
                failed = true;
                eprintln!(
                    "{} no mapping for bare specifier '{}'",
                    "unresolved:".red().bold(),
                    specifier.yellow()
                );
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// The current directory as a `file:` URL with a trailing slash.
fn default_base() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| url::Url::from_directory_path(dir).ok())
        .map(String::from)
        .unwrap_or_else(|| "file:///".to_string())
}
