mod completer;
mod helper;
mod highlighter;
mod hinter;

use importmap::{Context, Resolution};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::load::load_map_file;

pub const COMMANDS: [&str; 8] = [
    ".help", ".map", ".base", ".parent", ".show", ".url", ".clear", ".exit",
];

struct Session {
    ctx: Context,
    parent: Option<String>,
}

pub fn run(ctx: Context, parent: Option<String>) -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper::new(ctx.map())));

    let mut session = Session { ctx, parent };

    println!(
        "{} {}",
        "importmap".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!(
        "{}",
        "Type a specifier to resolve it, or .help for commands".bright_black()
    );

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if handle_command(trimmed, &mut session) {
                    if let Some(helper) = rl.helper_mut() {
                        helper.set_specifiers(session.ctx.map());
                    }
                    continue;
                }

                resolve_line(&session, trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

/// Split `.cmd rest` into the command and its trimmed argument.
fn split_command(line: &str) -> Option<(&str, &str)> {
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    COMMANDS
        .contains(&command)
        .then_some((command, arg.trim()))
}

fn handle_command(line: &str, session: &mut Session) -> bool {
    let Some((command, arg)) = split_command(line) else {
        return false;
    };

    match (command, arg) {
        (".exit", _) => std::process::exit(0),
        (".help", _) => print_help(),
        (".clear", _) => {
            session.ctx.clear();
            println!("{}", "import map cleared".green());
        }
        (".show", _) => match session.ctx.map().to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("{} {err}", "error:".red().bold()),
        },
        (".base", "") => println!("{}", session.ctx.base().cyan()),
        (".base", url) => {
            if importmap::is_url(url) {
                session.ctx.set_base(url);
            } else {
                eprintln!("{} not an absolute URL: {url}", "error:".red().bold());
            }
        }
        (".parent", "") => {
            let parent = session.parent.as_deref().unwrap_or(session.ctx.base());
            println!("{}", parent.cyan());
        }
        (".parent", url) => {
            if importmap::is_url(url) {
                session.parent = Some(url.to_string());
            } else {
                eprintln!("{} not an absolute URL: {url}", "error:".red().bold());
            }
        }
        (".url", "") | (".map", "") => {
            eprintln!("{} {command} needs an argument", "error:".red().bold());
        }
        (".url", relative) => match session.ctx.resolve_url(relative) {
            Some(url) => println!("{}", url.green()),
            None => println!("{}", "bare specifier".bright_black()),
        },
        (".map", path) => {
            let before = session.ctx.warnings().len();
            match load_map_file(&mut session.ctx, std::path::Path::new(path)) {
                Ok(()) => {
                    let dropped = session.ctx.warnings().len() - before;
                    println!(
                        "{} {} ({} entries dropped)",
                        "composed".green(),
                        path.cyan(),
                        dropped
                    );
                }
                Err(message) => eprintln!("{message}"),
            }
        }
        _ => return false,
    }
    true
}

fn print_help() {
    println!("{}", ".help                show commands".bright_blue());
    println!("{}", ".map <file.json>     compose an import map file".bright_blue());
    println!("{}", ".base [url]          show or set the base URL".bright_blue());
    println!("{}", ".parent [url]        show or set the importing module URL".bright_blue());
    println!("{}", ".url <relative>      resolve a URL against the base".bright_blue());
    println!("{}", ".show                print the composed import map".bright_blue());
    println!("{}", ".clear               drop all composed maps".bright_blue());
    println!("{}", ".exit                exit REPL".bright_blue());
}

fn resolve_line(session: &Session, specifier: &str) {
    match session.ctx.resolve(specifier, session.parent.as_deref()) {
        Resolution::Resolved(url) => println!("{}", url.green()),
        Resolution::Blocked => println!("{}", "blocked".red()),
        Resolution::Unmapped => println!("{}", "no mapping".bright_black()),
    }
}

#[cfg(test)]
mod tests {
    use super::split_command;

    #[test]
    fn commands_take_trimmed_arguments() {
        assert_eq!(split_command(".map  a.json "), Some((".map", "a.json")));
        assert_eq!(split_command(".show"), Some((".show", "")));
    }

    #[test]
    fn relative_specifiers_are_not_commands() {
        assert_eq!(split_command("./a.js"), None);
        assert_eq!(split_command("../lib/x.js"), None);
        assert_eq!(split_command(".mapper"), None);
    }
}
