use std::fs;
use std::path::Path;

use importmap::diagnostics::source_map::SourceMap;
use importmap::{Context, ImportMapError};
use owo_colors::OwoColorize;

/// Read an import map file and compose it into `ctx`. The error is a
/// ready-to-print message.
pub fn load_map_file(ctx: &mut Context, path: &Path) -> Result<(), String> {
    let source = fs::read_to_string(path).map_err(|err| {
        format!(
            "{} could not read '{}': {err}",
            "error:".red().bold(),
            path.display().to_string().yellow()
        )
    })?;

    ctx.add_json(&source)
        .map_err(|err| format_map_error(&source, path, &err))?;
    tracing::debug!(path = %path.display(), "loaded import map");
    Ok(())
}

fn format_map_error(source: &str, path: &Path, err: &ImportMapError) -> String {
    match err {
        ImportMapError::Declaration(err) => {
            let pos = SourceMap::from_source(source).byte_to_pos(err.span.offset());
            format!(
                "{} {}:{}:{}: {}",
                "invalid map".red().bold(),
                path.display().to_string().cyan(),
                pos.line,
                pos.col,
                err.message.bright_white()
            )
        }
        ImportMapError::Conflict(err) => format!(
            "{} {}: {}",
            "conflict".red().bold(),
            path.display().to_string().cyan(),
            err.to_string().bright_white()
        ),
    }
}
