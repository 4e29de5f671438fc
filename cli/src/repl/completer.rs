use rustyline::completion::Pair;

use super::COMMANDS;

pub fn complete_line(line: &str, pos: usize, specifiers: &[String]) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = &line[..safe_pos];

    if prefix.starts_with('.') && !prefix.contains(' ') {
        let commands = COMMANDS
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(prefix))
            .collect::<Vec<_>>();
        if !commands.is_empty() {
            return (0, pairs(commands));
        }
    }

    let start = word_start(prefix);
    let needle = &prefix[start..];
    let matches = specifiers
        .iter()
        .map(String::as_str)
        .filter(|key| key.starts_with(needle))
        .collect::<Vec<_>>();

    (start, pairs(matches))
}

fn pairs<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Pair> {
    values
        .into_iter()
        .map(|v| Pair {
            display: v.to_string(),
            replacement: v.to_string(),
        })
        .collect()
}

/// Specifiers run up to whitespace; `/`, `.`, `@` and `:` are part of them.
fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}
