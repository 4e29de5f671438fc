use std::borrow::Cow;

use owo_colors::OwoColorize;

use super::COMMANDS;

pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    if COMMANDS.contains(&head) {
        let sep = if line.len() > head.len() { " " } else { "" };
        return Cow::Owned(format!("{}{sep}{}", head.blue().bold(), highlight_url(rest)));
    }
    highlight_url(line)
}

/// Colour the scheme of anything that looks like a URL.
fn highlight_url(text: &str) -> Cow<'_, str> {
    match text.find("://") {
        Some(idx) if !text[..idx].contains(' ') => Cow::Owned(format!(
            "{}{}",
            (&text[..idx + 3]).cyan(),
            &text[idx + 3..]
        )),
        _ => Cow::Borrowed(text),
    }
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
