use std::borrow::Cow;

use importmap::ImportMap;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context as RustyContext, Result as RustyResult};

use super::{completer, highlighter, hinter};

pub struct ReplHelper {
    specifiers: Vec<String>,
    files: FilenameCompleter,
}

impl ReplHelper {
    pub fn new(map: &ImportMap) -> Self {
        let mut helper = Self {
            specifiers: Vec::new(),
            files: FilenameCompleter::new(),
        };
        helper.set_specifiers(map);
        helper
    }

    pub fn set_specifiers(&mut self, map: &ImportMap) {
        self.specifiers = map.specifiers().into_iter().map(str::to_string).collect();
    }
}

impl rustyline::Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &RustyContext<'_>,
    ) -> RustyResult<(usize, Vec<Pair>)> {
        if line.starts_with(".map ") {
            return self.files.complete_path(line, pos);
        }
        Ok(completer::complete_line(line, pos, &self.specifiers))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &RustyContext<'_>) -> Option<Self::Hint> {
        hinter::hint_for(line, pos, &self.specifiers)
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        highlighter::highlight_line(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        highlighter::highlight_prompt(prompt)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        highlighter::highlight_hint(hint)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Validator for ReplHelper {}
