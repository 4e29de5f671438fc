use super::COMMANDS;

/// Suggest the rest of the first command or map key the line is a prefix of.
pub fn hint_for(line: &str, pos: usize, specifiers: &[String]) -> Option<String> {
    if pos < line.len() || line.is_empty() || line.contains(' ') {
        return None;
    }

    let commands: &[&str] = if line.starts_with('.') { &COMMANDS } else { &[] };
    commands
        .iter()
        .copied()
        .chain(specifiers.iter().map(String::as_str))
        .find(|candidate| candidate.len() > line.len() && candidate.starts_with(line))
        .map(|candidate| candidate[line.len()..].to_string())
}

#[cfg(test)]
mod tests {
    use super::hint_for;

    #[test]
    fn hints_remaining_key() {
        let keys = vec!["@scope/pkg".to_string()];
        assert_eq!(hint_for("@sc", 3, &keys), Some("ope/pkg".to_string()));
    }

    #[test]
    fn hints_commands() {
        assert_eq!(hint_for(".he", 3, &[]), Some("lp".to_string()));
    }

    #[test]
    fn no_hint_mid_line_or_on_exact_match() {
        let keys = vec!["react".to_string()];
        assert_eq!(hint_for("rea", 1, &keys), None);
        assert_eq!(hint_for("react", 5, &keys), None);
    }
}
