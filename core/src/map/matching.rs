use std::collections::BTreeMap;

/// Find the longest key of `entries` that matches `path`.
///
/// An exact match wins; otherwise each prefix of `path` ending in `/` is
/// tried, longest first. The returned slice borrows from `path`.
pub fn longest_prefix<'p, V>(path: &'p str, entries: &BTreeMap<String, V>) -> Option<&'p str> {
    if entries.contains_key(path) {
        return Some(path);
    }

    let mut end = path.len();
    while let Some(sep) = path[..end].rfind('/') {
        let candidate = &path[..=sep];
        if entries.contains_key(candidate) {
            return Some(candidate);
        }
        end = sep;
    }
    None
}
