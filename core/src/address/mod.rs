//! URL resolution for import map keys, targets and specifiers.
//!
//! Only the small subset of URL parsing needed for module specifiers is
//! implemented here: protocol-relative input, `./`, `../` and `/` paths, and
//! passthrough of anything that already carries a scheme.

mod base;
mod cursor;
mod normalize;

use std::borrow::Cow;

use url::Url;

pub use base::strip_query_and_fragment;
pub use normalize::normalize_segments;

/// Resolve `input` against `base`.
///
/// Returns `None` when `input` is a bare specifier: not a path, not
/// protocol-relative, and without a scheme. Input that already carries a
/// scheme is returned exactly as given.
pub fn resolve_url(input: &str, base: &str) -> Option<String> {
    let base = strip_query_and_fragment(base);
    let slashed = forward_slashes(input);

    if slashed.starts_with("//") {
        return Some(format!("{}{slashed}", base::scheme(base)));
    }

    if let Some(path) = as_path(&slashed) {
        return Some(join(&path, base));
    }

    if input.contains(':') {
        Some(input.to_string())
    } else {
        None
    }
}

/// Like [`resolve_url`], but a bare specifier is treated as a path relative
/// to `base` instead of being rejected.
pub fn resolve_url_or_relative(input: &str, base: &str) -> String {
    resolve_url(input, base).unwrap_or_else(|| {
        let relative = format!("./{}", forward_slashes(input));
        join(&relative, strip_query_and_fragment(base))
    })
}

/// Base URL of a document: an explicit `<base href>` wins, otherwise the
/// directory of the document location.
pub fn document_base_url(base_href: Option<&str>, location: &str) -> String {
    if let Some(href) = base_href.filter(|href| !href.is_empty()) {
        return href.to_string();
    }

    let location = strip_query_and_fragment(location);
    match location.rfind('/') {
        Some(last_sep) => location[..=last_sep].to_string(),
        None => location.to_string(),
    }
}

/// Whether `candidate` parses as an absolute URL.
pub fn is_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

fn forward_slashes(input: &str) -> Cow<'_, str> {
    if input.contains('\\') {
        Cow::Owned(input.replace('\\', "/"))
    } else {
        Cow::Borrowed(input)
    }
}

/// Recognize `./x`, `../x`, `/x`, `.` and `..`. The bare dot forms are
/// padded with a trailing slash.
fn as_path(input: &str) -> Option<Cow<'_, str>> {
    match input {
        "." | ".." => Some(Cow::Owned(format!("{input}/"))),
        _ if input.starts_with("./") || input.starts_with("../") || input.starts_with('/') => {
            Some(Cow::Borrowed(input))
        }
        _ => None,
    }
}

fn join(path: &str, base: &str) -> String {
    let parts = base::split(base);

    if path.starts_with('/') {
        let root = parts.root.strip_suffix('/').unwrap_or(&*parts.root);
        return format!("{root}{path}");
    }

    let dir_end = parts.pathname.rfind('/').map_or(0, |sep| sep + 1);
    let segmented = format!("{}{path}", &parts.pathname[..dir_end]);
    format!("{}{}", parts.root, normalize_segments(&segmented))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_against_directory() {
        assert_eq!(
            resolve_url("./a", "http://x/y/").as_deref(),
            Some("http://x/y/a")
        );
        assert_eq!(
            resolve_url("../a", "http://x/y/z/").as_deref(),
            Some("http://x/y/a")
        );
    }

    #[test]
    fn relative_against_file_drops_last_segment() {
        assert_eq!(
            resolve_url("./dep.js", "http://x/app/main.js").as_deref(),
            Some("http://x/app/dep.js")
        );
    }

    #[test]
    fn bare_dots_are_padded() {
        assert_eq!(
            resolve_url(".", "http://x/y/z.js").as_deref(),
            Some("http://x/y/")
        );
        assert_eq!(
            resolve_url("..", "http://x/y/z.js").as_deref(),
            Some("http://x/")
        );
    }

    #[test]
    fn scheme_input_keeps_backslashes() {
        assert_eq!(
            resolve_url("http://a\\b", "http://x/").as_deref(),
            Some("http://a\\b")
        );
        assert_eq!(
            resolve_url(".\\a\\b.js", "http://x/y/").as_deref(),
            Some("http://x/y/a/b.js")
        );
    }

    #[test]
    fn bare_specifier_is_not_resolved() {
        assert_eq!(resolve_url("lodash", "http://x/y/"), None);
        assert_eq!(resolve_url("lodash/fp", "http://x/y/"), None);
    }

    #[test]
    fn bare_retry_as_relative() {
        assert_eq!(
            resolve_url_or_relative("lodash/", "http://x/y/"),
            "http://x/y/lodash/"
        );
        assert_eq!(
            resolve_url_or_relative("http://cdn/", "http://x/y/"),
            "http://cdn/"
        );
    }

    #[test]
    fn document_base_prefers_base_href() {
        assert_eq!(
            document_base_url(Some("http://cdn/root/"), "http://x/y/index.html"),
            "http://cdn/root/"
        );
        assert_eq!(
            document_base_url(None, "http://x/y/index.html?q=1#frag"),
            "http://x/y/"
        );
        assert_eq!(document_base_url(Some(""), "http://x/a"), "http://x/");
    }

    #[test]
    fn url_validity() {
        assert!(is_url("https://example.com/a.js"));
        assert!(is_url("file:///tmp/"));
        assert!(!is_url("./a.js"));
        assert!(!is_url("lodash"));
    }
}
