use tracing::debug;

use super::matching::longest_prefix;
use super::{ImportMap, MappingTarget, PackageMap};

/// Outcome of looking a specifier up in an import map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    /// A rule matched and maps the specifier to `null`.
    Blocked,
    /// No rule applies and the specifier is not already a URL.
    Unmapped,
}

impl Resolution {
    pub fn into_option(self) -> Option<String> {
        match self {
            Resolution::Resolved(url) => Some(url),
            Resolution::Blocked | Resolution::Unmapped => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(url) => Some(url),
            Resolution::Blocked | Resolution::Unmapped => None,
        }
    }
}

/// Look `specifier` up in `map` on behalf of the module at `context_url`.
///
/// Scopes enclosing `context_url` are tried innermost first, then the
/// top-level imports. A blocked match ends the search. When nothing
/// matches, a specifier with a scheme passes through unchanged.
pub fn resolve(map: &ImportMap, specifier: &str, context_url: &str) -> Resolution {
    let mut scope = longest_prefix(context_url, &map.scopes);
    while let Some(root) = scope {
        if let Some(found) = map
            .scopes
            .get(root)
            .and_then(|packages| apply_packages(specifier, packages))
        {
            debug!(specifier, scope = root, resolution = ?found, "resolved in scope");
            return found;
        }
        scope = root
            .rfind('/')
            .and_then(|sep| longest_prefix(&root[..sep], &map.scopes));
    }

    if let Some(found) = apply_packages(specifier, &map.imports) {
        debug!(specifier, resolution = ?found, "resolved in imports");
        return found;
    }

    if specifier.contains(':') {
        Resolution::Resolved(specifier.to_string())
    } else {
        Resolution::Unmapped
    }
}

fn apply_packages(specifier: &str, packages: &PackageMap) -> Option<Resolution> {
    let key = longest_prefix(specifier, packages)?;
    let resolution = match packages.get(key)? {
        MappingTarget::Blocked => Resolution::Blocked,
        MappingTarget::Address(address) => {
            Resolution::Resolved(format!("{address}{}", &specifier[key.len()..]))
        }
    };
    Some(resolution)
}
