use std::borrow::Cow;

/// A base URL split into the part kept verbatim and the pathname that
/// relative input is joined onto.
pub struct BaseParts<'a> {
    /// Scheme and authority, including the `/` that separates them from the
    /// pathname when the URL has one.
    pub root: Cow<'a, str>,
    pub pathname: &'a str,
}

/// Drop any `#fragment` and `?query` from `url`.
pub fn strip_query_and_fragment(url: &str) -> &str {
    let url = url.split('#').next().unwrap_or(url);
    url.split('?').next().unwrap_or(url)
}

/// The scheme of `url` up to and including `:`, or `""` when there is none.
pub fn scheme(url: &str) -> &str {
    url.find(':').map_or("", |colon| &url[..=colon])
}

pub fn split(base: &str) -> BaseParts<'_> {
    let scheme = scheme(base);
    let rest = &base[scheme.len()..];

    let Some(after_slashes) = rest.strip_prefix("//") else {
        let split = scheme.len() + usize::from(rest.starts_with('/'));
        return BaseParts {
            root: Cow::Borrowed(&base[..split]),
            pathname: &base[split..],
        };
    };

    if scheme == "file:" {
        let split = scheme.len() + 2 + usize::from(after_slashes.starts_with('/'));
        return BaseParts {
            root: Cow::Borrowed(&base[..split]),
            pathname: &base[split..],
        };
    }

    match after_slashes.find('/') {
        Some(slash) => {
            let split = scheme.len() + 2 + slash + 1;
            BaseParts {
                root: Cow::Borrowed(&base[..split]),
                pathname: &base[split..],
            }
        }
        None => BaseParts {
            root: Cow::Owned(format!("{base}/")),
            pathname: "",
        },
    }
}
