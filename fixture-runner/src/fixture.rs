use importmap::ImportMap;
use serde::Deserialize;

/// One UrlResolver check. `expected: null` means the input is bare.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlCase {
    pub input: String,
    pub base: String,
    #[serde(default)]
    pub expected: Option<String>,
}

/// One lookup against the composed map. `expected: null` means no result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveCase {
    pub specifier: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub expected: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub description: Option<String>,
    /// Base URL every map in `maps` is composed against.
    #[serde(default)]
    pub base: Option<String>,
    /// Default importer URL for `cases`.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub maps: Vec<ImportMap>,
    /// Composition is expected to stop with an override conflict.
    #[serde(default)]
    pub conflict: bool,
    #[serde(default)]
    pub urls: Vec<UrlCase>,
    #[serde(default)]
    pub cases: Vec<ResolveCase>,
}

impl Fixture {
    pub fn needs_base(&self) -> bool {
        !self.maps.is_empty() || !self.cases.is_empty()
    }
}

pub fn parse_fixture(source: &str) -> Result<Fixture, serde_yaml::Error> {
    serde_yaml::from_str(source)
}
