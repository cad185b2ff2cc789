use std::fmt::{self, Display, Formatter};

use tracing::debug;

use crate::config::{ConfigSource, EnvSource};
use crate::endpoint::Endpoint;
use crate::util::build_url;

/// Used when no override is configured. A reverse proxy in front of the
/// backend serves the API under this path on the same origin.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Whitespace as a browser's `String.prototype.trim` sees it: a byte order
/// mark counts, NEL (U+0085) does not.
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Pick the base URL: the trimmed override when it is non-blank, otherwise
/// [`DEFAULT_BASE_URL`].
pub fn resolve_base_url(configured: Option<&str>) -> String {
    match configured.map(|value| value.trim_matches(is_trimmed)) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            debug!("no base URL override, using {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        }
    }
}

/// A resolved base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn resolve(configured: Option<&str>) -> Self {
        Self(resolve_base_url(configured))
    }

    pub fn from_source<S: ConfigSource>(source: &S) -> Self {
        Self::resolve(source.api_url().as_deref())
    }

    /// Resolve from the `VITE_API_URL` environment variable.
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when no override was applied.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_BASE_URL
    }

    /// Whether the base carries a scheme (`https://host/...`) rather than
    /// being a path on the current origin.
    pub fn is_absolute(&self) -> bool {
        self.0.contains("://")
    }

    /// Append `endpoint` to this base.
    pub fn join(&self, endpoint: &Endpoint) -> String {
        build_url(&self.0, endpoint.as_str())
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl Display for BaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
