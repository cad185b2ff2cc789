use std::fmt::{self, Display, Formatter};

/// A path fragment relative to the base URL, always starting with `/`.
///
/// Nothing else is checked: fragments carrying a scheme or a query string
/// pass through as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Normalise `path` to start with `/`. The empty string becomes `/`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.starts_with('/') {
            Self(path)
        } else {
            Self(format!("/{path}"))
        }
    }

    /// Join path segments with single slashes, e.g. `["auth", "login"]`
    /// gives `/auth/login`. Empty segments are skipped.
    pub fn from_segments(segments: &[&str]) -> Self {
        let mut path = String::new();
        for seg in segments {
            let seg = seg.trim_matches('/');
            if seg.is_empty() {
                continue;
            }
            path.push('/');
            path.push_str(seg);
        }
        Self::new(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Endpoint {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Endpoint {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
