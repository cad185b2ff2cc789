use std::path::PathBuf;

use thiserror::Error;

/// A unified error type for this library.
///
/// Resolving a base URL and joining an endpoint never fail; these variants
/// only come from the surfaces layered on top (env files, absolute parsing,
/// query strings and route lookups).
#[derive(Debug, Error)]
pub enum ApiUrlError {
    /// An explicitly requested `.env` file could not be loaded.
    #[error("Failed to load env file `{}`: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// An absolute URL was requested but the base is a relative path.
    #[error("Base URL `{0}` is relative, an absolute URL needs a scheme and host")]
    RelativeBase(String),

    /// The joined string did not parse as a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Query parameters could not be form-encoded.
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("Unknown route `{0}`")]
    UnknownRoute(String),
}
