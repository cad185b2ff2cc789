//! Where the base URL override comes from.
//!
//! The override is a single environment-style value, [`API_URL_ENV`]. Reads
//! go through [`ConfigSource`] so the process environment can be swapped for
//! an in-memory map in tests or when embedding.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ApiUrlError;

/// Name of the variable carrying the base URL override.
pub const API_URL_ENV: &str = "VITE_API_URL";

/// A key/value lookup for configuration strings.
pub trait ConfigSource {
    /// Fetch the raw value for `key`, untrimmed.
    fn get(&self, key: &str) -> Option<String>;

    /// The raw base URL override, if any.
    fn api_url(&self) -> Option<String> {
        self.get(API_URL_ENV)
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Reads from the process environment. Non-UTF-8 values count as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// In-memory source.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Load variables from an explicit `.env` file into the process environment.
///
/// Variables already set in the environment win over the file.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<PathBuf, ApiUrlError> {
    let path = path.as_ref();
    dotenvy::from_filename(path).map_err(|source| ApiUrlError::EnvFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a `.env` from the working directory or its parents, if there is one.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded .env");
            Some(path)
        }
        Err(err) => {
            debug!(error = %err, "no .env loaded");
            None
        }
    }
}
