//! Route URL handle bound to one resolved base.

use serde::Serialize;
use url::Url;

use crate::api::Route;
use crate::base_url::BaseUrl;
use crate::config::{ConfigSource, EnvSource};
use crate::error::ApiUrlError;
use crate::util::build_url;

/// Builds request URLs against a base resolved once, at construction.
///
/// Use [`crate::build_request_url`] instead when every call should see the
/// current environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRoutes {
    base: BaseUrl,
}

impl ApiRoutes {
    pub fn new(base: BaseUrl) -> Self {
        Self { base }
    }

    /// Resolve the base from the `VITE_API_URL` environment variable.
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource)
    }

    pub fn from_source<S: ConfigSource>(source: &S) -> Self {
        Self::new(BaseUrl::from_source(source))
    }

    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    pub fn url(&self, endpoint: &str) -> String {
        build_url(self.base.as_str(), endpoint)
    }

    /// Build the URL and append `query` form-encoded. Nothing is appended
    /// when the query encodes to an empty string.
    pub fn url_with_query<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &T,
    ) -> Result<String, ApiUrlError> {
        let mut url = self.url(endpoint);
        let encoded = serde_urlencoded::to_string(query)?;
        if !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }
        Ok(url)
    }

    pub fn route_url(&self, route: Route) -> String {
        self.url(route.path())
    }

    /// Parse the built URL into a [`Url`], for HTTP clients that need an
    /// absolute one. Fails for relative bases such as the default `/api`.
    pub fn absolute_url(&self, endpoint: &str) -> Result<Url, ApiUrlError> {
        if !self.base.is_absolute() {
            return Err(ApiUrlError::RelativeBase(self.base.to_string()));
        }
        Ok(Url::parse(&self.url(endpoint))?)
    }
}
