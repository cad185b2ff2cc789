use tracing::trace;

use crate::base_url::BaseUrl;
use crate::config::{ConfigSource, EnvSource};
use crate::endpoint::Endpoint;

/// Join `base` and `endpoint` with exactly one `/` between them.
///
/// A base ending in `/api` is used as is. Otherwise one trailing `/` is
/// dropped from the base before appending.
pub fn build_url(base: &str, endpoint: &str) -> String {
    let endpoint = Endpoint::new(endpoint);
    let base = if base.ends_with("/api") {
        base
    } else {
        base.strip_suffix('/').unwrap_or(base)
    };
    let url = format!("{base}{endpoint}");
    trace!(%url, "built request URL");
    url
}

/// Build a request URL against the base configured in the environment.
///
/// The environment is read on every call.
pub fn build_request_url(endpoint: &str) -> String {
    build_request_url_with(&EnvSource, endpoint)
}

/// Same as [`build_request_url`], reading the override from `source`.
pub fn build_request_url_with<S: ConfigSource>(source: &S, endpoint: &str) -> String {
    let base = BaseUrl::from_source(source);
    build_url(base.as_str(), endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MapSource, API_URL_ENV};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api", "/auth/login", "/api/auth/login")]
    #[case("/api", "auth/login", "/api/auth/login")]
    #[case("/api", "", "/api/")]
    #[case("https://example.com/api/", "/users", "https://example.com/api/users")]
    #[case("https://example.com/api", "/users", "https://example.com/api/users")]
    #[case("https://example.com", "/users", "https://example.com/users")]
    #[case("https://example.com/", "users", "https://example.com/users")]
    #[case("https://example.com/", "", "https://example.com/")]
    #[case("https://example.com//", "/x", "https://example.com//x")]
    #[case("https://x/api", "/api/v", "https://x/api/api/v")]
    #[case("/backend/", "/users", "/backend/users")]
    fn joins(#[case] base: &str, #[case] endpoint: &str, #[case] expected: &str) {
        assert_eq!(build_url(base, endpoint), expected);
    }

    #[test]
    fn without_override_uses_relative_api() {
        let source = MapSource::new();
        assert_eq!(build_request_url_with(&source, "/auth/login"), "/api/auth/login");
        assert_eq!(build_request_url_with(&source, "auth/login"), "/api/auth/login");
    }

    #[test]
    fn with_override() {
        let source = MapSource::new().with(API_URL_ENV, "https://example.com/api/");
        assert_eq!(
            build_request_url_with(&source, "/users"),
            "https://example.com/api/users"
        );

        let source = MapSource::new().with(API_URL_ENV, "https://example.com");
        assert_eq!(
            build_request_url_with(&source, "/users"),
            "https://example.com/users"
        );

        let source = MapSource::new().with(API_URL_ENV, "   ");
        assert_eq!(build_request_url_with(&source, "/users"), "/api/users");
    }

    proptest! {
        #[test]
        fn leading_slash_is_optional(endpoint in "[a-z0-9-]{1,8}(/[a-z0-9-]{1,8}){0,3}") {
            let with_slash = format!("/{endpoint}");
            prop_assert_eq!(build_url("/api", &endpoint), build_url("/api", &with_slash));
        }

        #[test]
        fn plain_host_gets_one_separator(
            host in "[a-z]{1,10}\\.(com|org|net)",
            trailing in proptest::bool::ANY,
            endpoint in "/?[a-z]{1,8}",
        ) {
            let base = if trailing {
                format!("https://{host}/")
            } else {
                format!("https://{host}")
            };
            let url = build_url(&base, &endpoint);
            let path = endpoint.trim_start_matches('/');
            prop_assert_eq!(url, format!("https://{host}/{path}"));
        }

        #[test]
        fn api_suffix_is_not_repeated(
            host in "[a-z]{1,10}\\.com",
            trailing in proptest::bool::ANY,
            endpoint in "[a-z]{1,8}",
        ) {
            let base = if trailing {
                format!("https://{host}/api/")
            } else {
                format!("https://{host}/api")
            };
            prop_assert_eq!(build_url(&base, &endpoint), format!("https://{host}/api/{endpoint}"));
        }
    }
}
