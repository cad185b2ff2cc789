//! # API URL
//!
//! Resolves the base URL of the backend API and joins endpoint paths onto
//! it. The base comes from the `VITE_API_URL` environment variable when it is
//! set to something non-blank, and falls back to the relative path `/api`
//! otherwise. Joining keeps exactly one `/` between base and endpoint and
//! never repeats an `/api` suffix the base already has.
//!
//! ```
//! use api_url::build_url;
//!
//! assert_eq!(build_url("/api", "auth/login"), "/api/auth/login");
//! assert_eq!(build_url("https://example.com/api/", "/users"), "https://example.com/api/users");
//! ```
//!
//! Only strings are built here; nothing is sent over the network.

pub mod api;
pub mod base_url;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod util;

pub use api::{Route, RouteArea};
pub use base_url::{resolve_base_url, BaseUrl, DEFAULT_BASE_URL};
pub use client::*;
pub use config::{ConfigSource, EnvSource, MapSource, API_URL_ENV};
pub use endpoint::Endpoint;
pub use error::ApiUrlError;
pub use util::{build_request_url, build_request_url_with, build_url};
