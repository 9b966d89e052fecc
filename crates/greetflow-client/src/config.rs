//! Connection settings for the greeting service.

use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

use crate::error::{ClientError, Result};

/// Environment variable holding the service base URL.
pub const BASE_URL_ENV: &str = "GREETFLOW_API_BASE_URL";

/// Environment variable holding the origin for relative requests.
pub const ORIGIN_ENV: &str = "GREETFLOW_ORIGIN";

/// Origin used when none is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Where the greeting service lives.
///
/// `base_url` is treated as an opaque prefix. An empty value means "same
/// origin": request paths stay relative and are resolved against `origin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Prefix prepended to API paths. Empty means same-origin.
    pub base_url: String,

    /// Origin that relative paths resolve against.
    pub origin: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl ClientSettings {
    /// Creates settings pointing at an explicit base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Loads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Applies values found through `lookup` on top of `self`.
    ///
    /// Unset variables leave the current value untouched.
    #[must_use]
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        if let Some(origin) = lookup(ORIGIN_ENV).filter(|o| !o.trim().is_empty()) {
            self.origin = origin;
        }
        self
    }

    /// Whether requests are issued as relative paths.
    #[must_use]
    pub fn is_same_origin(&self) -> bool {
        self.base_url.trim().is_empty()
    }

    /// Builds the request path for `path` exactly as the browser form would:
    /// `<base_url><path>`, or just `<path>` when the base is empty.
    #[must_use]
    pub fn request_path(&self, path: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        format!("{base}{path}")
    }

    /// Resolves `path` to an absolute URL.
    ///
    /// An absolute base is used as-is. Anything else, including an empty base
    /// or a path prefix such as `/greetflow`, resolves against `origin`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let target = self.request_path(path);
        match Url::parse(&target) {
            Ok(url) => Ok(url),
            Err(ParseError::RelativeUrlWithoutBase) => {
                let origin = Url::parse(self.origin.trim()).map_err(|e| {
                    ClientError::Transport(format!("invalid origin {:?}: {e}", self.origin))
                })?;
                origin.join(&target).map_err(|e| {
                    ClientError::Transport(format!("invalid request path {target:?}: {e}"))
                })
            }
            Err(e) => Err(ClientError::Transport(format!(
                "invalid service URL {target:?}: {e}"
            ))),
        }
    }
}
