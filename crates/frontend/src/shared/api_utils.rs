//! API utilities for console-service communication
//!
//! Provides helper functions for constructing request URLs from configuration.

use crate::shared::config::ApiConfig;
use crate::shared::http::RequestScope;

/// Get the service origin for API requests
///
/// Uses the configured `base_url` when set, otherwise the origin of the page
/// the console was served from.
///
/// # Returns
/// - Origin like "http://localhost:8080" without a trailing slash
/// - Empty string if neither is available (relative URLs are then used)
pub fn api_base(config: &ApiConfig) -> String {
    let configured = config.base_url.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Join a request path onto the service origin
///
/// `Api` paths are placed under the configured root; `Service` paths are
/// resolved against the origin directly.
///
/// # Example
/// ```ignore
/// let url = api_url(&config, RequestScope::Api, "/wishlists/3");
/// // "http://localhost:8080/api/wishlists/3"
/// ```
pub fn api_url(config: &ApiConfig, scope: RequestScope, path: &str) -> String {
    join_url(&api_base(config), &config.root, scope, path)
}

fn join_url(base: &str, root: &str, scope: RequestScope, path: &str) -> String {
    let root = root.trim().trim_end_matches('/');
    match scope {
        RequestScope::Api if !root.is_empty() => {
            let root = root.trim_start_matches('/');
            format!("{}/{}{}", base, root, path)
        }
        _ => format!("{}{}", base, path),
    }
}
