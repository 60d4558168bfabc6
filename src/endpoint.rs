//! Endpoint resolution across the three deployment topologies.
//!
//! One build artifact serves three shapes: a hosted preview sandbox, local
//! development pointed at a managed backend, and an arbitrary self-hosted
//! origin. Resolution always succeeds; a misconfigured environment produces
//! a URL that fails at fetch time, where the fetcher's fallback absorbs it.

use crate::config::{DeploymentConfig, PageContext};

/// Path prefix on the managed backend.
pub const MANAGED_FUNCTION_PATH: &str = "/functions/v1/generate-card";
/// Path prefix for same-origin self-hosted deployments.
pub const SELF_HOSTED_PATH: &str = "/api/card";

/// Where card requests go: a base URL plus a path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub base_url: String,
    pub api_path: String,
}

impl ResolvedEndpoint {
    /// Full request URL for an encoded query string.
    pub fn request_url(&self, query: &str) -> String {
        format!("{}{}?{}", self.base_url, self.api_path, query)
    }
}

/// True for hosts where the preview sandbox or a local dev server runs.
///
/// Matching is exact for loopback names and suffix-based for the sandbox
/// domain, so "mylocalhost.example.com" is not treated as a dev host.
fn is_preview_host(hostname: &str) -> bool {
    hostname == "localhost"
        || hostname == "127.0.0.1"
        || hostname == "lovable.app"
        || hostname.ends_with(".lovable.app")
}

/// Decide the endpoint for this deployment and page. First match wins:
///
/// 1. explicit override URL, assumed to be a complete endpoint;
/// 2. preview/dev host with a managed backend configured;
/// 3. same origin as the page, under `/api/card`.
pub fn resolve(deployment: &DeploymentConfig, page: &PageContext) -> ResolvedEndpoint {
    if let Some(api_url) = &deployment.api_url {
        return ResolvedEndpoint {
            base_url: api_url.trim_end_matches('/').to_string(),
            api_path: String::new(),
        };
    }

    if is_preview_host(&page.hostname) {
        if let Some(managed) = &deployment.managed_backend_url {
            return ResolvedEndpoint {
                base_url: managed.trim_end_matches('/').to_string(),
                api_path: MANAGED_FUNCTION_PATH.to_string(),
            };
        }
    }

    ResolvedEndpoint {
        base_url: page.origin.trim_end_matches('/').to_string(),
        api_path: SELF_HOSTED_PATH.to_string(),
    }
}
