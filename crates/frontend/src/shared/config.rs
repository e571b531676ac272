//! Client configuration
//!
//! The API base is baked in at compile time through `CLOUD_API_BASE`
//! (e.g. `CLOUD_API_BASE=https://api.example.com trunk build`). Without it the
//! base is derived from the page location, with the backend on port 3000.

use leptos::prelude::*;

const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::resolve(option_env!("CLOUD_API_BASE"), super::api_utils::api_base)
    }

    fn resolve(override_base: Option<&str>, fallback: impl FnOnce() -> String) -> Self {
        let api_base = match override_base.map(str::trim) {
            Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
            _ => fallback(),
        };
        Self { api_base }
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.api_base)
    }
}

/// `{protocol}//{hostname}:3000`
pub fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Config provided by `App`, or a freshly resolved one outside of it
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}
