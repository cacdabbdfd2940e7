//! Client configuration baked in at build time.
//!
//! Values come from `option_env!` so the WASM bundle needs no runtime lookup:
//! - `TODO_API_BASE_URL`: REST API root (default `/api`)
//! - `TODO_PAGE_SIZE`: rows per list page (default 10, max 100)
//! - `TODO_TOAST_TTL_MS`: notification lifetime (default 4000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_TOAST_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub toast_ttl_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ClientConfig {
    /// Build from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_PAGE_SIZE"),
            option_env!("TODO_TOAST_TTL_MS"),
        )
    }

    fn from_values(base_url: Option<&str>, page_size: Option<&str>, toast_ttl_ms: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let page_size = parse_u32(page_size, DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let toast_ttl_ms = parse_u32(toast_ttl_ms, DEFAULT_TOAST_TTL_MS);
        Self { api_base_url, page_size, toast_ttl_ms }
    }
}

fn parse_u32(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).unwrap_or(default)
}

/// Process-wide configuration.
pub fn client_config() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_build_env)
}
