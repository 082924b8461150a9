// web_app/config.rs - Storefront settings
//
// Values come from the process environment, optionally seeded from a
// `.env` file. Leptos' own site settings live in Cargo.toml metadata.

use std::env;

use tracing::{info, warn};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000";
pub const ENDPOINT_VAR: &str = "FOODY_ZONE_ENDPOINT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// URL of the item catalog, fetched with a bare GET
    pub endpoint: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load from `.env` and the environment
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = match lookup(ENDPOINT_VAR) {
            Some(value) if is_http_url(value.trim()) => value.trim().to_string(),
            Some(value) => {
                warn!("Invalid {ENDPOINT_VAR} value '{value}', using default: {DEFAULT_ENDPOINT}");
                DEFAULT_ENDPOINT.to_string()
            }
            None => {
                info!("{ENDPOINT_VAR} not set, using default: {DEFAULT_ENDPOINT}");
                DEFAULT_ENDPOINT.to_string()
            }
        };

        Self { endpoint }
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
