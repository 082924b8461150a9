// web_app/catalog.rs - Outbound client for the item catalog endpoint
//
// The catalog is read once per page construction. Any failure is logged
// and collapses into an empty item sequence.

use std::sync::Mutex;
use std::sync::OnceLock;

use crate::web_app::config::StorefrontConfig;
use crate::web_app::error::CatalogError;
use crate::web_app::model::FoodItem;

static CLIENT: OnceLock<CatalogClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<CatalogClient>> = Mutex::new(None);

/// HTTP client bound to one catalog endpoint
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GET against the endpoint and decode the item array
    ///
    /// No body, headers, query parameters or timeout are added. A non-2xx
    /// status is a failure even when the body would decode.
    pub async fn fetch_items(&self) -> Result<Vec<FoodItem>, CatalogError> {
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_items(&body)
    }

    /// Fetch the items, swallowing every failure into an empty sequence
    pub async fn load_items(&self) -> Vec<FoodItem> {
        match self.fetch_items().await {
            Ok(items) => {
                tracing::info!(endpoint = %self.endpoint, count = items.len(), "Loaded food items");
                items
            }
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, "Error fetching food items: {}", e);
                Vec::new()
            }
        }
    }
}

/// Decode a catalog payload
///
/// The payload must be a JSON array of item objects. Missing fields are
/// tolerated, wrongly typed ones reject the whole payload.
pub fn parse_items(body: &str) -> Result<Vec<FoodItem>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// Register the process-wide catalog client
pub fn init_client(client: CatalogClient) {
    tracing::info!(endpoint = %client.endpoint, "Initializing catalog client");
    if CLIENT.set(client).is_err() {
        tracing::warn!("Catalog client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: CatalogClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Get the registered catalog client, preferring a test override
pub fn get_client() -> Option<CatalogClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Catalog client is not initialized");
    }
    client
}
