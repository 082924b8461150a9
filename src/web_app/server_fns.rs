// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// This file must be compiled for BOTH ssr and hydrate features.

use leptos::prelude::*;
use crate::web_app::model::FoodItem;

#[cfg(feature = "ssr")]
fn catalog_client() -> Result<crate::web_app::catalog::CatalogClient, ServerFnError> {
    use crate::web_app::catalog::{self, CatalogClient};

    // Context first (set by tests or embedding servers), then the registry
    if let Some(client) = use_context::<CatalogClient>() {
        return Ok(client);
    }

    catalog::get_client().ok_or_else(|| ServerFnError::new("Catalog client not available"))
}

/// Load the storefront's food items
///
/// Catalog failures are already logged and swallowed into an empty list;
/// only a missing client surfaces as an error.
#[server(LoadItems, "/api")]
pub async fn load_items() -> Result<Vec<FoodItem>, ServerFnError> {
    let client = catalog_client()?;
    Ok(client.load_items().await)
}
