// web_app/pages/storefront.rs - Storefront page component
//
// Owns the one-shot catalog load and lays out the header, the filter row
// and the card grid.

use leptos::prelude::*;
use crate::web_app::model::FoodItem;
use crate::web_app::components::*;
use crate::web_app::server_fns::load_items;

/// The storefront page
///
/// The item list is loaded once, when the page is constructed. Until it
/// resolves, and for good if it fails, the grid stays empty.
#[component]
pub fn StorefrontPage() -> impl IntoView {
    // Unit source: the fetcher runs once and is never re-triggered
    let catalog = Resource::new(|| (), |_| load_items());

    view! {
        <StorefrontLayout>
            <Suspense fallback=|| view! { <CardGrid items=Vec::new() /> }>
                {move || {
                    let items = catalog.get().map(items_or_empty).unwrap_or_default();
                    view! { <CardGrid items=items /> }
                }}
            </Suspense>
        </StorefrontLayout>
    }
}

/// Page chrome around the card grid
#[component]
pub fn StorefrontLayout(
    /// The card grid region
    children: Children,
) -> impl IntoView {
    view! {
        <div class="storefront">
            <div class="container">
                <StorefrontHeader />
                <FilterBar />
            </div>
            {children()}
        </div>
    }
}

/// Resolve a load result, logging and discarding any failure
pub fn items_or_empty(result: Result<Vec<FoodItem>, ServerFnError>) -> Vec<FoodItem> {
    match result {
        Ok(items) => items,
        Err(e) => {
            leptos::logging::error!("Error fetching data: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_load_passes_items_through() {
        let items = vec![
            FoodItem { name: "Pizza".to_string(), ..FoodItem::default() },
            FoodItem { name: "Salad".to_string(), ..FoodItem::default() },
        ];
        assert_eq!(items_or_empty(Ok(items.clone())), items);
    }

    #[test]
    fn test_failed_load_falls_back_to_empty() {
        let result = Err(ServerFnError::new("connection refused"));
        assert!(items_or_empty(result).is_empty());
    }
}
