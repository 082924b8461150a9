// web_app/components/item.rs - Food item display components
//
// - ItemCard: one card per item record
// - CardGrid: the card container, one card per item in sequence order

use leptos::prelude::*;
use crate::web_app::model::FoodItem;
use super::common::Button;

/// Card for a single food item
///
/// Fields are rendered as received; a missing price leaves the price line
/// as a bare `"Price: $"`.
#[component]
pub fn ItemCard(
    /// The item to display
    item: FoodItem,
) -> impl IntoView {
    let price_line = item.price_line();
    let FoodItem { name, text, image, category, .. } = item;
    let alt = name.clone();

    view! {
        <div class="food-card">
            <img src=image alt=alt />
            <h3>{name}</h3>
            <p class="food-text">{text}</p>
            <p class="food-price">{price_line}</p>
            <Button class="btn-category">{category}</Button>
        </div>
    }
}

/// Grid of item cards
///
/// Items carry no stable identifier, so cards are keyed by their position.
/// The container is rendered even when there are no items.
#[component]
pub fn CardGrid(
    /// Items in display order
    items: Vec<FoodItem>,
) -> impl IntoView {
    view! {
        <div class="food-card-container">
            <For
                each=move || items.clone().into_iter().enumerate()
                key=|(index, _)| *index
                children=|(_, item)| view! { <ItemCard item=item /> }
            />
        </div>
    }
}
