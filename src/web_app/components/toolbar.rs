// web_app/components/toolbar.rs - Header region and filter row
//
// Both are presentational: the search input and the filter buttons are
// rendered without any attached behaviour.

use leptos::prelude::*;
use crate::web_app::model::FilterLabel;
use super::common::Button;

pub const LOGO_PATH: &str = "/images/Foody Zone.svg";
pub const SEARCH_PLACEHOLDER: &str = "Search Food...";

/// Logo and search input
#[component]
pub fn StorefrontHeader() -> impl IntoView {
    view! {
        <section class="top-container">
            <div class="logo-container">
                <img src=LOGO_PATH alt="logo" />
            </div>
            <div class="search">
                <input type="text" placeholder=SEARCH_PLACEHOLDER />
            </div>
        </section>
    }
}

/// Static row of category filter buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    view! {
        <section class="lower-container">
            {FilterLabel::ROW
                .into_iter()
                .map(|label| {
                    let text = label.to_string();
                    view! { <Button>{text}</Button> }
                })
                .collect_view()}
        </section>
    }
}
