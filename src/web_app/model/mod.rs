// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel from the catalog endpoint, through the server
// function, to the hydrated client.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One food entry as served by the catalog endpoint
///
/// Absent fields are tolerated and render empty. A field of the wrong JSON
/// type rejects the payload it belongs to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default)]
    pub name: String,
    /// Short description shown under the title
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Image URI or site-relative path (e.g. `/images/egg.png`)
    #[serde(default)]
    pub image: String,
    /// Category label, display only
    #[serde(default, rename = "type")]
    pub category: String,
}

impl FoodItem {
    /// Price exactly as supplied, prefixed with `"Price: $"`
    pub fn price_line(&self) -> String {
        match &self.price {
            Some(price) => format!("Price: ${}", price),
            None => "Price: $".to_string(),
        }
    }
}

/// Labels of the filter button row, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterLabel {
    All,
    Breakfast,
    Lunch,
    Dinner,
}

impl FilterLabel {
    pub const ROW: [FilterLabel; 4] = [
        FilterLabel::All,
        FilterLabel::Breakfast,
        FilterLabel::Lunch,
        FilterLabel::Dinner,
    ];
}

impl std::fmt::Display for FilterLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterLabel::All => write!(f, "All"),
            FilterLabel::Breakfast => write!(f, "Breakfast"),
            FilterLabel::Lunch => write!(f, "Lunch"),
            FilterLabel::Dinner => write!(f, "Dinner"),
        }
    }
}
