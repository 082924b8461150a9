// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button)
// - toolbar.rs: Header region and filter button row
// - item.rs: Food item display components (ItemCard, CardGrid)

pub mod common;
pub mod toolbar;
pub mod item;

// Re-export commonly used components for convenience
pub use common::*;
pub use toolbar::*;
pub use item::*;
