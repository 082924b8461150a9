// web_app/pages/mod.rs - Page components module
//
// - StorefrontPage: the single storefront page

pub mod storefront;

// Re-export page components
pub use storefront::StorefrontPage;
