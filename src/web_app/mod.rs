// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Food item records and filter labels (client and server)
// - config.rs: Environment-driven settings (SSR only)
// - error.rs: Catalog failure taxonomy (SSR only)
// - catalog.rs: Outbound client for the item endpoint (SSR only)
// - server_fns.rs: Server function declarations (both client and server)
// - components/: Presentational components (both SSR and hydrate)
// - pages/: The storefront page (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod error;

#[cfg(feature = "ssr")]
pub mod catalog;

// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
