// web_app/mod.rs - Root module for the fragrance catalog web application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - filters/: Pure filter, pagination and search-state engine (no features)
// - timing.rs: Delayed-task scheduling behind a trait (no features)
// - hooks/: Leptos reactive adapters over filters/ (SSR and hydrate)
// - server_fns.rs: Server function declarations (both client and server)
// - api/: HTTP client for the external catalog API (api-client feature)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod filters;
pub mod model;
pub mod timing;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod hooks;

// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Catalog API access, usable without the web stack
#[cfg(feature = "api-client")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
