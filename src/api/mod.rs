//! API layer - HTTP handlers, middleware, extractors, and routes.
//!
//! Public routes are open; the back-office routes under `/api` go
//! through the session cookie middleware.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
