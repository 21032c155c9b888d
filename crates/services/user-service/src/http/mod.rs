//! HTTP layer - handlers, routes and application state.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_app;
pub use state::AppState;
