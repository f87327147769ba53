//! Axum adapter: routes, handlers and error mapping.

mod error;
mod handlers;
mod middleware;
mod routes;

pub use error::AppError;
pub use middleware::extract_bearer_token;
pub use routes::{auth_routes, class_routes, AppState};
