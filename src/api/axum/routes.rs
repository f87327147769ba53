use axum::routing::post;
use axum::Router;

use super::handlers;
use crate::invites::InviteRegistry;
use crate::jwt::JwtService;
use crate::repository::{CapacityRepository, PrincipalRepository};

/// Shared state for the HTTP layer: the two repositories plus the
/// injected invite mapping and token codec.
#[derive(Clone)]
pub struct AppState<P, C> {
    pub principals: P,
    pub capacity: C,
    pub invites: InviteRegistry,
    pub jwt: JwtService,
}

/// Public authentication endpoints.
pub fn auth_routes<P, C>() -> Router<AppState<P, C>>
where
    P: PrincipalRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<P, C>))
        .route("/login", post(handlers::login::<P, C>))
        .route("/validate-invite", post(handlers::validate_invite::<P, C>))
}

/// Bearer-gated class endpoints.
pub fn class_routes<P, C>() -> Router<AppState<P, C>>
where
    P: Clone + Send + Sync + 'static,
    C: CapacityRepository + Clone + Send + Sync + 'static,
{
    Router::new().route("/{id}/reserve", post(handlers::reserve_slot::<P, C>))
}
