//! HTTP handlers for the authentication and reservation endpoints.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use super::error::AppError;
use super::middleware::extract_bearer_token;
use super::routes::AppState;
use crate::actions::{LoginAction, LoginRequest, RegisterAction, RegisterRequest, ReserveSlotAction};
use crate::api::{
    InviteValidationResponse, LoginResponse, MessageResponse, RegisterResponse,
    ValidateInviteRequest,
};
use crate::guard::RoleGuard;
use crate::repository::{CapacityRepository, PrincipalRepository};
use crate::roles::Role;

/// Roles admitted to slot reservation.
const RESERVING_ROLES: [Role; 3] = [Role::Member, Role::Trainer, Role::Admin];

/// Register a new principal. An invite token in the payload grants an
/// elevated role; omitting it grants the default role.
///
/// POST /auth/register
pub async fn register<P, C>(
    State(state): State<AppState<P, C>>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError>
where
    P: PrincipalRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    let action = RegisterAction::new(state.principals, state.invites, state.jwt);
    let registration = action.execute(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            principal_id: registration.principal.id,
            role: registration.principal.role,
            message: format!("User registered as {}", registration.principal.role),
            access_token: registration.token,
        }),
    ))
}

/// Authenticate by email and password.
///
/// POST /auth/login
pub async fn login<P, C>(
    State(state): State<AppState<P, C>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError>
where
    P: PrincipalRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    let action = LoginAction::new(state.principals, state.jwt);
    let login = action.execute(body).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            message: "successful login!".to_owned(),
            access_token: login.token,
        }),
    ))
}

/// Check whether an invite token is recognized, without registering.
///
/// POST /auth/validate-invite
pub async fn validate_invite<P, C>(
    State(state): State<AppState<P, C>>,
    Json(body): Json<ValidateInviteRequest>,
) -> impl IntoResponse
where
    P: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    match state.invites.lookup(&body.token) {
        Some(role) => (
            StatusCode::OK,
            Json(InviteValidationResponse {
                valid: true,
                role: Some(role),
            }),
        ),
        None => (
            StatusCode::BAD_REQUEST,
            Json(InviteValidationResponse {
                valid: false,
                role: None,
            }),
        ),
    }
}

/// Reserve one slot in a class. Requires a bearer token with a reserving
/// role; answers 409 once the class is fully booked.
///
/// POST /classes/{id}/reserve
pub async fn reserve_slot<P, C>(
    State(state): State<AppState<P, C>>,
    Path(class_id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError>
where
    P: Clone + Send + Sync + 'static,
    C: CapacityRepository + Clone + Send + Sync + 'static,
{
    let guard = RoleGuard::new(state.jwt, RESERVING_ROLES)?;
    let action = ReserveSlotAction::new(state.capacity, guard);

    let bearer = extract_bearer_token(&headers);
    if action.execute(bearer.as_deref(), &class_id).await? {
        Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: format!("slot reserved in {class_id}"),
            }),
        ))
    } else {
        Ok((
            StatusCode::CONFLICT,
            Json(MessageResponse {
                message: "class is fully booked".to_owned(),
            }),
        ))
    }
}
