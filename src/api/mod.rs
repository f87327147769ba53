//! HTTP-facing request/response types.
//!
//! The transport adapters (currently Axum, behind `axum_api`) share these
//! DTOs; the core actions never see them.

pub mod axum;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;
use crate::AuthError;

#[derive(Debug, Deserialize)]
pub struct ValidateInviteRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub principal_id: Uuid,
    pub role: Role,
    pub message: String,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct InviteValidationResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
