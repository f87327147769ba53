use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;

/// Claims embedded in a bearer token.
///
/// Tamper-evident: any mutation after issuance invalidates the signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the identity used to authenticate, typically the email.
    pub sub: String,
    /// Role granted to the principal at registration.
    #[serde(default)]
    pub role: Role,
    /// Principal id.
    pub pid: Uuid,
    /// Issued at time (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}
