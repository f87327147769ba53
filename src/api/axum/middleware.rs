use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

/// Pulls the bearer token out of the `Authorization` header, if present
/// and well-formed. Only the claims codec ever decodes it.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(ToOwned::to_owned)
}
