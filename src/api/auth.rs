use crate::api::api_error::APIError;
use crate::api::server::AppState;
use crate::error::Error;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

const BEARER_PREFIX: &str = "Bearer ";

/// Extracting this proves the request carried `Authorization: Bearer <API_KEY>`.
pub(super) struct Authorized;

#[async_trait]
impl FromRequestParts<AppState> for Authorized {
    type Rejection = APIError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = state.config.require_api_key()?;
        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix(BEARER_PREFIX));

        match presented {
            Some(token) if tokens_match(token.as_bytes(), expected.as_bytes()) => Ok(Authorized),
            _ => {
                tracing::debug!("rejected unauthenticated request for {}", parts.uri.path());
                Err(Error::Unauthorized.into())
            }
        }
    }
}

/// Compares in time independent of where the first differing byte is. Only the length leaks.
fn tokens_match(presented: &[u8], expected: &[u8]) -> bool {
    presented.len() == expected.len()
        && presented
            .iter()
            .zip(expected)
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}
