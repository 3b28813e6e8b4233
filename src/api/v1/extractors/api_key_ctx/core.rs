use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::ApiKeyCtx;

/// Extractor that hands `ApiKeyCtx` to a handler.
/// Assumes `require_api_key` already inserted it into request extensions;
/// returns 401 when it is missing (route not behind the middleware).
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl<S> FromRequestParts<S> for ApiKeyCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyCtx>()
            .cloned()
            .map(ApiKeyCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
