//! `Authorization: ApiKey <token>` enforcement → ApiKeyCtx in extensions.
//!
//! Only the shape of the header is checked here. Whether the key belongs to
//! anyone is up to the handler (or a later layer) that consumes `ApiKeyCtx`.

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;

/// Reject requests without a well-formed `ApiKey` authorization header.
///
/// ```ignore
/// let protected = Router::new()
///     .route("/whoami", get(whoami))
///     .route_layer(axum::middleware::from_fn(require_api_key));
/// ```
pub async fn require_api_key(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            // the header value may contain a credential; log the kind only
            tracing::warn!(error = %err, path = %req.uri().path(), "api key extraction failed");
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(fingerprint = %ctx.fingerprint(), "api key accepted");

    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
