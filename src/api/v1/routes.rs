/*
 * Responsibility
 * - URL layout of v1
 * - Decide which routes sit behind require_api_key (route_layer)
 */
use axum::{Router, middleware::from_fn, routing::get};

use crate::api::v1::handlers::{health::health, whoami::whoami};
use crate::middleware::auth::require_api_key;

pub fn routes() -> Router {
    let protected = Router::new()
        .route("/whoami", get(whoami))
        .route_layer(from_fn(require_api_key));

    Router::new().route("/health", get(health)).merge(protected)
}
