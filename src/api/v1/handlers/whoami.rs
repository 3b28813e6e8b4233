/*
 * Responsibility
 * - GET /whoami: echo back which key the request was made with
 * - Only the fingerprint leaves the server, never the key itself
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub key_fingerprint: String,
    pub key_length: usize,
}

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        key_fingerprint: ctx.fingerprint(),
        key_length: ctx.key().len(),
    })
}
