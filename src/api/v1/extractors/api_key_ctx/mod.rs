/*!
 * API key context extractor
 *
 * Responsibility:
 * - Hand the key extracted by the middleware (ApiKeyCtx) to handlers
 * - axum glue lives in core, the type itself in types
 *
 * Public API:
 * - ApiKeyCtx
 * - ApiKeyCtxExtractor
 */

mod core;
mod types;

pub use core::ApiKeyCtxExtractor;
pub use types::ApiKeyCtx;
