/*
 * Responsibility
 * - Domain logic with no routing or response concerns (header parsing, etc.)
 * - Only `axum::http` types (HeaderMap) are used here
 */
pub mod auth;
