/*
 * Responsibility
 * - The "authenticated request" context visible to handlers
 * - middleware extracts the key and stores it in request extensions;
 *   handlers only ever see this type
 *
 * Notes
 * - Looking the key up in a credential store is not done here
 */
use std::fmt;

use sha2::{Digest, Sha256};

use crate::services::auth::ApiKey;

/// Hex characters of the SHA-256 digest kept by `fingerprint()`.
const FINGERPRINT_LEN: usize = 16;

/// Context attached to requests that carried an `ApiKey` authorization header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyCtx {
    key: ApiKey,
}

impl ApiKeyCtx {
    pub fn new(key: ApiKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Short, stable identifier for logs and responses. Never log `key()` itself.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.key.as_bytes());
        let mut hex = hex::encode(digest);
        hex.truncate(FINGERPRINT_LEN);
        hex
    }
}

impl fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}
