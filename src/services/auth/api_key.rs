//! `Authorization: ApiKey <token>` extraction.
//!
//! This module is "core-only": it reads a header map and returns the token or a
//! typed error. It does not log and does not know about responses; middleware
//! decides how a failure is surfaced.

use axum::http::{HeaderMap, header};

/// Scheme token followed by its single-space separator.
const API_KEY_PREFIX: &str = "ApiKey ";

/// The credential that follows the `ApiKey ` prefix.
pub type ApiKey = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extract the API key from the `Authorization` header.
///
/// Only the first `Authorization` value is considered. `"ApiKey "` with nothing
/// after it yields an empty key, not an error.
pub fn get_api_key(headers: &HeaderMap) -> Result<ApiKey, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeader)?
        .to_str()
        .map_err(|_| ApiKeyError::MalformedHeader)?;

    parse_authorization(value).map(str::to_owned)
}

/// Split an `Authorization` header value into its API key.
///
/// Matching is exact: the scheme is case-sensitive and exactly one space must
/// follow it. Any further whitespace belongs to the key.
pub fn parse_authorization(value: &str) -> Result<&str, ApiKeyError> {
    value
        .strip_prefix(API_KEY_PREFIX)
        .ok_or(ApiKeyError::MalformedHeader)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn valid_api_key() {
        let headers = headers_with("ApiKey abcd1234");
        assert_eq!(get_api_key(&headers), Ok("abcd1234".to_string()));
    }

    #[test]
    fn no_auth_header() {
        let err = get_api_key(&HeaderMap::new()).unwrap_err();
        assert_eq!(err, ApiKeyError::NoAuthHeader);
        assert_eq!(err.to_string(), "no authorization header included");
    }

    #[test]
    fn missing_api_key_prefix_is_malformed() {
        let err = get_api_key(&headers_with("abcd1234")).unwrap_err();
        assert_eq!(err, ApiKeyError::MalformedHeader);
        assert_eq!(err.to_string(), "malformed authorization header");
    }

    #[test]
    fn empty_header_value_is_malformed_not_missing() {
        assert_eq!(
            get_api_key(&headers_with("")),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn empty_key_after_prefix_is_accepted() {
        assert_eq!(get_api_key(&headers_with("ApiKey ")), Ok(String::new()));
    }

    #[test]
    fn other_schemes_are_malformed() {
        for value in [
            "Bearer abcd1234",
            "Basic dXNlcjpwYXNz",
            "ApiKey",
            "apikey abcd1234",
            "ApiKeyabcd",
            " ApiKey abcd1234",
        ] {
            assert_eq!(
                get_api_key(&headers_with(value)),
                Err(ApiKeyError::MalformedHeader),
                "value: {value:?}"
            );
        }
    }

    #[test]
    fn key_keeps_everything_after_the_separator() {
        assert_eq!(parse_authorization("ApiKey  padded"), Ok(" padded"));
        assert_eq!(parse_authorization("ApiKey a b c"), Ok("a b c"));
    }

    #[test]
    fn header_name_lookup_is_case_insensitive_in_header_map() {
        let mut headers = HeaderMap::new();
        headers.insert("AUTHORIZATION", HeaderValue::from_static("ApiKey k"));
        assert_eq!(get_api_key(&headers), Ok("k".to_string()));
    }

    #[test]
    fn only_the_first_value_is_used() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Ok("first".to_string()));

        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("Bearer x"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn non_visible_ascii_value_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xffkey").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn repeated_calls_return_the_same_result() {
        let headers = headers_with("ApiKey abcd1234");
        assert_eq!(get_api_key(&headers), get_api_key(&headers));
        assert_eq!(get_api_key(&HeaderMap::new()), get_api_key(&HeaderMap::new()));
    }
}
