//! Basic-auth gating applied before any routing.
//!
//! Every non-OPTIONS request must carry `Authorization: Basic
//! base64(username:password)` matching the configured static
//! credential pair. OPTIONS requests pass through so CORS preflights
//! never require credentials.

use crate::api::error::ApiError;
use crate::config::AuthConfig;
use axum::extract::{Request, State};
use axum::http::{Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Middleware enforcing the static basic-auth credential pair.
pub async fn require_basic_auth(
    State(credentials): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic);

    match presented {
        Some((username, password)) if credentials.matches(&username, &password) => {
            next.run(request).await
        }
        Some(_) => {
            tracing::warn!("rejected request with invalid credentials");
            unauthorized()
        }
        None => {
            tracing::warn!("rejected request with missing or malformed Authorization header");
            unauthorized()
        }
    }
}

/// Decodes a `Basic` scheme header value into its credential pair.
///
/// Returns `None` for any other scheme, undecodable base64, non-UTF-8
/// payloads, or payloads without a colon separator.
fn decode_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (username, password) = text.split_once(':')?;
    Some((username.to_owned(), password.to_owned()))
}

fn unauthorized() -> Response {
    ApiError::unauthorized("unauthorized: valid credentials are required").into_response()
}

#[cfg(test)]
mod tests {
    use super::decode_basic;
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use rstest::rstest;

    #[rstest]
    fn decode_basic_extracts_credential_pair() {
        let encoded = BASE64.encode("admin:s3cret");
        let header_value = format!("Basic {encoded}");
        assert_eq!(
            decode_basic(&header_value),
            Some(("admin".to_owned(), "s3cret".to_owned()))
        );
    }

    #[rstest]
    fn decode_basic_keeps_colons_in_password() {
        let encoded = BASE64.encode("admin:pass:with:colons");
        let header_value = format!("Basic {encoded}");
        assert_eq!(
            decode_basic(&header_value),
            Some(("admin".to_owned(), "pass:with:colons".to_owned()))
        );
    }

    #[rstest]
    #[case("Bearer abc123")]
    #[case("Basic !!!not-base64!!!")]
    #[case("Basic")]
    fn decode_basic_rejects_malformed_headers(#[case] header_value: &str) {
        assert_eq!(decode_basic(header_value), None);
    }

    #[rstest]
    fn decode_basic_rejects_payload_without_separator() {
        let encoded = BASE64.encode("no-separator");
        let header_value = format!("Basic {encoded}");
        assert_eq!(decode_basic(&header_value), None);
    }
}
