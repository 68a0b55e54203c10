//! HTTP basic authentication gate.
//!
//! Short-circuits with 401 and a challenge header before the wrapped handler
//! runs. Credentials are an explicit [`AuthConfig`] handed in at router
//! construction; nothing here reads ambient state.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::config::AuthConfig;

const CHALLENGE: &str = r#"Basic realm="todos""#;

pub async fn basic_auth_middleware(
    State(auth): State<AuthConfig>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(decode_basic)
        .map(|(username, password)| check_credentials(&auth, &username, &password))
        .unwrap_or(false);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, CHALLENGE)],
        )
            .into_response();
    }

    next.run(request).await
}

/// Decode an `Authorization: Basic <base64>` header into (user, password).
fn decode_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (username, password) = credentials.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Compare the presented pair against the configured username and
/// password digest.
fn check_credentials(auth: &AuthConfig, username: &str, password: &str) -> bool {
    let digest = hex::encode(Sha256::digest(password.as_bytes()));
    username == auth.username && digest == auth.password_sha256
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_auth() -> AuthConfig {
        AuthConfig {
            username: "test".into(),
            // sha256("secret")
            password_sha256: "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
                .into(),
        }
    }

    #[test]
    fn decodes_well_formed_header() {
        // base64("test:secret")
        let decoded = decode_basic("Basic dGVzdDpzZWNyZXQ=").unwrap();
        assert_eq!(decoded, ("test".to_string(), "secret".to_string()));
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(decode_basic("Bearer abc").is_none());
        assert!(decode_basic("Basic !!!not-base64!!!").is_none());
        // no colon separator: base64("nocolon")
        assert!(decode_basic("Basic bm9jb2xvbg==").is_none());
    }

    #[test]
    fn accepts_matching_credentials() {
        assert!(check_credentials(&test_auth(), "test", "secret"));
    }

    #[test]
    fn rejects_wrong_user_or_password() {
        assert!(!check_credentials(&test_auth(), "test", "wrong"));
        assert!(!check_credentials(&test_auth(), "admin", "secret"));
    }
}
