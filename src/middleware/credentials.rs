//! Credential extractor for Axum handlers.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::services::credentials::{CredentialStore, TOKEN_KEY};

/// Credentials the browser sent with the request.
///
/// The `token` cookie plays the role of the browser's local storage; an
/// `Authorization: Bearer` header is accepted as a fallback for API callers.
/// Extraction never fails: a missing token is reported by the fetch cycle.
#[derive(Debug, Clone)]
pub struct RequestCredentials {
    jar: CookieJar,
    bearer: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for RequestCredentials {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let bearer = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string);

        Ok(RequestCredentials { jar, bearer })
    }
}

impl CredentialStore for RequestCredentials {
    fn get(&self, key: &str) -> Option<String> {
        let stored = CredentialStore::get(&self.jar, key);
        if key == TOKEN_KEY {
            stored.or_else(|| self.bearer.clone())
        } else {
            stored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> RequestCredentials {
        let (mut parts, _) = request.into_parts();
        RequestCredentials::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn reads_token_cookie() {
        let creds = extract(
            Request::builder()
                .header("Cookie", "theme=dark; token=cookie-token")
                .body(())
                .unwrap(),
        )
        .await;
        assert_eq!(creds.bearer_token().as_deref(), Some("cookie-token"));
    }

    #[tokio::test]
    async fn falls_back_to_authorization_header() {
        let creds = extract(
            Request::builder()
                .header("Authorization", "Bearer header-token")
                .body(())
                .unwrap(),
        )
        .await;
        assert_eq!(creds.bearer_token().as_deref(), Some("header-token"));
    }

    #[tokio::test]
    async fn cookie_wins_over_header() {
        let creds = extract(
            Request::builder()
                .header("Cookie", "token=cookie-token")
                .header("Authorization", "Bearer header-token")
                .body(())
                .unwrap(),
        )
        .await;
        assert_eq!(creds.bearer_token().as_deref(), Some("cookie-token"));
    }

    #[tokio::test]
    async fn nothing_sent_means_no_token() {
        let creds = extract(Request::builder().body(()).unwrap()).await;
        assert!(creds.bearer_token().is_none());
    }
}
