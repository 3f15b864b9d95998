/**
 * Session-Cookie Gate
 *
 * Protected routes take a [`SessionCookie`] argument. The extractor reads
 * the signed `sessionID` cookie and checks that it looks like a token this
 * server issues; otherwise the request is answered with 403 and the handler
 * never runs.
 *
 * Cookies are HMAC-signed with the key from `ServerConfig::cookie_key`.
 * A cookie with a missing or wrong signature is treated as absent.
 */

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use tower_cookies::{Cookies, Key};

use crate::backend::error::BackendError;

/// Name of the session cookie
pub const SESSION_COOKIE_NAME: &str = "sessionID";

/// Length of every issued session token
pub const SESSION_TOKEN_LEN: usize = 64;

/// Check the shape of a session token
///
/// A token is accepted when it is exactly 64 characters, has no spaces,
/// and is neither all ASCII letters nor all ASCII digits.
pub fn is_valid_session_token(token: &str) -> bool {
    !token.is_empty()
        && token.chars().count() == SESSION_TOKEN_LEN
        && !token.contains(' ')
        && !token.chars().all(|c| c.is_ascii_alphabetic())
        && !token.chars().all(|c| c.is_ascii_digit())
}

/// Session token taken from a request that passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie(pub String);

impl SessionCookie {
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| {
                tracing::error!("Cookie jar unavailable: {}", message);
                BackendError::state("Cookie jar unavailable")
            })?;

        let key = Key::from_ref(state);
        let token = cookies
            .signed(&key)
            .get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string());

        match token {
            Some(token) if is_valid_session_token(&token) => Ok(SessionCookie(token)),
            Some(_) => {
                tracing::warn!("Malformed session cookie on {}", parts.uri.path());
                Err(BackendError::MissingSessionCookie)
            }
            None => {
                tracing::warn!(
                    "Cookie was required for {} but no cookie was found",
                    parts.uri.path()
                );
                Err(BackendError::MissingSessionCookie)
            }
        }
    }
}
