use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::user::UserService,
};

/// Authentication gate run at the start of every flight plan handler.
///
/// Reads HTTP Basic credentials from the request headers and checks them against
/// the user service. Handlers call `require()` before touching storage.
pub struct AuthGuard<'a> {
    user_service: &'a dyn UserService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(user_service: &'a dyn UserService, headers: &'a HeaderMap) -> Self {
        Self {
            user_service,
            headers,
        }
    }

    /// Authenticates the caller.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials present and accepted
    /// - `Err(AppError::AuthErr(_))` - Credentials missing, malformed, or rejected
    pub async fn require(&self) -> Result<User, AppError> {
        let (username, password) = basic_credentials(self.headers)?;

        let Some(user) = self.user_service.authenticate(&username, &password).await else {
            return Err(AuthError::InvalidCredentials(username).into());
        };

        Ok(user)
    }
}

/// Extracts the username and password from an `Authorization: Basic` header.
fn basic_credentials(headers: &HeaderMap) -> Result<(String, String), AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;

    let (scheme, encoded) = value
        .split_once(' ')
        .ok_or_else(|| AuthError::MalformedCredentials("missing scheme".to_string()))?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::MalformedCredentials(format!(
            "unsupported scheme '{}'",
            scheme
        )));
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;
    let decoded =
        String::from_utf8(decoded).map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| AuthError::MalformedCredentials("missing ':' separator".to_string()))?;

    Ok((username.to_string(), password.to_string()))
}
