use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Realm advertised in the `WWW-Authenticate` challenge.
pub const AUTH_REALM: &str = "flightplan";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Request has no Authorization header")]
    MissingCredentials,

    /// `Authorization` header is not valid HTTP Basic credentials.
    ///
    /// # Fields
    /// - Why the header could not be decoded
    #[error("Malformed Authorization header: {0}")]
    MalformedCredentials(String),

    /// The user service rejected the username and password.
    ///
    /// # Fields
    /// - Username that failed authentication
    #[error("Invalid credentials for user '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant results in 401 Unauthorized carrying a Basic challenge. The
/// detailed reason is logged at debug level while the client only sees a generic
/// message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(
                header::WWW_AUTHENTICATE,
                format!("Basic realm=\"{}\"", AUTH_REALM),
            )],
            Json(ErrorDto {
                error: "Authentication required".to_string(),
            }),
        )
            .into_response()
    }
}
