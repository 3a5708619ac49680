use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The caller either never logged in or their session expired. Results
    /// in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    NotAuthenticated,

    /// The session references a user id that no longer exists.
    ///
    /// Can happen when an account is deleted while a session for it is
    /// still alive. Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Username or password did not match.
    #[error("Login failed for '{0}'")]
    InvalidCredentials(String),

    /// The account exists but does not carry the student role.
    ///
    /// Admin accounts authenticate through the same endpoint but are not
    /// allowed to act as students.
    #[error("Account '{0}' is not a student account")]
    NotAStudent(String),

    /// The authenticated user lacks a required permission.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// The authenticated identity has no student profile.
    #[error("User {0} has no student profile")]
    StudentProfileMissing(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Internal messages are logged at debug level; client-facing bodies stay
/// generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password.".to_string(),
                }),
            )
                .into_response(),
            Self::NotAStudent(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied! This account is not a student account.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied.".to_string(),
                }),
            )
                .into_response(),
            Self::StudentProfileMissing(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "No student profile matches this user.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
