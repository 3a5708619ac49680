use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum SignupError {
    /// Password and confirmation differ.
    ///
    /// Results in a 400 Bad Request response; the caller must correct the
    /// input and retry.
    #[error("Password and confirmation do not match")]
    PasswordMismatch,
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        match self {
            Self::PasswordMismatch => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "The two passwords do not match.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
