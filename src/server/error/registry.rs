use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Matriculation registry precondition failures.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The code is absent from the pre-issued registry.
    #[error("Matriculation code '{0}' not found in the registry")]
    CodeNotFound(String),

    /// The entry is flagged used and a student profile with the code exists.
    #[error("Matriculation code '{0}' is already linked to an account")]
    AlreadyLinked(String),

    /// The entry is flagged used but no student profile carries the code.
    ///
    /// An anomalous registry state: the flag was consumed without a profile
    /// being created. Surfaced as-is so an administrator can reset it.
    #[error("Matriculation code '{0}' is flagged used without a linked profile")]
    AlreadyUsed(String),

    /// Deletion requested for an entry whose code has been consumed.
    #[error("Matriculation entry {0} is used and cannot be deleted")]
    DeleteUsed(i32),
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        match self {
            Self::CodeNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Matriculation code not found in the registry, signup not allowed."
                        .to_string(),
                }),
            )
                .into_response(),
            Self::AlreadyLinked(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "This matriculation code already has an account.".to_string(),
                }),
            )
                .into_response(),
            Self::AlreadyUsed(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Matriculation code already used.".to_string(),
                }),
            )
                .into_response(),
            Self::DeleteUsed(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "A used matriculation entry cannot be deleted.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
