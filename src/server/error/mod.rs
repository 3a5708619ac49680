//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError`
//! enum serves as the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` for automatic error handling in API
//! endpoints.
//!
//! Domain errors come in four client-visible classes: validation failures
//! (400), state-precondition conflicts (409), missing or unowned entities
//! (404) and authentication/authorization failures (401/403). Storage-layer
//! constraint violations are reported as a generic conflict without exposing
//! constraint names; everything else is logged server-side and returned as an
//! opaque 500.

pub mod auth;
pub mod config;
pub mod payment;
pub mod registry;
pub mod reservation;
pub mod signup;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, payment::PaymentError, registry::RegistryError,
        reservation::ReservationError, signup::SignupError,
    },
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors handle
/// their own response mapping; the generic variants provide standard status
/// codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized, 403 Forbidden, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Signup validation error.
    #[error(transparent)]
    SignupErr(#[from] SignupError),

    /// Matriculation registry precondition error.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Reservation engine precondition error.
    #[error(transparent)]
    ReservationErr(#[from] ReservationError),

    /// Payment ledger precondition error.
    #[error(transparent)]
    PaymentErr(#[from] PaymentError),

    /// Database operation error from SeaORM.
    ///
    /// Uniqueness and foreign-key violations map to 409 Conflict with a
    /// generic message; anything else results in a logged 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket binding or accept error at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// State precondition error.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to
    /// the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::SignupErr(err) => err.into_response(),
            Self::RegistryErr(err) => err.into_response(),
            Self::ReservationErr(err) => err.into_response(),
            Self::PaymentErr(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "A record with these values already exists.".to_string(),
                    }),
                )
                    .into_response(),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "The operation conflicts with records that depend on this one."
                            .to_string(),
                    }),
                )
                    .into_response(),
                _ => InternalServerError(err).into_response(),
            },
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic body to the client so
/// internal details never leak through the API.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
