use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reservation engine precondition failures.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// The student already holds a pending reservation.
    #[error("Student {0} already has a pending reservation")]
    DuplicatePending(i32),

    /// The requested move-in date lies in the past.
    #[error("Move-in date {0} is in the past")]
    PastDate(chrono::NaiveDate),

    /// No room with the given id is currently available.
    ///
    /// Covers both a nonexistent room and a room consumed by a concurrent
    /// reservation; the availability check and the status flip are a single
    /// conditional update, so the loser of a race lands here.
    #[error("Room {0} not found or not available")]
    RoomUnavailable(i32),

    /// Cancellation requested for a reservation that is already terminal.
    #[error("Reservation {0} is not in a cancellable state")]
    NotCancellable(i32),
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicatePending(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "You already have a pending reservation. Only one is allowed at a time."
                        .to_string(),
                }),
            )
                .into_response(),
            Self::PastDate(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "You cannot reserve for a past date.".to_string(),
                }),
            )
                .into_response(),
            Self::RoomUnavailable(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Room not found or already taken.".to_string(),
                }),
            )
                .into_response(),
            Self::NotCancellable(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Only pending or confirmed reservations can be cancelled.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
