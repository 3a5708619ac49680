use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Payment ledger precondition failures.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// No pending reservation with the given id is owned by the caller.
    ///
    /// Also reported to the loser of a concurrent-payment race: the
    /// reservation left the awaiting-payment state before the status
    /// advance could be applied.
    #[error("No pending reservation {0} owned by student {1}")]
    ReservationNotFound(i32, i32),

    /// The amount is below the configured entry-fee threshold.
    #[error("Payment amount {amount} is below the minimum {minimum}")]
    InsufficientAmount { amount: Decimal, minimum: Decimal },
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::ReservationNotFound(_, _) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "No matching pending reservation was found.".to_string(),
                }),
            )
                .into_response(),
            Self::InsufficientAmount { minimum, .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!(
                        "The amount is insufficient. It must be at least {}.",
                        minimum
                    ),
                }),
            )
                .into_response(),
        }
    }
}
