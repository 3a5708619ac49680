use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::payment::CreatePaymentDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::payment::PaymentService,
        state::AppState,
    },
};

/// GET /api/payments - The caller's payments, newest first
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_user, student) = AuthGuard::new(&state.db, &session).require_student().await?;

    let payments = PaymentService::new(&state.db, state.entry_fee_minimum)
        .list_for(&student)
        .await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// POST /api/payments - Record a payment against a pending reservation
///
/// Any supplied payment date or status is ignored: the stored record gets
/// the reservation's move-in date and a paid status.
///
/// # Returns
/// - `201 Created`: the recorded payment
/// - `400 Bad Request`: amount below the entry-fee threshold
/// - `404 Not Found`: no owned pending reservation with that id
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, student) = AuthGuard::new(&state.db, &session).require_student().await?;

    let payment = PaymentService::new(&state.db, state.entry_fee_minimum)
        .create(&student, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}
