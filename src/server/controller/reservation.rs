use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::MessageDto, reservation::CreateReservationDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// GET /api/reservations - The caller's reservations
///
/// Each entry carries the derived period-final-payment date.
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_user, student) = AuthGuard::new(&state.db, &session).require_student().await?;

    let reservations = ReservationService::new(&state.db).list_for(&student).await?;

    Ok((StatusCode::OK, Json(reservations)))
}

/// POST /api/reservations - Reserve an available room
///
/// # Returns
/// - `201 Created`: the reservation, status derived from the move-in month
/// - `400 Bad Request`: move-in date in the past
/// - `409 Conflict`: a pending reservation already exists, or the room is
///   taken
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_user, student) = AuthGuard::new(&state.db, &session).require_student().await?;

    let reservation = ReservationService::new(&state.db)
        .create(&student, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// POST /api/admin/reservations/{id}/cancel - Cancel an open reservation
///
/// Releases the reserved room back to available.
pub async fn cancel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ReservationService::new(&state.db).cancel(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Reservation cancelled.".to_string(),
        }),
    ))
}
