use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::MessageDto,
        room::{CreateRoomDto, RoomIdsDto, UpdateRoomDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::room::RoomService,
        state::AppState,
    },
};

/// GET /api/rooms - Rooms currently available for reservation
///
/// # Authentication
/// Requires a logged-in user (students browse before reserving).
pub async fn list_available(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rooms = RoomService::new(&state.db).list_available().await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// GET /api/admin/rooms - Full room catalog
pub async fn list_all(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let rooms = RoomService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// GET /api/admin/rooms/{id} - Room details
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(room)))
}

/// POST /api/admin/rooms - Add a room to the catalog
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// PUT /api/admin/rooms/{id} - Partially update a room
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::new(&state.db).update(id, dto).await?;

    Ok((StatusCode::OK, Json(room)))
}

/// DELETE /api/admin/rooms/{id} - Remove a room
///
/// # Returns
/// - `204 No Content`: the room was deleted
/// - `404 Not Found`: no room with that id
/// - `409 Conflict`: the room has reservations and is protected
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    RoomService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/rooms/available - Bulk-reset rooms to available
pub async fn mark_available(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<RoomIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let updated = RoomService::new(&state.db).mark_available(&dto.ids).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("{} room(s) marked available.", updated),
        }),
    ))
}
