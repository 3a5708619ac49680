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
        matriculation::{CreateMatriculationDto, MatriculationIdsDto, UpdateMatriculationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::matriculation::MatriculationService,
        state::AppState,
    },
};

/// GET /api/admin/matriculations - All registry entries
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entries = MatriculationService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// GET /api/admin/matriculations/{id} - Registry entry details
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = MatriculationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// POST /api/admin/matriculations - Pre-issue a matriculation code
///
/// New entries always start unconsumed; the `used` flag is not accepted
/// through this surface.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateMatriculationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = MatriculationService::new(&state.db).create(dto.code).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/admin/matriculations/{id} - Rewrite an entry's code
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateMatriculationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = MatriculationService::new(&state.db)
        .update(id, dto.code)
        .await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// DELETE /api/admin/matriculations/{id} - Remove an unconsumed entry
///
/// # Returns
/// - `204 No Content`: the entry was deleted
/// - `404 Not Found`: no entry with that id
/// - `409 Conflict`: the entry is used and protected
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MatriculationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/matriculations/reset - Bulk-clear the used flag
///
/// Recovery path for entries consumed by erroneous registrations.
pub async fn reset(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<MatriculationIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reset = MatriculationService::new(&state.db).reset(&dto.ids).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("{} matriculation(s) marked unused.", reset),
        }),
    ))
}
