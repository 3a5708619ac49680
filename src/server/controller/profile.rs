use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::student::UpdateStudentDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::student::UpdateStudentParams,
        service::student::StudentService,
        state::AppState,
    },
};

/// GET /api/profile - The caller's student profile
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let profile = StudentService::new(&state.db).profile_for(&user).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// PUT /api/profile - Partially update the caller's student profile
///
/// The matriculation code and login identity cannot be changed here;
/// omitted fields keep their stored values.
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let params = UpdateStudentParams {
        last_name: dto.last_name,
        first_name: dto.first_name,
        major: dto.major,
        level: dto.level,
        phone: dto.phone,
    };

    let profile = StudentService::new(&state.db)
        .update_profile(&user, params)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}
