use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::MessageDto,
        auth::{LoginDto, SignupDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::{auth::AuthService, signup::SignupService},
        state::AppState,
    },
};

/// POST /api/signup - Register a new student account
///
/// Creates the identity, the student profile and consumes the matriculation
/// entry as one unit, then establishes the session. The session cookie on
/// the response is the caller's credential for subsequent requests.
///
/// # Returns
/// - `201 Created`: the new identity as JSON
/// - `400 Bad Request`: password mismatch or malformed input
/// - `404 Not Found`: matriculation code not in the registry
/// - `409 Conflict`: code already consumed/linked, or duplicate email
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = SignupService::new(&state.db).signup(dto).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/login - Authenticate a student
///
/// Verifies the credentials, rejects non-student accounts and stores the
/// user id in the session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).login(dto).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/logout - Clear the caller's session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out.".to_string(),
        }),
    ))
}

/// GET /api/auth/user - Current authenticated identity
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
