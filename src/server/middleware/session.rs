//! Type-safe session management wrapper.
//!
//! Wraps the raw tower-sessions `Session` behind a narrow interface so
//! session keys live in one place and handlers never touch string keys
//! directly.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles the authenticated user's id and session lifecycle operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after successful signup or login to establish a logged-in
    /// session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
