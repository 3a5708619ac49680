use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{student::StudentRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{student::Student, user::User},
};

/// Role requirement checked by [`AuthGuard::require`].
pub enum Permission {
    Admin,
    Student,
}

/// Per-request authentication and authorization guard.
///
/// Resolves the session's user id to a database record and verifies the
/// requested role flags. Controllers call this before doing any work.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user holding every listed permission.
    ///
    /// # Arguments
    /// - `permissions` - Role requirements; empty means any logged-in user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(_))` - Not logged in, unknown user, or a
    ///   missing role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Student => {
                    if !user.is_student {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "student role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Requires an authenticated caller with the student role and resolves
    /// their profile.
    ///
    /// # Returns
    /// - `Ok((User, Student))` - Identity and its student profile
    /// - `Err(AppError::AuthErr(_))` - Not logged in, missing role, or an
    ///   identity without a profile
    pub async fn require_student(&self) -> Result<(User, Student), AppError> {
        let user = self.require(&[Permission::Student]).await?;

        let Some(student) = StudentRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?
        else {
            return Err(AuthError::StudentProfileMissing(user.id).into());
        };

        Ok((user, student))
    }
}
