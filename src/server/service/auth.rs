use sea_orm::DatabaseConnection;

use crate::{
    model::auth::LoginDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::User,
        service::password,
    },
};

/// Credential verification for the student login endpoint.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username/password pair and returns the identity.
    ///
    /// Unknown usernames and wrong passwords produce the same
    /// invalid-credentials error so the endpoint does not reveal which
    /// accounts exist. Accounts without the student role are rejected even
    /// with correct credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Verified student identity
    /// - `Err(AppError::AuthErr(_))` - Unknown user, bad password, or not a
    ///   student account
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(&dto.username).await? else {
            return Err(AuthError::InvalidCredentials(dto.username).into());
        };

        if !password::verify(&dto.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials(dto.username).into());
        }

        if !user.is_student {
            return Err(AuthError::NotAStudent(dto.username).into());
        }

        Ok(User::from_entity(user))
    }
}
