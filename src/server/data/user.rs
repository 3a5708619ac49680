//! Identity data repository.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for identities.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new identity.
    ///
    /// # Arguments
    /// - `params` - Identity fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created identity
    /// - `Err(DbErr)` - Database error, including unique violations on
    ///   username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            is_admin: ActiveValue::Set(params.is_admin),
            is_student: ActiveValue::Set(params.is_student),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds an identity by its primary key.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an identity by username, returning the raw entity.
    ///
    /// Returns the entity model rather than the domain model because the
    /// login flow needs the stored credential hash for verification; the
    /// hash never travels further than the auth service.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
