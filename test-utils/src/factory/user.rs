//! Identity factory for tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test identities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("ET001")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password_hash: String,
    is_admin: bool,
    is_student: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new factory with defaults: a unique `ET{n}` username, a
    /// matching email, a student role and no admin rights.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("ET{:05}", id),
            email: format!("student{}@example.com", id),
            password_hash: "unusable-hash".to_string(),
            is_admin: false,
            is_student: true,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn student(mut self, is_student: bool) -> Self {
        self.is_student = is_student;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            is_admin: ActiveValue::Set(self.is_admin),
            is_student: ActiveValue::Set(self.is_student),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
