use chrono::{DateTime, Utc};

use crate::model::auth::AuthUserDto;

/// Application identity with role flags.
///
/// Students authenticate with their matriculation code as username; admin
/// accounts are provisioned out-of-band.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub is_student: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_admin: entity.is_admin,
            is_student: entity.is_student,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_admin: self.is_admin,
            is_student: self.is_student,
        }
    }
}

/// Parameters for creating an identity during signup.
///
/// The password arrives already hashed; hashing happens in the signup
/// service before any database work starts.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_student: bool,
}
