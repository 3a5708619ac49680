//! Student profile factory for tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test student profiles.
///
/// Requires the owning identity's id; all other fields default.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    matriculation_code: String,
    last_name: String,
    first_name: String,
    major: String,
    level: i32,
    phone: Option<String>,
}

impl<'a> StudentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            matriculation_code: format!("ET{:05}", id),
            last_name: format!("Last{}", id),
            first_name: format!("First{}", id),
            major: "INFO".to_string(),
            level: 1,
            phone: None,
        }
    }

    pub fn matriculation_code(mut self, code: impl Into<String>) -> Self {
        self.matriculation_code = code.into();
        self
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            matriculation_code: ActiveValue::Set(self.matriculation_code),
            last_name: ActiveValue::Set(self.last_name),
            first_name: ActiveValue::Set(self.first_name),
            major: ActiveValue::Set(self.major),
            level: ActiveValue::Set(self.level),
            phone: ActiveValue::Set(self.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
