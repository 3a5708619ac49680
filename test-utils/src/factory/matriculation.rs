//! Matriculation registry entry factory for tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test registry entries.
pub struct MatriculationFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    used: bool,
}

impl<'a> MatriculationFactory<'a> {
    /// Creates a new factory with a unique unconsumed code.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            code: format!("ET{:05}", next_id()),
            used: false,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }

    pub async fn build(self) -> Result<entity::matriculation::Model, DbErr> {
        entity::matriculation::ActiveModel {
            code: ActiveValue::Set(self.code),
            used: ActiveValue::Set(self.used),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
