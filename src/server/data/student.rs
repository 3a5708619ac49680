//! Student profile data repository.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::{
    error::AppError,
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
};

/// Repository providing database operations for student profiles.
pub struct StudentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new profile.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created profile
    /// - `Err(AppError::DbErr)` - Database error, including unique violations
    ///   on the matriculation code or user id
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let entity = entity::prelude::Student::insert(entity::student::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            matriculation_code: ActiveValue::Set(params.matriculation_code),
            last_name: ActiveValue::Set(params.last_name),
            first_name: ActiveValue::Set(params.first_name),
            major: ActiveValue::Set(params.major.as_code().to_string()),
            level: ActiveValue::Set(params.level.as_ordinal()),
            phone: ActiveValue::Set(params.phone),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Student::from_entity(entity)
    }

    /// Finds the profile owned by an identity.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Student>, AppError> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(Student::from_entity).transpose()
    }

    /// Checks whether any profile carries the given matriculation code.
    pub async fn exists_by_code(&self, code: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::MatriculationCode.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Applies a partial update to a profile.
    ///
    /// Only the provided fields change; the matriculation code and the
    /// identity link are immutable and not part of the parameter type.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated profile
    /// - `Ok(None)` - No profile with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateStudentParams,
    ) -> Result<Option<Student>, AppError> {
        let Some(entity) = entity::prelude::Student::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::student::ActiveModel = entity.into();
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(major) = params.major {
            active.major = ActiveValue::Set(major.as_code().to_string());
        }
        if let Some(level) = params.level {
            active.level = ActiveValue::Set(level.as_ordinal());
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }

        let updated = entity::prelude::Student::update(active).exec(self.db).await?;

        Ok(Some(Student::from_entity(updated)?))
    }
}
