use sea_orm::DatabaseConnection;

use crate::{
    model::student::StudentDto,
    server::{
        data::student::StudentRepository,
        error::{auth::AuthError, AppError},
        model::{student::UpdateStudentParams, user::User},
    },
};

/// Student profile reads and partial updates.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the profile owned by the given identity.
    ///
    /// # Returns
    /// - `Ok(StudentDto)` - The caller's profile with identity contact fields
    /// - `Err(AuthError::StudentProfileMissing)` - The identity has no
    ///   profile
    pub async fn profile_for(&self, user: &User) -> Result<StudentDto, AppError> {
        let Some(student) = StudentRepository::new(self.db).find_by_user_id(user.id).await? else {
            return Err(AuthError::StudentProfileMissing(user.id).into());
        };

        Ok(student.into_dto(user.username.clone(), user.email.clone()))
    }

    /// Applies a partial update to the caller's profile.
    ///
    /// The matriculation code is immutable; the parameter type has no field
    /// for it.
    pub async fn update_profile(
        &self,
        user: &User,
        params: UpdateStudentParams,
    ) -> Result<StudentDto, AppError> {
        let repo = StudentRepository::new(self.db);

        let Some(student) = repo.find_by_user_id(user.id).await? else {
            return Err(AuthError::StudentProfileMissing(user.id).into());
        };

        let updated = repo
            .update(student.id, params)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("student {} vanished mid-update", student.id)))?;

        Ok(updated.into_dto(user.username.clone(), user.email.clone()))
    }
}
