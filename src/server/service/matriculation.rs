use sea_orm::DatabaseConnection;

use crate::{
    model::matriculation::MatriculationDto,
    server::{
        data::{matriculation::MatriculationRepository, student::StudentRepository},
        error::{registry::RegistryError, AppError},
    },
};

/// Matriculation registry rules and administration.
///
/// The registry gates signup: a code must exist and be unconsumed before an
/// account can be created against it. Administrators seed, correct and prune
/// the registry through the CRUD operations here.
pub struct MatriculationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatriculationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that a code may back a new signup.
    ///
    /// # Returns
    /// - `Ok(())` - The entry exists and is unconsumed
    /// - `Err(RegistryError::CodeNotFound)` - No entry with that code
    /// - `Err(RegistryError::AlreadyLinked)` - Consumed, and a profile with
    ///   the code exists
    /// - `Err(RegistryError::AlreadyUsed)` - Consumed, but no profile
    ///   carries the code; an anomalous state surfaced for an administrator
    ///   to resolve, never silently repaired here
    pub async fn validate_for_signup(&self, code: &str) -> Result<(), AppError> {
        let repo = MatriculationRepository::new(self.db);

        let Some(entry) = repo.find_by_code(code).await? else {
            return Err(RegistryError::CodeNotFound(code.to_string()).into());
        };

        if entry.used {
            let students = StudentRepository::new(self.db);
            if students.exists_by_code(code).await? {
                return Err(RegistryError::AlreadyLinked(code.to_string()).into());
            }

            return Err(RegistryError::AlreadyUsed(code.to_string()).into());
        }

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<MatriculationDto>, AppError> {
        let entries = MatriculationRepository::new(self.db).get_all().await?;

        Ok(entries.into_iter().map(|e| e.into_dto()).collect())
    }

    pub async fn get(&self, id: i32) -> Result<MatriculationDto, AppError> {
        let entry = MatriculationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Matriculation entry not found.".to_string()))?;

        Ok(entry.into_dto())
    }

    pub async fn create(&self, code: String) -> Result<MatriculationDto, AppError> {
        let entry = MatriculationRepository::new(self.db).create(code).await?;

        Ok(entry.into_dto())
    }

    pub async fn update(&self, id: i32, code: String) -> Result<MatriculationDto, AppError> {
        let entry = MatriculationRepository::new(self.db)
            .update_code(id, code)
            .await?
            .ok_or_else(|| AppError::NotFound("Matriculation entry not found.".to_string()))?;

        Ok(entry.into_dto())
    }

    /// Deletes an entry, refusing when its code has been consumed.
    ///
    /// # Returns
    /// - `Ok(())` - The entry was deleted
    /// - `Err(AppError::NotFound)` - No entry with that id
    /// - `Err(RegistryError::DeleteUsed)` - The entry is flagged used
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = MatriculationRepository::new(self.db);

        let Some(entry) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(
                "Matriculation entry not found.".to_string(),
            ));
        };

        if entry.used {
            return Err(RegistryError::DeleteUsed(id).into());
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Bulk-resets the `used` flag. The recovery path for entries consumed
    /// by an erroneous or abandoned registration.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries reset
    pub async fn reset(&self, ids: &[i32]) -> Result<u64, AppError> {
        let reset = MatriculationRepository::new(self.db).mark_unused(ids).await?;

        Ok(reset)
    }
}
