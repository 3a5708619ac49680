use crate::{
    model::student::{AcademicLevel, Major, StudentDto},
    server::error::AppError,
};

/// Student profile linked one-to-one to an identity.
///
/// The matriculation code is set at signup and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub user_id: i32,
    pub matriculation_code: String,
    pub last_name: String,
    pub first_name: String,
    pub major: Major,
    pub level: AcademicLevel,
    pub phone: Option<String>,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Student)` - The converted domain model
    /// - `Err(AppError::InternalError)` - The stored major code or level
    ///   ordinal is not a member of its enumeration
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, AppError> {
        let major = Major::from_code(&entity.major).ok_or_else(|| {
            AppError::InternalError(format!(
                "invalid major code '{}' stored for student {}",
                entity.major, entity.id
            ))
        })?;
        let level = AcademicLevel::try_from(entity.level).map_err(|_| {
            AppError::InternalError(format!(
                "invalid level ordinal {} stored for student {}",
                entity.level, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            matriculation_code: entity.matriculation_code,
            last_name: entity.last_name,
            first_name: entity.first_name,
            major,
            level,
            phone: entity.phone,
        })
    }

    /// Converts to the profile DTO, joining in the identity's contact fields.
    pub fn into_dto(self, username: String, email: String) -> StudentDto {
        StudentDto {
            id: self.id,
            matriculation_code: self.matriculation_code,
            last_name: self.last_name,
            first_name: self.first_name,
            major: self.major,
            level: self.level,
            phone: self.phone,
            email,
            username,
        }
    }
}

/// Parameters for creating a profile during signup.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub user_id: i32,
    pub matriculation_code: String,
    pub last_name: String,
    pub first_name: String,
    pub major: Major,
    pub level: AcademicLevel,
    pub phone: Option<String>,
}

/// Partial profile update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub major: Option<Major>,
    pub level: Option<AcademicLevel>,
    pub phone: Option<String>,
}
