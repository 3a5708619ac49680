use crate::model::matriculation::MatriculationDto;

/// Pre-issued enrollment identifier with its consumption flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matriculation {
    pub id: i32,
    pub code: String,
    pub used: bool,
}

impl Matriculation {
    pub fn from_entity(entity: entity::matriculation::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            used: entity.used,
        }
    }

    pub fn into_dto(self) -> MatriculationDto {
        MatriculationDto {
            id: self.id,
            code: self.code,
            used: self.used,
        }
    }
}
