use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct MatriculationDto {
    pub id: i32,
    pub code: String,
    pub used: bool,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreateMatriculationDto {
    pub code: String,
}

/// Admin update of an entry. Only the code itself can change; the `used`
/// flag is owned by the signup flow and the bulk reset endpoint.
#[derive(Serialize, Deserialize, Clone)]
pub struct UpdateMatriculationDto {
    pub code: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct MatriculationIdsDto {
    pub ids: Vec<i32>,
}
