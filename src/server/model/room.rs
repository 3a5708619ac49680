use rust_decimal::Decimal;

use crate::{
    model::room::{Building, RoomDto, RoomStatus},
    server::error::AppError,
};

/// Dormitory room inventory record.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub building: Building,
    pub floor: String,
    pub description: String,
    pub price: Decimal,
    pub status: RoomStatus,
}

impl Room {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Room)` - The converted domain model
    /// - `Err(AppError::InternalError)` - The stored building or status code
    ///   is not a member of its enumeration
    pub fn from_entity(entity: entity::room::Model) -> Result<Self, AppError> {
        let building = Building::from_code(&entity.building).ok_or_else(|| {
            AppError::InternalError(format!(
                "invalid building code '{}' stored for room {}",
                entity.building, entity.id
            ))
        })?;
        let status = RoomStatus::from_code(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "invalid status code '{}' stored for room {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            building,
            floor: entity.floor,
            description: entity.description,
            price: entity.price,
            status,
        })
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            building: self.building,
            floor: self.floor,
            description: self.description,
            price: self.price,
            status: self.status,
        }
    }
}

/// Parameters for creating a room through the admin surface.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub building: Building,
    pub floor: String,
    pub description: String,
    pub price: Decimal,
    pub status: RoomStatus,
}

/// Partial room update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub building: Option<Building>,
    pub floor: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<RoomStatus>,
}
