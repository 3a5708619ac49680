use sea_orm::DatabaseConnection;

use crate::{
    model::room::{CreateRoomDto, RoomDto, RoomStatus, UpdateRoomDto},
    server::{
        data::room::RoomRepository,
        error::AppError,
        model::room::{CreateRoomParams, UpdateRoomParams},
    },
};

/// Room catalog browsing and administration.
pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the rooms students may reserve: those currently available.
    pub async fn list_available(&self) -> Result<Vec<RoomDto>, AppError> {
        let rooms = RoomRepository::new(self.db)
            .get_by_status(RoomStatus::Available)
            .await?;

        Ok(rooms.into_iter().map(|r| r.into_dto()).collect())
    }

    /// Gets the whole catalog, whatever the status. Admin view.
    pub async fn list_all(&self) -> Result<Vec<RoomDto>, AppError> {
        let rooms = RoomRepository::new(self.db).get_all().await?;

        Ok(rooms.into_iter().map(|r| r.into_dto()).collect())
    }

    pub async fn get(&self, id: i32) -> Result<RoomDto, AppError> {
        let room = RoomRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found.".to_string()))?;

        Ok(room.into_dto())
    }

    pub async fn create(&self, dto: CreateRoomDto) -> Result<RoomDto, AppError> {
        let room = RoomRepository::new(self.db)
            .create(CreateRoomParams {
                building: dto.building,
                floor: dto.floor,
                description: dto.description,
                price: dto.price,
                status: dto.status.unwrap_or(RoomStatus::Available),
            })
            .await?;

        Ok(room.into_dto())
    }

    pub async fn update(&self, id: i32, dto: UpdateRoomDto) -> Result<RoomDto, AppError> {
        let room = RoomRepository::new(self.db)
            .update(
                id,
                UpdateRoomParams {
                    building: dto.building,
                    floor: dto.floor,
                    description: dto.description,
                    price: dto.price,
                    status: dto.status,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found.".to_string()))?;

        Ok(room.into_dto())
    }

    /// Deletes a room.
    ///
    /// A room with reservations is protected by the schema; the foreign-key
    /// violation surfaces to the caller as a conflict.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = RoomRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound("Room not found.".to_string()));
        }

        Ok(())
    }

    /// Bulk-resets rooms to available. Admin action.
    pub async fn mark_available(&self, ids: &[i32]) -> Result<u64, AppError> {
        let updated = RoomRepository::new(self.db).mark_available(ids).await?;

        Ok(updated)
    }
}
