//! Room catalog data repository.
//!
//! Plain CRUD for the admin surface plus the conditional status flips the
//! reservation engine relies on. Claiming a room is a compare-and-swap on
//! its status column, so two concurrent reservations cannot both take the
//! same room.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::room::RoomStatus,
    server::{
        error::AppError,
        model::room::{CreateRoomParams, Room, UpdateRoomParams},
    },
};

/// Repository providing database operations for the room catalog.
pub struct RoomRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new room.
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        let entity = entity::prelude::Room::insert(entity::room::ActiveModel {
            building: ActiveValue::Set(params.building.as_code().to_string()),
            floor: ActiveValue::Set(params.floor),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            status: ActiveValue::Set(params.status.as_code().to_string()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Room::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, AppError> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        entity.map(Room::from_entity).transpose()
    }

    /// Gets all rooms ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Room::from_entity).collect()
    }

    /// Gets all rooms currently carrying the given status.
    pub async fn get_by_status(&self, status: RoomStatus) -> Result<Vec<Room>, AppError> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::Status.eq(status.as_code()))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Room::from_entity).collect()
    }

    /// Applies a partial update to a room.
    pub async fn update(&self, id: i32, params: UpdateRoomParams) -> Result<Option<Room>, AppError> {
        let Some(entity) = entity::prelude::Room::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = entity.into();
        if let Some(building) = params.building {
            active.building = ActiveValue::Set(building.as_code().to_string());
        }
        if let Some(floor) = params.floor {
            active.floor = ActiveValue::Set(floor);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_code().to_string());
        }

        let updated = entity::prelude::Room::update(active).exec(self.db).await?;

        Ok(Some(Room::from_entity(updated)?))
    }

    /// Deletes a room by id.
    ///
    /// Rooms referenced by reservations are protected by a restricting
    /// foreign key; the resulting constraint violation surfaces as a
    /// conflict at the error boundary.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Claims an available room: flips its status from `Available` to
    /// `Occupied`.
    ///
    /// The availability check and the flip are one conditional update, so at
    /// most one of several concurrent claims wins.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller claimed the room
    /// - `Ok(false)` - The room does not exist or is not available
    pub async fn claim_if_available(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::update_many()
            .col_expr(
                entity::room::Column::Status,
                Expr::value(RoomStatus::Occupied.as_code()),
            )
            .filter(entity::room::Column::Id.eq(id))
            .filter(entity::room::Column::Status.eq(RoomStatus::Available.as_code()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Reverse transition of [`claim_if_available`](Self::claim_if_available):
    /// flips `Occupied` back to `Available` when a reservation is cancelled.
    ///
    /// # Returns
    /// - `Ok(true)` - The room was released
    /// - `Ok(false)` - The room does not exist or was not occupied
    pub async fn release_if_occupied(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::update_many()
            .col_expr(
                entity::room::Column::Status,
                Expr::value(RoomStatus::Available.as_code()),
            )
            .filter(entity::room::Column::Id.eq(id))
            .filter(entity::room::Column::Status.eq(RoomStatus::Occupied.as_code()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Resets the given rooms to `Available`. Administrative bulk action.
    pub async fn mark_available(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Room::update_many()
            .col_expr(
                entity::room::Column::Status,
                Expr::value(RoomStatus::Available.as_code()),
            )
            .filter(entity::room::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
