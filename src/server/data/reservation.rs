//! Reservation data repository.
//!
//! Inserts run the calendar-based status derivation before the row is
//! written, so a stored `Pending` status always reflects the rule at the
//! time of the last persistence. The status advances out of `Pending` only
//! through the conditional updates below.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    model::reservation::ReservationStatus,
    server::{
        error::AppError,
        model::reservation::{derive_status, CreateReservationParams, Reservation},
    },
};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new reservation.
    ///
    /// The initial status comes from the derivation rule: a move-in date in
    /// the August–November window confirms the reservation immediately,
    /// anything else persists it as pending. The creation timestamp is set
    /// here, once.
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let status = derive_status(params.move_in_date);

        let entity = entity::prelude::Reservation::insert(entity::reservation::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            room_id: ActiveValue::Set(params.room_id),
            target_level: ActiveValue::Set(params.target_level.as_ordinal()),
            move_in_date: ActiveValue::Set(params.move_in_date),
            created_at: ActiveValue::Set(Utc::now()),
            status: ActiveValue::Set(status.as_code().to_string()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Reservation::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        let entity = entity::prelude::Reservation::find_by_id(id).one(self.db).await?;

        entity.map(Reservation::from_entity).transpose()
    }

    /// Gets all reservations of a student in store order.
    pub async fn get_for_student(&self, student_id: i32) -> Result<Vec<Reservation>, AppError> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::StudentId.eq(student_id))
            .all(self.db)
            .await?;

        entities.into_iter().map(Reservation::from_entity).collect()
    }

    /// Checks whether the student currently holds a pending reservation.
    pub async fn has_pending(&self, student_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::StudentId.eq(student_id))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Pending.as_code()))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Finds a pending reservation by id that belongs to the given student.
    ///
    /// This is the lookup the payment ledger keys on: id, ownership and the
    /// awaiting-payment status must all match.
    pub async fn find_owned_pending(
        &self,
        id: i32,
        student_id: i32,
    ) -> Result<Option<Reservation>, AppError> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::StudentId.eq(student_id))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Pending.as_code()))
            .one(self.db)
            .await?;

        entity.map(Reservation::from_entity).transpose()
    }

    /// Advances a reservation from `Pending` to `Paid`.
    ///
    /// Conditioned on the reservation still being pending at write time, so
    /// of two concurrent payments at most one advances the status. The
    /// transition is one-way; a paid reservation never re-enters the
    /// pending checks.
    ///
    /// # Returns
    /// - `Ok(true)` - The status was advanced
    /// - `Ok(false)` - The reservation is absent or no longer pending
    pub async fn advance_to_paid_if_pending(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::Status,
                Expr::value(ReservationStatus::Paid.as_code()),
            )
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Pending.as_code()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Cancels a reservation that is still pending or confirmed.
    ///
    /// # Returns
    /// - `Ok(true)` - The reservation is now cancelled
    /// - `Ok(false)` - The reservation is absent or already terminal
    pub async fn cancel_if_open(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::Status,
                Expr::value(ReservationStatus::Cancelled.as_code()),
            )
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(
                entity::reservation::Column::Status.is_in([
                    ReservationStatus::Pending.as_code(),
                    ReservationStatus::Confirmed.as_code(),
                ]),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
