//! Reservation factory for tests.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations.
///
/// Requires the owning student and room ids. The default move-in date falls
/// outside the August–November confirmation window, so the default status
/// `ATT` is consistent with the derivation rule.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    room_id: i32,
    target_level: i32,
    move_in_date: NaiveDate,
    status: String,
}

impl<'a> ReservationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, student_id: i32, room_id: i32) -> Self {
        Self {
            db,
            student_id,
            room_id,
            target_level: 2,
            move_in_date: NaiveDate::from_ymd_opt(2027, 1, 15).unwrap(),
            status: "ATT".to_string(),
        }
    }

    pub fn target_level(mut self, target_level: i32) -> Self {
        self.target_level = target_level;
        self
    }

    pub fn move_in_date(mut self, move_in_date: NaiveDate) -> Self {
        self.move_in_date = move_in_date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            room_id: ActiveValue::Set(self.room_id),
            target_level: ActiveValue::Set(self.target_level),
            move_in_date: ActiveValue::Set(self.move_in_date),
            created_at: ActiveValue::Set(Utc::now()),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
