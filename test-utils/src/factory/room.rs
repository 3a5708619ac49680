//! Room factory for tests.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test rooms. Defaults to an available single room in
/// block R+G1.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    building: String,
    floor: String,
    description: String,
    price: Decimal,
    status: String,
}

impl<'a> RoomFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            building: "R+G1".to_string(),
            floor: "1".to_string(),
            description: format!("Test room {}", next_id()),
            price: Decimal::new(120_000_00, 2),
            status: "DISPO".to_string(),
        }
    }

    pub fn building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    pub fn floor(mut self, floor: impl Into<String>) -> Self {
        self.floor = floor.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            building: ActiveValue::Set(self.building),
            floor: ActiveValue::Set(self.floor),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
