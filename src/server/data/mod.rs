//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and return domain models to maintain separation between
//! the data layer and business logic layer.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same
//! code runs against the shared pool and inside the transactions that the
//! signup, reservation and payment flows require. The race-sensitive state
//! flips (matriculation consumption, room claiming, reservation status
//! advance) are conditional `update_many` statements whose `rows_affected`
//! tells the caller whether it won.

pub mod matriculation;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod student;
pub mod user;

#[cfg(test)]
mod test;
