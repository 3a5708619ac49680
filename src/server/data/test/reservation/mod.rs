use crate::{
    model::{reservation::ReservationStatus, student::AcademicLevel},
    server::{data::reservation::ReservationRepository, model::reservation::CreateReservationParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, reservation::ReservationFactory, room::RoomFactory},
};

mod advance_to_paid_if_pending;
mod has_pending;
