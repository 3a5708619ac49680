use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    model::payment::{PaymentDto, PaymentStatus, PaymentType},
    server::error::AppError,
};

/// Days between two instalments of a monthly plan.
const MONTHLY_INTERVAL_DAYS: i64 = 30;

/// Recorded payment against a reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub reservation_id: i32,
    pub amount: Decimal,
    pub payment_type: PaymentType,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
}

impl Payment {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The converted domain model
    /// - `Err(AppError::InternalError)` - The stored type or status code is
    ///   not a member of its enumeration
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, AppError> {
        let payment_type = PaymentType::from_code(&entity.payment_type).ok_or_else(|| {
            AppError::InternalError(format!(
                "invalid type code '{}' stored for payment {}",
                entity.payment_type, entity.id
            ))
        })?;
        let status = PaymentStatus::from_code(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "invalid status code '{}' stored for payment {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            amount: entity.amount,
            payment_type,
            payment_date: entity.payment_date,
            status,
        })
    }

    /// Advisory date of the next instalment; display-only, nothing schedules
    /// or bills from it.
    ///
    /// Monthly plans run thirty days from `base_date`; annual plans fall due
    /// on the reservation's move-in anniversary, so the move-in date itself
    /// is returned.
    pub fn next_payment_date(&self, base_date: NaiveDate, move_in_date: NaiveDate) -> NaiveDate {
        match self.payment_type {
            PaymentType::Monthly => base_date + Duration::days(MONTHLY_INTERVAL_DAYS),
            PaymentType::Annual => move_in_date,
        }
    }

    /// Converts to the API DTO, computing the advisory next-payment date
    /// from the recorded payment date.
    pub fn into_dto(self, move_in_date: NaiveDate) -> PaymentDto {
        let next_payment_date = self.next_payment_date(self.payment_date, move_in_date);

        PaymentDto {
            id: self.id,
            reservation_id: self.reservation_id,
            amount: self.amount,
            payment_type: self.payment_type,
            payment_date: self.payment_date,
            status: self.status,
            next_payment_date,
        }
    }
}

/// Parameters for recording a payment through the ledger.
///
/// Carries no date or status on purpose: both are force-set at first save
/// (date to the reservation's move-in date, status to `Paid`).
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub reservation_id: i32,
    pub amount: Decimal,
    pub payment_type: PaymentType,
}
