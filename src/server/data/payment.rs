//! Payment ledger data repository.

use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::payment::PaymentStatus,
    server::{
        error::AppError,
        model::payment::{CreatePaymentParams, Payment},
    },
};

/// Repository providing database operations for payments.
pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new payment, applying the first-save defaulting rule.
    ///
    /// A record being persisted for the first time always gets its payment
    /// date forced to the owning reservation's move-in date and its status
    /// forced to `Paid`. The parameter type carries neither field, so
    /// caller-supplied values cannot leak through. The override applies at
    /// creation only; updates never touch these columns.
    ///
    /// # Arguments
    /// - `params` - Ledger fields chosen by the caller
    /// - `move_in_date` - The owning reservation's move-in date
    pub async fn create(
        &self,
        params: CreatePaymentParams,
        move_in_date: NaiveDate,
    ) -> Result<Payment, AppError> {
        let entity = entity::prelude::Payment::insert(entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(params.reservation_id),
            amount: ActiveValue::Set(params.amount),
            payment_type: ActiveValue::Set(params.payment_type.as_code().to_string()),
            payment_date: ActiveValue::Set(move_in_date),
            status: ActiveValue::Set(PaymentStatus::Paid.as_code().to_string()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Payment::from_entity(entity)
    }

    /// Gets all payments over a student's reservations, newest payment date
    /// first.
    ///
    /// Each payment is returned with the move-in date of its reservation so
    /// callers can compute the advisory next-payment date without another
    /// round trip.
    pub async fn get_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<(Payment, NaiveDate)>, AppError> {
        let rows = entity::prelude::Payment::find()
            .find_also_related(entity::prelude::Reservation)
            .filter(entity::reservation::Column::StudentId.eq(student_id))
            .order_by_desc(entity::payment::Column::PaymentDate)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(payment, reservation)| {
                let reservation = reservation.ok_or_else(|| {
                    AppError::InternalError(format!(
                        "payment {} has no owning reservation",
                        payment.id
                    ))
                })?;

                Ok((Payment::from_entity(payment)?, reservation.move_in_date))
            })
            .collect()
    }
}
