use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::payment::{CreatePaymentDto, PaymentDto},
    server::{
        data::{payment::PaymentRepository, reservation::ReservationRepository},
        error::{payment::PaymentError, AppError},
        model::{payment::CreatePaymentParams, student::Student},
    },
};

/// Payment ledger: minimum-amount enforcement and reservation settlement.
pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    entry_fee_minimum: Decimal,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection, entry_fee_minimum: Decimal) -> Self {
        Self {
            db,
            entry_fee_minimum,
        }
    }

    /// Gets the student's payments, newest payment date first.
    pub async fn list_for(&self, student: &Student) -> Result<Vec<PaymentDto>, AppError> {
        let rows = PaymentRepository::new(self.db)
            .get_for_student(student.id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(payment, move_in_date)| payment.into_dto(move_in_date))
            .collect())
    }

    /// Records a payment against one of the student's pending reservations.
    ///
    /// The target must be a reservation owned by the student that is still
    /// awaiting payment, and the amount must reach the configured entry-fee
    /// threshold. On acceptance the reservation advances to paid and the
    /// payment row is written with its first-save defaults (date forced to
    /// the move-in date, status forced to paid); both writes share one
    /// transaction. The status advance is conditioned on the reservation
    /// still being pending at write time, so of two concurrent payments
    /// exactly one settles the reservation and the loser is told no pending
    /// reservation matched.
    ///
    /// # Returns
    /// - `Ok(PaymentDto)` - The recorded payment
    /// - `Err(PaymentError::ReservationNotFound)` - No owned pending
    ///   reservation with that id (including race losers)
    /// - `Err(PaymentError::InsufficientAmount)` - Below the threshold
    pub async fn create(
        &self,
        student: &Student,
        dto: CreatePaymentDto,
    ) -> Result<PaymentDto, AppError> {
        let Some(reservation) = ReservationRepository::new(self.db)
            .find_owned_pending(dto.reservation_id, student.id)
            .await?
        else {
            return Err(PaymentError::ReservationNotFound(dto.reservation_id, student.id).into());
        };

        if dto.amount < self.entry_fee_minimum {
            return Err(PaymentError::InsufficientAmount {
                amount: dto.amount,
                minimum: self.entry_fee_minimum,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let advanced = ReservationRepository::new(&txn)
            .advance_to_paid_if_pending(reservation.id)
            .await?;
        if !advanced {
            txn.rollback().await?;
            return Err(PaymentError::ReservationNotFound(dto.reservation_id, student.id).into());
        }

        let payment = PaymentRepository::new(&txn)
            .create(
                CreatePaymentParams {
                    reservation_id: reservation.id,
                    amount: dto.amount,
                    payment_type: dto.payment_type,
                },
                reservation.move_in_date,
            )
            .await?;

        txn.commit().await?;

        Ok(payment.into_dto(reservation.move_in_date))
    }
}
