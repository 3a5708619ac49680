use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto},
    server::{
        data::{reservation::ReservationRepository, room::RoomRepository},
        error::{reservation::ReservationError, AppError},
        model::{reservation::CreateReservationParams, student::Student},
    },
};

/// Reservation engine: validation, room claiming and lifecycle transitions.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the student's reservations with their derived payment deadlines.
    pub async fn list_for(&self, student: &Student) -> Result<Vec<ReservationDto>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_for_student(student.id)
            .await?;

        Ok(reservations
            .into_iter()
            .map(|r| r.into_dto(student.level, student.matriculation_code.clone()))
            .collect())
    }

    /// Creates a reservation for the student.
    ///
    /// A student may hold at most one pending reservation, the move-in date
    /// must not lie in the past (date-only comparison) and the room must be
    /// available at claim time. The room claim and the reservation insert
    /// share one transaction: the claim is a conditional status flip, so a
    /// concurrent creation for the same room leaves exactly one winner and
    /// the loser sees `RoomUnavailable`; a failed insert rolls the claim
    /// back.
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The created reservation, status already
    ///   derived from the move-in month
    /// - `Err(ReservationError::DuplicatePending)` - A pending reservation
    ///   exists
    /// - `Err(ReservationError::PastDate)` - Move-in date before today
    /// - `Err(ReservationError::RoomUnavailable)` - Room absent or taken
    pub async fn create(
        &self,
        student: &Student,
        dto: CreateReservationDto,
    ) -> Result<ReservationDto, AppError> {
        let repo = ReservationRepository::new(self.db);

        if repo.has_pending(student.id).await? {
            return Err(ReservationError::DuplicatePending(student.id).into());
        }

        let today = Utc::now().date_naive();
        if dto.move_in_date < today {
            return Err(ReservationError::PastDate(dto.move_in_date).into());
        }

        let txn = self.db.begin().await?;

        let claimed = RoomRepository::new(&txn)
            .claim_if_available(dto.room_id)
            .await?;
        if !claimed {
            txn.rollback().await?;
            return Err(ReservationError::RoomUnavailable(dto.room_id).into());
        }

        let reservation = ReservationRepository::new(&txn)
            .create(CreateReservationParams {
                student_id: student.id,
                room_id: dto.room_id,
                target_level: dto.target_level,
                move_in_date: dto.move_in_date,
            })
            .await?;

        txn.commit().await?;

        Ok(reservation.into_dto(student.level, student.matriculation_code.clone()))
    }

    /// Cancels a reservation and releases its room. Admin operation.
    ///
    /// Only pending or confirmed reservations can be cancelled; paid and
    /// already-cancelled ones are terminal. The status write and the room
    /// release share one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Cancelled, room available again
    /// - `Err(AppError::NotFound)` - No reservation with that id
    /// - `Err(ReservationError::NotCancellable)` - Terminal status
    pub async fn cancel(&self, id: i32) -> Result<(), AppError> {
        let Some(reservation) = ReservationRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Reservation not found.".to_string()));
        };

        let txn = self.db.begin().await?;

        let cancelled = ReservationRepository::new(&txn).cancel_if_open(id).await?;
        if !cancelled {
            txn.rollback().await?;
            return Err(ReservationError::NotCancellable(id).into());
        }

        RoomRepository::new(&txn)
            .release_if_occupied(reservation.room_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}
