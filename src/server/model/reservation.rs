use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::{
    model::{
        reservation::{ReservationDto, ReservationStatus},
        student::AcademicLevel,
    },
    server::error::AppError,
};

/// First month (inclusive) of the window in which a requested move-in date
/// confirms a reservation immediately.
const CONFIRMATION_WINDOW_START: u32 = 8;
/// Last month (inclusive) of the immediate-confirmation window.
const CONFIRMATION_WINDOW_END: u32 = 11;

/// Derives the status a not-yet-finalized reservation should carry.
///
/// Move-in dates falling in August through November are confirmed outright;
/// any other month leaves the reservation pending. The rule is a pure
/// function of the move-in date, so applying it twice yields the same
/// result.
///
/// Callers apply this before every persistence of a reservation whose
/// current status is [`ReservationStatus::Pending`]; once a reservation has
/// left `Pending` (payment, cancellation), the stored status is
/// authoritative and this rule must not run.
pub fn derive_status(move_in_date: NaiveDate) -> ReservationStatus {
    let month = move_in_date.month();

    if (CONFIRMATION_WINDOW_START..=CONFIRMATION_WINDOW_END).contains(&month) {
        ReservationStatus::Confirmed
    } else {
        ReservationStatus::Pending
    }
}

/// Room reservation made by a student.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub student_id: i32,
    pub room_id: i32,
    pub target_level: AcademicLevel,
    pub move_in_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The converted domain model
    /// - `Err(AppError::InternalError)` - The stored status code or target
    ///   level ordinal is not a member of its enumeration
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, AppError> {
        let status = ReservationStatus::from_code(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "invalid status code '{}' stored for reservation {}",
                entity.status, entity.id
            ))
        })?;
        let target_level = AcademicLevel::try_from(entity.target_level).map_err(|_| {
            AppError::InternalError(format!(
                "invalid target level ordinal {} stored for reservation {}",
                entity.target_level, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            room_id: entity.room_id,
            target_level,
            move_in_date: entity.move_in_date,
            created_at: entity.created_at,
            status,
        })
    }

    /// Deadline for full payment of the reserved period.
    ///
    /// Always derivable, never stored: with Δ the number of levels between
    /// the targeted level and the student's current one, a climb (Δ > 0)
    /// allows 365 × (Δ + 1) days from move-in; staying or stepping down
    /// allows a single year.
    pub fn final_payment_date(&self, current_level: AcademicLevel) -> NaiveDate {
        let delta = self.target_level.as_ordinal() - current_level.as_ordinal();

        if delta > 0 {
            self.move_in_date + Duration::days(365 * (delta as i64 + 1))
        } else {
            self.move_in_date + Duration::days(365)
        }
    }

    /// Converts to the API DTO, computing the derived payment deadline.
    pub fn into_dto(self, current_level: AcademicLevel, matriculation_code: String) -> ReservationDto {
        let final_payment_date = self.final_payment_date(current_level);

        ReservationDto {
            id: self.id,
            room_id: self.room_id,
            matriculation_code,
            target_level: self.target_level,
            move_in_date: self.move_in_date,
            created_at: self.created_at,
            status: self.status,
            final_payment_date,
        }
    }
}

/// Parameters for creating a reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub student_id: i32,
    pub room_id: i32,
    pub target_level: AcademicLevel,
    pub move_in_date: NaiveDate,
}
