use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle state.
///
/// `Pending` is the only state the calendar-based derivation rule may
/// rewrite; `Paid` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "ATT")]
    Pending,
    #[serde(rename = "VAL")]
    Confirmed,
    #[serde(rename = "ANNUL")]
    Cancelled,
    #[serde(rename = "PAYE")]
    Paid,
}

impl ReservationStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Pending => "ATT",
            Self::Confirmed => "VAL",
            Self::Cancelled => "ANNUL",
            Self::Paid => "PAYE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ATT" => Some(Self::Pending),
            "VAL" => Some(Self::Confirmed),
            "ANNUL" => Some(Self::Cancelled),
            "PAYE" => Some(Self::Paid),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ReservationDto {
    pub id: i32,
    pub room_id: i32,
    pub matriculation_code: String,
    pub target_level: super::student::AcademicLevel,
    pub move_in_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub status: ReservationStatus,
    /// Derived deadline for full payment; recomputed on every read, never
    /// stored.
    pub final_payment_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreateReservationDto {
    pub room_id: i32,
    pub target_level: super::student::AcademicLevel,
    pub move_in_date: NaiveDate,
}
