use super::*;
use crate::server::model::reservation::{derive_status, Reservation};

/// Tests the calendar window of the status derivation on both bounds.
///
/// August through November confirm; July and December stay pending.
#[test]
fn derivation_window_bounds() {
    let date = |m, d| NaiveDate::from_ymd_opt(2027, m, d).unwrap();

    assert_eq!(derive_status(date(7, 31)), ReservationStatus::Pending);
    assert_eq!(derive_status(date(8, 1)), ReservationStatus::Confirmed);
    assert_eq!(derive_status(date(9, 15)), ReservationStatus::Confirmed);
    assert_eq!(derive_status(date(11, 30)), ReservationStatus::Confirmed);
    assert_eq!(derive_status(date(12, 1)), ReservationStatus::Pending);
    assert_eq!(derive_status(date(1, 15)), ReservationStatus::Pending);
}

/// Tests that the derivation is idempotent.
///
/// Running the rule twice on the same date yields the same status both
/// times.
#[test]
fn derivation_is_idempotent() {
    let pending = NaiveDate::from_ymd_opt(2027, 3, 1).unwrap();
    let confirmed = NaiveDate::from_ymd_opt(2027, 10, 1).unwrap();

    assert_eq!(derive_status(pending), derive_status(pending));
    assert_eq!(derive_status(confirmed), derive_status(confirmed));
}

fn reservation_with(target_level: AcademicLevel, move_in_date: NaiveDate) -> Reservation {
    Reservation {
        id: 1,
        student_id: 1,
        room_id: 1,
        target_level,
        move_in_date,
        created_at: Utc::now(),
        status: ReservationStatus::Pending,
    }
}

/// Tests the payment deadline for a level climb.
///
/// Targeting L2 from L1 gives Δ = 1, so the deadline is move-in plus
/// 365 × 2 days.
#[test]
fn final_payment_date_for_level_climb() {
    let move_in = NaiveDate::from_ymd_opt(2027, 2, 1).unwrap();
    let reservation = reservation_with(AcademicLevel::L2, move_in);

    assert_eq!(
        reservation.final_payment_date(AcademicLevel::L1),
        move_in + Duration::days(730)
    );
}

/// Tests the payment deadline when staying or stepping down.
///
/// Targeting L1 from L2 gives Δ = -1; same level gives Δ = 0. Both allow a
/// single year.
#[test]
fn final_payment_date_for_flat_or_down() {
    let move_in = NaiveDate::from_ymd_opt(2027, 2, 1).unwrap();

    let down = reservation_with(AcademicLevel::L1, move_in);
    assert_eq!(
        down.final_payment_date(AcademicLevel::L2),
        move_in + Duration::days(365)
    );

    let flat = reservation_with(AcademicLevel::L3, move_in);
    assert_eq!(
        flat.final_payment_date(AcademicLevel::L3),
        move_in + Duration::days(365)
    );
}
