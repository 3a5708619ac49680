//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Stored enumeration
//! codes are decoded here, so invalid stored data surfaces as an internal
//! error instead of leaking free-form strings into the business logic. The
//! pure engine rules that need no database access (reservation status
//! derivation, period-final-payment date, next-payment date) live on these
//! types.

pub mod matriculation;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod student;
pub mod user;
