//! API data transfer objects and closed domain enumerations.
//!
//! Everything that crosses the HTTP boundary lives here: request/response
//! DTOs plus the enumerations (major, academic level, building, statuses,
//! payment type) with their stable wire codes. Enum membership is validated
//! by serde at deserialization time, so free-form strings never reach the
//! service layer.

pub mod api;
pub mod auth;
pub mod matriculation;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod student;
