//! HTTP request handlers.
//!
//! Controllers resolve authentication through the guard, convert DTOs to
//! parameter types, delegate to the service layer and shape the HTTP
//! response. No business rules live here.

pub mod auth;
pub mod matriculation;
pub mod payment;
pub mod profile;
pub mod reservation;
pub mod room;
