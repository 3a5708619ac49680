//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits
//! between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than entity models
//! - **Transaction Management**: Running the multi-step mutations (signup,
//!   reservation creation, payment acceptance) as all-or-nothing units

pub mod auth;
pub mod matriculation;
pub mod password;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod signup;
pub mod student;

#[cfg(test)]
mod test;
