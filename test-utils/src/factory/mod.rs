//! Entity factories for tests.
//!
//! Each factory inserts one entity with sensible defaults that individual
//! tests override through the builder methods. `helpers` wires up the
//! common dependency chains.

pub mod helpers;
pub mod matriculation;
pub mod reservation;
pub mod room;
pub mod student;
pub mod user;
