pub mod prelude;

pub mod matriculation;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod student;
pub mod user;
