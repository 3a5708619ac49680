pub use super::matriculation::Entity as Matriculation;
pub use super::payment::Entity as Payment;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;
