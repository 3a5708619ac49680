mod reservation;
mod student;
mod user;
