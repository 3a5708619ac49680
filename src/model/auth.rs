use serde::{Deserialize, Serialize};

use super::student::{AcademicLevel, Major};

#[derive(Serialize, Deserialize, Clone)]
pub struct SignupDto {
    pub matriculation_code: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub last_name: String,
    pub first_name: String,
    pub major: Major,
    pub level: AcademicLevel,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct LoginDto {
    /// The matriculation code doubles as the login identifier.
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct AuthUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub is_student: bool,
}
