use crate::{
    model::{
        auth::SignupDto,
        student::{AcademicLevel, Major},
    },
    server::{
        error::{registry::RegistryError, signup::SignupError, AppError},
        service::signup::SignupService,
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{matriculation::MatriculationFactory, user::UserFactory},
};

mod atomicity;
mod password_mismatch;
mod succeeds;
mod unknown_code;

/// A well-formed signup request for the given code and email.
fn signup_dto(code: &str, email: &str) -> SignupDto {
    SignupDto {
        matriculation_code: code.to_string(),
        email: email.to_string(),
        password: "s3cret-pass".to_string(),
        password_confirm: "s3cret-pass".to_string(),
        last_name: "Rakoto".to_string(),
        first_name: "Jean".to_string(),
        major: Major::ComputerScience,
        level: AcademicLevel::L1,
        phone: Some("0341234567".to_string()),
    }
}
