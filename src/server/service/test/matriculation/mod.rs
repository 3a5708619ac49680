use crate::server::{
    error::{registry::RegistryError, AppError},
    service::matriculation::MatriculationService,
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{matriculation::MatriculationFactory, student::StudentFactory, user::UserFactory},
};

mod delete;
