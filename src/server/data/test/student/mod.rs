use crate::{
    model::student::{AcademicLevel, Major},
    server::{
        data::student::StudentRepository,
        model::student::{CreateStudentParams, UpdateStudentParams},
    },
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{student::StudentFactory, user::UserFactory},
};

mod create;
mod find_by_user_id;
