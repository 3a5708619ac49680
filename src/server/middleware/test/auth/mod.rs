use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{student::StudentFactory, user::UserFactory},
};

mod require;
