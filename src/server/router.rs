use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{auth, matriculation, payment, profile, reservation, room},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/api/rooms", get(room::list_available))
        .route(
            "/api/reservations",
            get(reservation::list).post(reservation::create),
        )
        .route("/api/payments", get(payment::list).post(payment::create))
        .route(
            "/api/admin/matriculations",
            get(matriculation::list).post(matriculation::create),
        )
        .route(
            "/api/admin/matriculations/reset",
            post(matriculation::reset),
        )
        .route(
            "/api/admin/matriculations/{id}",
            get(matriculation::get)
                .put(matriculation::update)
                .delete(matriculation::delete),
        )
        .route("/api/admin/rooms", get(room::list_all).post(room::create))
        .route("/api/admin/rooms/available", post(room::mark_available))
        .route(
            "/api/admin/rooms/{id}",
            get(room::get).put(room::update).delete(room::delete),
        )
        .route(
            "/api/admin/reservations/{id}/cancel",
            post(reservation::cancel),
        )
}
