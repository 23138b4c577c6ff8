use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/report", get(handlers::get_report))
        .route(
            "/api/members",
            get(handlers::list_members).post(handlers::add_member),
        )
        .route("/api/members/:name", delete(handlers::remove_member))
        .route(
            "/api/checkins",
            post(handlers::check_in).put(handlers::edit_check_in),
        )
        .route("/api/export", get(handlers::export_csv))
        .with_state(state)
}
