use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/activities", get(handlers::list_activities))
        .route("/api/calculate", post(handlers::calculate_recovery))
        .route(
            "/api/history",
            get(handlers::list_history)
                .post(handlers::save_history)
                .delete(handlers::clear_history),
        )
        .route(
            "/api/history/:id",
            get(handlers::get_history).delete(handlers::delete_history),
        )
        .route("/api/theme", get(handlers::get_theme).put(handlers::set_theme))
        .route("/api/share", get(handlers::share))
        .with_state(state)
}
