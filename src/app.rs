use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/print", get(handlers::print_view))
        .route("/export/json", get(handlers::export_json))
        .route("/export/csv", get(handlers::export_csv))
        .route("/day/:key/toggle", post(handlers::form_toggle))
        .route("/day/:key/clear", post(handlers::form_clear_day))
        .route("/clear", post(handlers::form_clear_all))
        .route("/gestures/add", post(handlers::form_add_gesture))
        .route("/gestures/rename", post(handlers::form_rename_gesture))
        .route("/range", post(handlers::form_range))
        .route("/range/today", post(handlers::form_today))
        .route("/api/journal", get(handlers::get_journal))
        .route("/api/stats", get(handlers::get_stats))
        .route(
            "/api/gestures",
            get(handlers::list_gestures).post(handlers::add_gesture),
        )
        .route("/api/gestures/:id", put(handlers::rename_gesture))
        .route("/api/days", delete(handlers::clear_all))
        .route(
            "/api/days/:key",
            get(handlers::get_day).delete(handlers::clear_day),
        )
        .route("/api/days/:key/toggle", post(handlers::toggle_day))
        .route(
            "/api/range",
            get(handlers::get_range).put(handlers::update_range),
        )
        .route("/api/range/today", post(handlers::reset_range))
        .with_state(state)
}
