use axum::{Router, routing::get};

use infra::{
    AppState,
    http::handler::skin_analysis::{analysis_dates, by_date, by_id},
};

pub fn create_skin_analysis_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{analysis_id}", get(by_id))
        .route("/users/{user_id}/dates", get(analysis_dates))
        .route("/users/{user_id}/by-date", get(by_date))
        .with_state(app_state)
}
