use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::workouts;

pub fn create_router(
    workouts_state: workouts::WorkoutsState,
    static_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        // Workout routes
        .route("/", get(workouts::list))
        .route("/workout/new", get(workouts::new_page))
        .route("/workout/create", post(workouts::create))
        .route("/workout/{id}", get(workouts::show))
        .route("/workout/{id}/edit", get(workouts::edit_page))
        .route("/workout/{id}/update", post(workouts::update))
        .with_state(workouts_state)
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
