use std::path::PathBuf;

use axum::{body::Body, http::Response, Router};
use http_body_util::BodyExt;

use workoutlog::db::{create_memory_pool, init_schema, DbPool};
use workoutlog::handlers::workouts::WorkoutsState;
use workoutlog::repositories::WorkoutRepository;
use workoutlog::routes::create_router;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    init_schema(&pool).expect("Failed to create schema");
    pool
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn create_test_app(pool: DbPool) -> Router {
    let workouts_state = WorkoutsState {
        workout_repo: WorkoutRepository::new(pool),
    };
    create_router(workouts_state, static_dir())
}

pub fn form_body(exercise: &str, duration: &str, location: &str, description: &str) -> String {
    serde_urlencoded::to_string([
        ("exercise", exercise),
        ("duration", duration),
        ("location", location),
        ("description", description),
    ])
    .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn create_test_workout(
    pool: &DbPool,
    exercise: &str,
    duration: i64,
    location: &str,
    description: &str,
) -> i64 {
    let workout_repo = WorkoutRepository::new(pool.clone());
    workout_repo
        .create(exercise, duration, location, description)
        .await
        .unwrap()
}
