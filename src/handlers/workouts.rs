use askama::Template;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutForm};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
}

// Templates
#[derive(Template)]
#[template(path = "list.html")]
struct WorkoutsListTemplate {
    workouts: Vec<Workout>,
}

#[derive(Template)]
#[template(path = "new.html")]
struct NewWorkoutTemplate;

#[derive(Template)]
#[template(path = "show.html")]
struct ShowWorkoutTemplate {
    workout: Workout,
}

#[derive(Template)]
#[template(path = "edit.html")]
struct EditWorkoutTemplate {
    workout: Workout,
}

/// Accept only `[0-9]+` ids that fit in an `i64`.
fn parse_id(raw: &str) -> Result<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest("Invalid workout ID".to_string()));
    }
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid workout ID".to_string()))
}

/// Undecodable bodies (wrong content type, repeated keys) are client errors.
fn read_form(
    form: std::result::Result<Form<WorkoutForm>, FormRejection>,
) -> Result<WorkoutForm> {
    let Form(form) = form.map_err(|rejection| {
        tracing::warn!("Invalid form body: {}", rejection.body_text());
        AppError::BadRequest("Invalid form data".to_string())
    })?;
    Ok(form)
}

fn parse_duration(raw: &str) -> Result<i64> {
    raw.parse().map_err(|e| {
        tracing::warn!("Invalid duration {:?}: {}", raw, e);
        AppError::BadRequest("Invalid duration".to_string())
    })
}

async fn find_workout(state: &WorkoutsState, raw_id: &str) -> Result<Workout> {
    let id = parse_id(raw_id)?;
    state
        .workout_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))
}

// Handlers
pub async fn list(State(state): State<WorkoutsState>) -> Result<Response> {
    let workouts = state.workout_repo.find_all().await?;

    let template = WorkoutsListTemplate { workouts };
    Ok(Html(template.render()?).into_response())
}

pub async fn new_page() -> Result<Response> {
    Ok(Html(NewWorkoutTemplate.render()?).into_response())
}

pub async fn create(
    State(state): State<WorkoutsState>,
    form: std::result::Result<Form<WorkoutForm>, FormRejection>,
) -> Result<Response> {
    let form = read_form(form)?;
    tracing::debug!(
        exercise = %form.exercise,
        duration = %form.duration,
        location = %form.location,
        description = %form.description,
        "Create workout form submitted"
    );

    let duration = parse_duration(&form.duration)?;

    let id = state
        .workout_repo
        .create(&form.exercise, duration, &form.location, &form.description)
        .await?;
    tracing::info!("Inserted workout with ID: {}", id);

    Ok(Redirect::to("/").into_response())
}

pub async fn show(
    State(state): State<WorkoutsState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let workout = find_workout(&state, &id).await?;

    let template = ShowWorkoutTemplate { workout };
    Ok(Html(template.render()?).into_response())
}

pub async fn edit_page(
    State(state): State<WorkoutsState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let workout = find_workout(&state, &id).await?;

    let template = EditWorkoutTemplate { workout };
    Ok(Html(template.render()?).into_response())
}

pub async fn update(
    State(state): State<WorkoutsState>,
    Path(id): Path<String>,
    form: std::result::Result<Form<WorkoutForm>, FormRejection>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let form = read_form(form)?;
    let duration = parse_duration(&form.duration)?;

    let matched = state
        .workout_repo
        .update(
            id,
            &form.exercise,
            duration,
            &form.location,
            &form.description,
        )
        .await?;
    if !matched {
        tracing::debug!("Update matched no workout with ID: {}", id);
    }

    Ok(Redirect::to(&format!("/workout/{}", id)).into_response())
}
