//! Exercise API routes

use super::FormOrJson;
use crate::error::ApiError;
use crate::repositories::ExerciseRecord;
use crate::services::{ExerciseService, LogExerciseInput, LogQuery};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use exercise_tracker_shared::dates::format_display_date;
use exercise_tracker_shared::types::{
    ExerciseLogEntry, ExerciseLogQuery, ExerciseLogResponse, ExerciseResponse, LogExerciseRequest,
};

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id/exercises", post(log_exercise))
        .route("/users/:id/logs", get(get_logs))
}

/// POST /api/users/:id/exercises - Log an exercise
async fn log_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormOrJson(req): FormOrJson<LogExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let input = LogExerciseInput::try_from(req)?;

    let (user, exercise) = ExerciseService::log_exercise(state.store(), &id, input).await?;

    Ok(Json(ExerciseResponse {
        id: user.id.to_string(),
        username: user.username,
        date: format_display_date(exercise.date),
        duration: exercise.duration,
        description: exercise.description,
    }))
}

/// GET /api/users/:id/logs - Get a user's exercise log
async fn get_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<ExerciseLogQuery>, QueryRejection>,
) -> Result<Json<ExerciseLogResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let query = LogQuery::try_from(query)?;

    let log = ExerciseService::get_log(state.store(), &id, query).await?;
    let count = log.count();

    Ok(Json(ExerciseLogResponse {
        id: log.user.id.to_string(),
        username: log.user.username,
        count,
        log: log.entries.into_iter().map(convert_entry).collect(),
    }))
}

fn convert_entry(exercise: ExerciseRecord) -> ExerciseLogEntry {
    ExerciseLogEntry {
        description: exercise.description,
        duration: exercise.duration,
        date: format_display_date(exercise.date),
    }
}
