//! Exercise service
//!
//! Provides business logic for exercise tracking:
//! - Logging an exercise against a user, copying the user's name onto it
//! - Reading a user's log filtered by an inclusive date range and a limit

use crate::error::ApiError;
use crate::repositories::{CreateExercise, ExerciseFilter, ExerciseRecord, Store, UserRecord};
use crate::services::UserService;
use chrono::{NaiveDate, Utc};
use exercise_tracker_shared::dates::{epoch_date, parse_optional_date};
use exercise_tracker_shared::types::{ExerciseLogQuery, LogExerciseRequest};
use exercise_tracker_shared::validation::{
    first_error_message, parse_duration_minutes, parse_limit,
};
use tracing::{debug, info};
use validator::Validate;

/// Validated input for logging an exercise
#[derive(Debug, Clone, PartialEq)]
pub struct LogExerciseInput {
    pub description: String,
    pub duration: f64,
    /// `None` means "today"
    pub date: Option<NaiveDate>,
}

impl TryFrom<LogExerciseRequest> for LogExerciseInput {
    type Error = ApiError;

    fn try_from(request: LogExerciseRequest) -> Result<Self, Self::Error> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(first_error_message(&e)))?;

        let duration = parse_duration_minutes(request.duration.as_deref().unwrap_or_default())
            .map_err(ApiError::Validation)?;
        let date = parse_optional_date(request.date.as_deref())
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        Ok(Self {
            description: request.description.unwrap_or_default(),
            duration,
            date,
        })
    }
}

/// Parsed log query; unset bounds are resolved against the current date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl TryFrom<ExerciseLogQuery> for LogQuery {
    type Error = ApiError;

    fn try_from(query: ExerciseLogQuery) -> Result<Self, Self::Error> {
        let from = parse_optional_date(query.from.as_deref())
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        let to = parse_optional_date(query.to.as_deref())
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        let limit = parse_limit(query.limit.as_deref()).map_err(ApiError::Validation)?;

        Ok(Self { from, to, limit })
    }
}

impl LogQuery {
    /// Build the store filter for a user's exercises.
    ///
    /// `from` defaults to 1970-01-01 and `to` to `today`, both inclusive.
    pub fn into_filter(self, username: &str, today: NaiveDate) -> ExerciseFilter {
        ExerciseFilter {
            username: username.to_string(),
            from: self.from.unwrap_or_else(epoch_date),
            to: self.to.unwrap_or(today),
            limit: self.limit,
        }
    }
}

/// A user together with the selected part of their log
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: UserRecord,
    pub entries: Vec<ExerciseRecord>,
}

impl ExerciseLog {
    /// Number of returned entries, not the user's lifetime total
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Exercise service for business logic
pub struct ExerciseService;

impl ExerciseService {
    /// Log an exercise for the user with the given id.
    ///
    /// The stored username of the user is copied onto the exercise.
    pub async fn log_exercise(
        store: &dyn Store,
        raw_user_id: &str,
        input: LogExerciseInput,
    ) -> Result<(UserRecord, ExerciseRecord), ApiError> {
        let user = UserService::get_user(store, raw_user_id).await?;

        let exercise = store
            .create_exercise(CreateExercise {
                username: user.username.clone(),
                description: input.description,
                duration: input.duration,
                date: input.date.unwrap_or_else(today),
            })
            .await?;

        info!(
            user_id = %user.id,
            exercise_id = %exercise.id,
            date = %exercise.date,
            "Exercise logged"
        );
        Ok((user, exercise))
    }

    /// Get the exercise log of the user with the given id
    pub async fn get_log(
        store: &dyn Store,
        raw_user_id: &str,
        query: LogQuery,
    ) -> Result<ExerciseLog, ApiError> {
        let user = UserService::get_user(store, raw_user_id).await?;

        let filter = query.into_filter(&user.username, today());
        debug!(?filter, "Fetching exercise log");
        let entries = store.find_exercises(&filter).await?;

        Ok(ExerciseLog { user, entries })
    }
}

/// Current UTC calendar date
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
