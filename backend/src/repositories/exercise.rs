//! Exercise repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from database
///
/// `username` is copied from the owning user when the exercise is logged.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub username: String,
    pub description: String,
    /// Minutes; fractional and negative values are stored as given
    pub duration: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub username: String,
    pub description: String,
    pub duration: f64,
    pub date: NaiveDate,
}

/// Selection of a user's exercises for a log query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub username: String,
    /// Inclusive lower bound
    pub from: NaiveDate,
    /// Inclusive upper bound
    pub to: NaiveDate,
    /// Maximum number of records, `None` for all
    pub limit: Option<i64>,
}

impl ExerciseFilter {
    /// Whether a record falls inside the filter, ignoring the limit
    pub fn matches(&self, record: &ExerciseRecord) -> bool {
        record.username == self.username && record.date >= self.from && record.date <= self.to
    }
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new exercise
    pub async fn create(pool: &PgPool, input: CreateExercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (username, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, description, duration, date, created_at
            "#,
        )
        .bind(&input.username)
        .bind(&input.description)
        .bind(input.duration)
        .bind(input.date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find exercises by owner username within an inclusive date range.
    ///
    /// A `NULL` limit leaves the result uncapped.
    pub async fn find(pool: &PgPool, filter: &ExerciseFilter) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, username, description, duration, date, created_at
            FROM exercises
            WHERE username = $1 AND date >= $2 AND date <= $3
            ORDER BY seq
            LIMIT $4
            "#,
        )
        .bind(&filter.username)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, date: NaiveDate) -> ExerciseRecord {
        ExerciseRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            description: "run".to_string(),
            duration: 30.0,
            date,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let jan = |d| NaiveDate::from_ymd_opt(2023, 1, d).unwrap();
        let filter = ExerciseFilter {
            username: "fcc".to_string(),
            from: jan(1),
            to: jan(31),
            limit: None,
        };

        assert!(filter.matches(&record("fcc", jan(1))));
        assert!(filter.matches(&record("fcc", jan(31))));
        assert!(filter.matches(&record("fcc", jan(15))));
        assert!(!filter.matches(&record("fcc", NaiveDate::from_ymd_opt(2022, 12, 31).unwrap())));
        assert!(!filter.matches(&record("fcc", NaiveDate::from_ymd_opt(2023, 2, 1).unwrap())));
    }

    #[test]
    fn test_filter_matches_username_exactly() {
        let day = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
        let filter = ExerciseFilter {
            username: "fcc".to_string(),
            from: day,
            to: day,
            limit: None,
        };

        assert!(!filter.matches(&record("FCC", day)));
        assert!(!filter.matches(&record("fcc2", day)));
    }
}
