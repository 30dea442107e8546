//! Database repositories
//!
//! Provides the data access layer. Services talk to the [`Store`] port;
//! [`PgStore`] backs it with PostgreSQL and [`MemoryStore`] keeps records in
//! process memory for tests and local runs.

pub mod exercise;
pub mod memory;
pub mod postgres;
pub mod user;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub use exercise::{CreateExercise, ExerciseFilter, ExerciseRecord, ExerciseRepository};
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use user::{UserRecord, UserRepository};

/// Durable store holding users and their exercises.
///
/// Listing operations return records in insertion order.
#[async_trait]
pub trait Store: Send + Sync {
    /// Create a user with a fresh id
    async fn create_user(&self, username: &str) -> Result<UserRecord>;

    /// List every user in creation order
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Find a user by id
    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>>;

    /// Append an exercise
    async fn create_exercise(&self, input: CreateExercise) -> Result<ExerciseRecord>;

    /// Exercises matching the filter, in insertion order
    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<ExerciseRecord>>;

    /// Check the store is reachable
    async fn health_check(&self) -> Result<()>;

    /// Release the store's resources at shutdown
    async fn close(&self);
}
