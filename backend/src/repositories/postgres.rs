//! PostgreSQL-backed store

use super::{
    CreateExercise, ExerciseFilter, ExerciseRecord, ExerciseRepository, Store, UserRecord,
    UserRepository,
};
use crate::db;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Store adapter over a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, username: &str) -> Result<UserRecord> {
        UserRepository::create(&self.pool, username).await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        UserRepository::list(&self.pool).await
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        UserRepository::find_by_id(&self.pool, id).await
    }

    async fn create_exercise(&self, input: CreateExercise) -> Result<ExerciseRecord> {
        ExerciseRepository::create(&self.pool, input).await
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<ExerciseRecord>> {
        ExerciseRepository::find(&self.pool, filter).await
    }

    async fn health_check(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }

    async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }
}
