//! In-memory store
//!
//! Keeps users and exercises in append-only vectors guarded by an async
//! `RwLock`. Nothing survives a restart.

use super::{CreateExercise, ExerciseFilter, ExerciseRecord, Store, UserRecord};
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<UserRecord>,
    exercises: Vec<ExerciseRecord>,
}

/// Store adapter that lives in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, username: &str) -> Result<UserRecord> {
        if username.is_empty() {
            bail!("username is required");
        }

        let user = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        self.data.write().await.users.push(user.clone());

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.data.read().await.users.clone())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_exercise(&self, input: CreateExercise) -> Result<ExerciseRecord> {
        if input.description.is_empty() {
            bail!("description is required");
        }

        let record = ExerciseRecord {
            id: Uuid::new_v4(),
            username: input.username,
            description: input.description,
            duration: input.duration,
            date: input.date,
            created_at: Utc::now(),
        };
        self.data.write().await.exercises.push(record.clone());

        Ok(record)
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<ExerciseRecord>> {
        let data = self.data.read().await;
        let matching = data.exercises.iter().filter(|e| filter.matches(e)).cloned();

        let records = match filter.limit.and_then(|n| usize::try_from(n).ok()) {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        };

        Ok(records)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn day(n: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + chrono::Duration::days(n)
    }

    fn exercise(username: &str, description: &str, date: NaiveDate) -> CreateExercise {
        CreateExercise {
            username: username.to_string(),
            description: description.to_string(),
            duration: 30.0,
            date,
        }
    }

    #[tokio::test]
    async fn test_users_keep_creation_order_and_unique_ids() {
        let store = MemoryStore::new();
        let a = store.create_user("alice").await.unwrap();
        let b = store.create_user("bob").await.unwrap();
        let c = store.create_user("alice").await.unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);

        let users = store.list_users().await.unwrap();
        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "alice"]);
    }

    #[tokio::test]
    async fn test_create_user_rejects_empty_username() {
        let store = MemoryStore::new();
        assert!(store.create_user("").await.is_err());
        assert!(store.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_user() {
        let store = MemoryStore::new();
        let user = store.create_user("alice").await.unwrap();

        assert_eq!(store.find_user(user.id).await.unwrap(), Some(user));
        assert_eq!(store.find_user(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_exercises_keeps_insertion_order_and_limit() {
        let store = MemoryStore::new();
        for (i, description) in ["c", "a", "b"].iter().enumerate() {
            store
                .create_exercise(exercise("alice", description, day(2 - i as i64)))
                .await
                .unwrap();
        }
        store.create_exercise(exercise("bob", "x", day(0))).await.unwrap();

        let mut filter = ExerciseFilter {
            username: "alice".to_string(),
            from: day(0),
            to: day(10),
            limit: None,
        };
        let all = store.find_exercises(&filter).await.unwrap();
        let descriptions: Vec<_> = all.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["c", "a", "b"]);

        filter.limit = Some(2);
        let limited = store.find_exercises(&filter).await.unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].description, "c");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Filtered results stay inside the range, respect the limit and
        /// never drop a matching record when uncapped
        #[test]
        fn prop_find_exercises_respects_range_and_limit(
            offsets in prop::collection::vec(0i64..60, 0..30),
            from in 0i64..60,
            span in 0i64..60,
            limit in prop::option::of(1i64..10),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let store = MemoryStore::new();
                for offset in &offsets {
                    store.create_exercise(exercise("alice", "run", day(*offset))).await.unwrap();
                }

                let filter = ExerciseFilter {
                    username: "alice".to_string(),
                    from: day(from),
                    to: day(from + span),
                    limit,
                };
                let found = store.find_exercises(&filter).await.unwrap();

                let expected = offsets.iter().filter(|o| **o >= from && **o <= from + span).count();
                let expected = limit.map_or(expected, |l| expected.min(l as usize));

                assert_eq!(found.len(), expected);
                assert!(found.iter().all(|e| e.date >= filter.from && e.date <= filter.to));
            });
        }
    }
}
