//! User service for user management

use crate::error::ApiError;
use crate::repositories::{Store, UserRecord};
use exercise_tracker_shared::types::CreateUserRequest;
use exercise_tracker_shared::validation::first_error_message;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Create a new user
    pub async fn create_user(
        store: &dyn Store,
        request: CreateUserRequest,
    ) -> Result<UserRecord, ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(first_error_message(&e)))?;
        let username = request.username.unwrap_or_default();

        let user = store.create_user(&username).await?;

        info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// List every user in creation order
    pub async fn list_users(store: &dyn Store) -> Result<Vec<UserRecord>, ApiError> {
        Ok(store.list_users().await?)
    }

    /// Look up a user by the raw id taken from the request path
    pub async fn get_user(store: &dyn Store, raw_id: &str) -> Result<UserRecord, ApiError> {
        let id = Self::parse_user_id(raw_id)?;

        store
            .find_user(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User not found: {}", raw_id)))
    }

    /// Parse a user id from its textual form
    pub fn parse_user_id(raw_id: &str) -> Result<Uuid, ApiError> {
        Uuid::parse_str(raw_id.trim())
            .map_err(|_| ApiError::Validation(format!("Invalid user id: \"{}\"", raw_id)))
    }
}
