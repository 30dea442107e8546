//! User API routes

use super::FormOrJson;
use crate::error::ApiError;
use crate::repositories::UserRecord;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use exercise_tracker_shared::types::{CreateUserRequest, UserResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).get(list_users))
}

/// POST /api/users - Create a user
async fn create_user(
    State(state): State<AppState>,
    FormOrJson(req): FormOrJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserService::create_user(state.store(), req).await?;

    Ok(Json(convert_user(user)))
}

/// GET /api/users - List all users
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserService::list_users(state.store()).await?;

    Ok(Json(users.into_iter().map(convert_user).collect()))
}

fn convert_user(user: UserRecord) -> UserResponse {
    UserResponse {
        username: user.username,
        id: user.id.to_string(),
    }
}
