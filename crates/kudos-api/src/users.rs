use axum::{Extension, Json, extract::State, response::IntoResponse};

use kudos_types::api::{CurrentUser, CurrentUserResponse, UsersResponse};

use crate::error::ApiError;
use crate::middleware::Caller;
use crate::state::AppState;

pub async fn current_user(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .kudos
        .directory()
        .find_user(&caller.user_id)
        .cloned()
        .ok_or(ApiError::UnknownCaller)?;

    Ok(Json(CurrentUserResponse {
        user: CurrentUser {
            user,
            is_admin: caller.is_admin,
        },
    }))
}

/// Everyone the caller can send kudos to.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> impl IntoResponse {
    let users = state.kudos.directory().colleagues_of(&caller.user_id);
    Json(UsersResponse { users })
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
