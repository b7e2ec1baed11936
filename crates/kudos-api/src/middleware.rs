use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Header naming the acting user. Set upstream by whatever fronts the board.
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: String,
    pub is_admin: bool,
}

/// Resolve the acting user from `X-User-Id` (or the configured default)
/// and attach it to the request as a [`Caller`].
pub async fn resolve_caller(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = match req.headers().get(USER_ID_HEADER) {
        Some(value) => value
            .to_str()
            .map_err(|_| ApiError::UnknownCaller)?
            .trim()
            .to_string(),
        None => state.default_user_id.clone(),
    };

    let directory = state.kudos.directory();
    if directory.find_user(&user_id).is_none() {
        warn!("Unknown caller '{}'", user_id);
        return Err(ApiError::UnknownCaller);
    }

    let caller = Caller {
        is_admin: directory.is_admin(&user_id),
        user_id,
    };
    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}
