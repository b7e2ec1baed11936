pub mod error;
pub mod kudos;
pub mod middleware;
pub mod state;
pub mod users;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, patch},
};

use crate::state::AppState;

/// All HTTP routes. Everything under `/api` runs behind caller resolution.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(users::health));

    let protected_routes = Router::new()
        .route("/api/current-user", get(users::current_user))
        .route("/api/users", get(users::list_users))
        .route("/api/kudos", get(kudos::list_kudos).post(kudos::create_kudo))
        .route("/api/kudos/{id}/hide", patch(kudos::hide_kudo))
        .route("/api/kudos/{id}/unhide", patch(kudos::unhide_kudo))
        .route("/api/kudos/{id}", delete(kudos::delete_kudo))
        .layer(from_fn_with_state(state.clone(), middleware::resolve_caller));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
