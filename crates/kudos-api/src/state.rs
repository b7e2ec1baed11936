use std::sync::Arc;

use kudos_core::KudosService;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub kudos: KudosService,
    /// Caller assumed when a request carries no identity header.
    pub default_user_id: String,
}
