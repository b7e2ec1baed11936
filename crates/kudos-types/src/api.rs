use serde::{Deserialize, Serialize};

use crate::models::{KudoView, User};

// -- Kudos --

/// Both fields are optional at the wire level so a missing field can be
/// reported as a validation error instead of a deserialization failure.
/// Extra fields (a client-supplied `senderId`, say) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateKudoRequest {
    #[serde(rename = "recipientId", default)]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HideKudoRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KudoResponse {
    pub kudo: KudoView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KudosListResponse {
    pub kudos: Vec<KudoView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteKudoResponse {
    pub message: String,
}

// -- Users --

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: CurrentUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
