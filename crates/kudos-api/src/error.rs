use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use kudos_core::KudosError;
use kudos_types::api::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Kudos(#[from] KudosError),

    #[error("Malformed request body.")]
    MalformedPayload,

    #[error("Unknown user.")]
    UnknownCaller,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Kudos(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Kudos(KudosError::RecipientNotFound | KudosError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Kudos(KudosError::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::Kudos(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MalformedPayload => StatusCode::BAD_REQUEST,
            ApiError::UnknownCaller => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
