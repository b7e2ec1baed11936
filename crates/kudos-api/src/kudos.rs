use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::de::DeserializeOwned;

use kudos_types::api::{
    CreateKudoRequest, DeleteKudoResponse, HideKudoRequest, KudoResponse, KudosListResponse,
};

use crate::error::ApiError;
use crate::middleware::Caller;
use crate::state::AppState;

/// An empty or `null` body reads as `T::default()` so absent fields surface
/// as validation errors from the service.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let body: Option<T> = serde_json::from_slice(body).map_err(|_| ApiError::MalformedPayload)?;
    Ok(body.unwrap_or_default())
}

pub async fn list_kudos(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<impl IntoResponse, ApiError> {
    let kudos = state.kudos.list(caller.is_admin)?;
    Ok(Json(KudosListResponse { kudos }))
}

pub async fn create_kudo(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: CreateKudoRequest = parse_body(&body)?;

    let kudo = state.kudos.create(
        &caller.user_id,
        req.recipient_id.as_deref(),
        req.message.as_deref(),
    )?;

    Ok((StatusCode::CREATED, Json(KudoResponse { kudo })))
}

pub async fn hide_kudo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(caller): Extension<Caller>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: HideKudoRequest = parse_body(&body)?;
    let kudo = state.kudos.hide(&id, &caller.user_id, req.reason.as_deref())?;
    Ok(Json(KudoResponse { kudo }))
}

pub async fn unhide_kudo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(caller): Extension<Caller>,
) -> Result<impl IntoResponse, ApiError> {
    let kudo = state.kudos.unhide(&id, &caller.user_id)?;
    Ok(Json(KudoResponse { kudo }))
}

pub async fn delete_kudo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(caller): Extension<Caller>,
) -> Result<impl IntoResponse, ApiError> {
    state.kudos.delete(&id, &caller.user_id)?;
    Ok(Json(DeleteKudoResponse {
        message: "Kudos deleted successfully".into(),
    }))
}
