use crate::app::AppState;
use aircast_core::RecordingMeta;
use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

fn authorized(headers: &HeaderMap, admin_token: &str) -> bool {
    headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|token| token == admin_token)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Unauthorized"})),
    )
        .into_response()
}

/// `POST /api/upload` — admin uploads a recorded blob as multipart field
/// `audio`; the stored metadata record comes back in the response.
pub async fn upload_recording(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if !authorized(&headers, &state.config.admin_token) {
        return unauthorized();
    }

    let mut audio: Option<Bytes> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("audio") {
            match field.bytes().await {
                Ok(bytes) => audio = Some(bytes),
                Err(e) => warn!("Dropping unreadable upload field: {}", e),
            }
            break;
        }
    }

    let Some(audio) = audio else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "No file"}))).into_response();
    };

    match state.store.save(&audio).await {
        Ok(meta) => Json(json!({"ok": true, "meta": meta})).into_response(),
        Err(e) => {
            error!("Failed to store recording: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Storage failure"})),
            )
                .into_response()
        }
    }
}

/// `GET /api/recordings` — the metadata index, newest first.
pub async fn list_recordings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers, &state.config.admin_token) {
        return unauthorized();
    }

    Json::<Vec<RecordingMeta>>(state.store.list().await).into_response()
}
