use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{codes, error::ApiError, AppState};

#[derive(Deserialize)]
pub struct ShortenRequest {
    url: String,
}

#[derive(Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

/// POST /shorten
///
/// Body: `{"url": "<string>"}`. The URL itself is not validated; any string
/// shortens. Re-submitting a URL derives the same code and overwrites the
/// stored record, so its id and timestamp always reflect the latest call.
///
/// The body is parsed by hand instead of through the `Json` extractor so that
/// bad syntax, a wrong shape, and a missing field all answer with the same
/// plain 400 and the store stays untouched on every error path.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, ApiError> {
    let req: ShortenRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;

    let code = codes::shorten_code(&req.url, state.config.code_length);
    let record = state.store.insert(&code, &req.url);

    tracing::info!(code = %record.short_code, id = record.id, "shortened URL");

    Ok(Json(ShortenResponse {
        short_url: format!("{}/redirect/{}", state.config.base_url, record.short_code),
    }))
}
