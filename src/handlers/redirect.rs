use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{error::ApiError, AppState};

/// GET /redirect/:code
///
/// Look the code up in the store and bounce the client to the original URL.
/// An unknown code is a hard 404: the handler returns before any redirect
/// is built, so a miss can never send the client to an empty target.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, ApiError> {
    let record = state.store.get(&code).ok_or(ApiError::NotFound)?;

    tracing::debug!(code = %code, target = %record.original_url, "redirecting");

    Ok(Redirect::to(&record.original_url).into_response())
}
