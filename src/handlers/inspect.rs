use std::sync::Arc;

use axum::extract::State;

use crate::AppState;

/// GET /db
///
/// Development dump of the whole store: one label line per record followed by
/// the record rendered as JSON. The route is only mounted when INSPECT_ROUTES
/// is set, so a production deployment never exposes it.
pub async fn dump(State(state): State<Arc<AppState>>) -> String {
    let mut out = String::new();
    for record in state.store.records() {
        let json = serde_json::to_string(&record).unwrap_or_else(|_| "{}".into());
        out.push_str(&format!("key : {} value : {}\n", record.short_code, json));
    }
    out
}
