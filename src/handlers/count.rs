use std::sync::Arc;

use axum::extract::State;
use chrono::Utc;

use crate::metrics::{REQUEST_TOTAL, WINDOW_COUNT};
use crate::state::AppState;

// root handler - record the hit, then report the window count
pub async fn count_handler(State(state): State<Arc<AppState>>) -> String {
    REQUEST_TOTAL.inc();

    let timestamp = Utc::now().timestamp();
    state.counter.record(timestamp);

    let count = state.counter.count_recent();
    WINDOW_COUNT.set(count as f64);

    format!(
        "Requests in the last {} seconds: {}",
        state.counter.window_secs(),
        count
    )
}
