use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::dashboard::{render_page, Page};
use crate::db::{fetch_recent, ConnectionProvider, RecordSource};

#[derive(Clone)]
pub struct WebState {
    pub provider: Arc<ConnectionProvider>,
    pub source: RecordSource,
    pub fetch_limit: i64,
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/refresh", post(post_refresh))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn get_dashboard(State(state): State<WebState>) -> Html<String> {
    Html(render_cycle(&state).await)
}

/// Answers with 303 to `/`, which runs a fresh fetch and render.
/// Only the connection survives across cycles, so there is nothing else to invalidate.
async fn post_refresh() -> Redirect {
    info!("Refresh requested");
    Redirect::to("/")
}

/// Connection → fetch → render. The record set lives only for this call.
async fn render_cycle(state: &WebState) -> String {
    let outcome = fetch_recent(&state.provider, &state.source, state.fetch_limit).await;
    if let Some(notice) = &outcome.notice {
        warn!("Rendering degraded dashboard: {}", notice.message());
    }
    render_page(&Page {
        records: &outcome.records,
        notice: outcome.notice.as_ref(),
        rendered_at: Utc::now(),
    })
}
