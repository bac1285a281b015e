//! Ad-hoc block rendering.
//!
//! `POST /render` takes any JSON body (a block array, a serialized block
//! array or plain text as a JSON string, or null) and returns the markup the
//! cards would show for it.

use axum::extract::State;
use axum::response::Html;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::content::render_content_blocks_with;
use crate::state::AppState;

/// Create the render router.
pub fn router() -> Router<AppState> {
    Router::new().route("/render", post(render))
}

async fn render(State(state): State<AppState>, Json(body): Json<Value>) -> Html<String> {
    Html(render_content_blocks_with(&body, state.render_options()))
}
