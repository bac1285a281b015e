//! Rendered page fragments.
//!
//! `GET /fragments/{region}` loads the region's records through the JSON API
//! and returns the markup to inject into the region's element. Failures
//! render the region's error placeholder with a 200 status, like any other
//! fragment.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::error::AppResult;
use crate::fragments::Region;
use crate::state::AppState;

/// Response header naming the element the fragment belongs in.
pub const FRAGMENT_TARGET_HEADER: HeaderName = HeaderName::from_static("x-fragment-target");

/// Response header carrying the section title for regions that set one.
pub const FRAGMENT_TITLE_HEADER: HeaderName = HeaderName::from_static("x-fragment-title");

/// Create the fragment router.
pub fn router() -> Router<AppState> {
    Router::new().route("/fragments/{region}", get(render_fragment))
}

async fn render_fragment(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> AppResult<impl IntoResponse> {
    let region: Region = region.parse()?;
    let html = state.fragments().render_region(region).await;

    let mut headers = HeaderMap::new();
    headers.insert(
        FRAGMENT_TARGET_HEADER,
        HeaderValue::from_static(region.target_id()),
    );
    if let Some(title) = region.section_title() {
        headers.insert(FRAGMENT_TITLE_HEADER, HeaderValue::from_static(title));
    }

    Ok((headers, Html(html)))
}
