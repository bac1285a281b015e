//! JSON API consumed by the page fragments.
//!
//! Each endpoint returns a JSON array. Private projects and articles are
//! never listed.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::models::{Article, Member, Project, Reminder};
use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/members", get(list_members))
        .route("/api/projects", get(list_projects))
        .route("/api/articles", get(list_articles))
        .route("/api/reminders", get(list_reminders))
}

async fn list_members(State(state): State<AppState>) -> Json<Vec<Member>> {
    Json(state.store().members().to_vec())
}

async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.store().public_projects().into_iter().cloned().collect())
}

async fn list_articles(State(state): State<AppState>) -> Json<Vec<Article>> {
    Json(state.store().public_articles().into_iter().cloned().collect())
}

async fn list_reminders(State(state): State<AppState>) -> Json<Vec<Reminder>> {
    Json(state.store().reminders().to_vec())
}
