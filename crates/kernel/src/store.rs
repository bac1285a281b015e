//! In-memory content store behind the JSON API.
//!
//! Loaded once at startup from a JSON data file, or from the built-in seed
//! when no file is configured. Records are immutable afterwards.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::models::{Article, Member, Project, Reminder};

/// Seed data served when no data file is configured.
const SEED_DATA: &str = include_str!("../data/seed.json");

/// All site records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentStore {
    members: Vec<Member>,
    projects: Vec<Project>,
    articles: Vec<Article>,
    reminders: Vec<Reminder>,
}

impl ContentStore {
    /// Parse a store from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let store: Self = serde_json::from_str(text).context("invalid content data")?;
        Ok(store.upgrade_legacy())
    }

    /// Load a store from a JSON data file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let store =
            Self::from_json(&text).with_context(|| format!("failed to load {}", path.display()))?;
        info!(path = %path.display(), records = store.len(), "content data loaded");
        Ok(store)
    }

    /// The built-in seed data.
    pub fn seeded() -> Result<Self> {
        Self::from_json(SEED_DATA).context("built-in seed data is invalid")
    }

    /// Load from `path` when given, otherwise use the seed.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("no data file configured, serving seed data");
                Self::seeded()
            }
        }
    }

    fn upgrade_legacy(mut self) -> Self {
        self.projects = self.projects.into_iter().map(Project::upgrade_legacy).collect();
        self.articles = self.articles.into_iter().map(Article::upgrade_legacy).collect();
        self
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Projects not marked private.
    pub fn public_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| !p.is_private).collect()
    }

    /// Articles not marked private.
    pub fn public_articles(&self) -> Vec<&Article> {
        self.articles.iter().filter(|a| !a.is_private).collect()
    }

    /// Total number of records of every kind.
    pub fn len(&self) -> usize {
        self.members.len() + self.projects.len() + self.articles.len() + self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
