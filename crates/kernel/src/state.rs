//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::content::RenderOptions;
use crate::fetch::FragmentClient;
use crate::store::ContentStore;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Records served by the JSON API.
    store: ContentStore,

    /// Client used to render fragments from the JSON API.
    fragments: FragmentClient,

    /// Block and card rendering policy.
    render_options: RenderOptions,
}

impl AppState {
    /// Build state from configuration, loading the content store.
    pub fn new(config: &Config) -> Result<Self> {
        let store = ContentStore::open(config.data_path.as_deref())
            .context("failed to open content store")?;
        info!(records = store.len(), "content store ready");
        Ok(Self::from_parts(config, store))
    }

    /// Build state around an already loaded store.
    pub fn from_parts(config: &Config, store: ContentStore) -> Self {
        let render_options = if config.sanitize_blocks {
            RenderOptions::sanitized()
        } else {
            RenderOptions::verbatim()
        };
        let fragments = FragmentClient::new(config.api_base_url.clone(), render_options);

        Self {
            inner: Arc::new(AppStateInner {
                store,
                fragments,
                render_options,
            }),
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.inner.store
    }

    pub fn fragments(&self) -> &FragmentClient {
        &self.inner.fragments
    }

    pub fn render_options(&self) -> RenderOptions {
        self.inner.render_options
    }
}
