//! Fragment fetcher.
//!
//! Loads a region's records from the JSON API and renders them through the
//! region's card template. A failed request or an undecodable body replaces
//! the whole region with its error placeholder; nothing is retried.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::content::RenderOptions;
use crate::fragments::{self, Region};
use crate::models::{Article, Member, Project, Reminder};

/// Errors raised while loading a region's records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// HTTP client that renders page regions from the JSON API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FragmentClient {
    http: reqwest::Client,
    base_url: Url,
    options: RenderOptions,
}

impl FragmentClient {
    pub fn new(base_url: Url, options: RenderOptions) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, options)
    }

    pub fn with_client(http: reqwest::Client, base_url: Url, options: RenderOptions) -> Self {
        Self {
            http,
            base_url,
            options,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch and decode the JSON array served at `endpoint`.
    pub async fn fetch_records<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Vec<T>, FetchError> {
        let url = self.base_url.join(endpoint)?;
        debug!(%url, "fetching records");
        let records = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;
        Ok(records)
    }

    /// Render a region, or its error placeholder if loading fails.
    pub async fn render_region(&self, region: Region) -> String {
        match self.try_render_region(region).await {
            Ok(html) => html,
            Err(e) => {
                warn!(%region, error = %e, "failed to load region");
                region.error_placeholder().to_string()
            }
        }
    }

    /// Render several independent regions concurrently, in input order.
    pub async fn render_regions(&self, regions: &[Region]) -> Vec<(Region, String)> {
        let mut tasks = tokio::task::JoinSet::new();
        for (index, &region) in regions.iter().enumerate() {
            let client = self.clone();
            tasks.spawn(async move { (index, region, client.render_region(region).await) });
        }

        let mut rendered: Vec<Option<(Region, String)>> = vec![None; regions.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, region, html)) => rendered[index] = Some((region, html)),
                Err(e) => warn!(error = %e, "region task failed"),
            }
        }

        rendered
            .into_iter()
            .zip(regions)
            .map(|(slot, &region)| {
                slot.unwrap_or_else(|| (region, region.error_placeholder().to_string()))
            })
            .collect()
    }

    async fn try_render_region(&self, region: Region) -> Result<String, FetchError> {
        let endpoint = region.endpoint();
        let html = match region {
            Region::Members => {
                let members: Vec<Member> = self.fetch_records(endpoint).await?;
                fragments::render_members(&members, self.options)
            }
            Region::Projects | Region::NewsProjects => {
                let projects: Vec<Project> = self.fetch_records(endpoint).await?;
                fragments::render_projects(&projects, self.options)
            }
            Region::Articles | Region::NewsArticles => {
                let articles: Vec<Article> = self.fetch_records(endpoint).await?;
                fragments::render_articles(&articles, self.options)
            }
            Region::Reminders => {
                let reminders: Vec<Reminder> = self.fetch_records(endpoint).await?;
                fragments::render_reminders(&reminders, self.options)
            }
        };
        Ok(html)
    }
}
