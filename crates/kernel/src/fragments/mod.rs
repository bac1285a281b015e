//! Page fragments.
//!
//! A fragment is the inner markup of one page region (members grid, project
//! grid, news lists, reminders sidebar). Each [`Region`] names the endpoint its
//! records come from, the element it fills, and the placeholder shown when
//! loading fails.

mod cards;

pub use cards::{
    render_article_card, render_articles, render_member_card, render_members,
    render_project_card, render_projects, render_reminder, render_reminders,
};

use std::fmt;
use std::str::FromStr;

/// A page region filled from one API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Members,
    Projects,
    Articles,
    NewsProjects,
    NewsArticles,
    Reminders,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Members,
        Region::Projects,
        Region::Articles,
        Region::NewsProjects,
        Region::NewsArticles,
        Region::Reminders,
    ];

    /// Slug used in fragment URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Region::Members => "members",
            Region::Projects => "projects",
            Region::Articles => "articles",
            Region::NewsProjects => "news-projects",
            Region::NewsArticles => "news-articles",
            Region::Reminders => "reminders",
        }
    }

    /// API path the region's records are read from.
    pub fn endpoint(self) -> &'static str {
        match self {
            Region::Members => "/api/members",
            Region::Projects | Region::NewsProjects => "/api/projects",
            Region::Articles | Region::NewsArticles => "/api/articles",
            Region::Reminders => "/api/reminders",
        }
    }

    /// Id of the page element the fragment is injected into.
    pub fn target_id(self) -> &'static str {
        match self {
            Region::Members => "members-grid",
            Region::Projects | Region::Articles => "content-grid",
            Region::NewsProjects => "projects-grid",
            Region::NewsArticles => "articles-grid",
            Region::Reminders => "reminder-list",
        }
    }

    /// Heading set on the shared content grid, if the region owns one.
    pub fn section_title(self) -> Option<&'static str> {
        match self {
            Region::Projects => Some("Featured Projects"),
            Region::Articles => Some("Latest News"),
            _ => None,
        }
    }

    /// Fixed markup that replaces the region when loading fails.
    pub fn error_placeholder(self) -> &'static str {
        match self {
            Region::Members => "<p>Error loading members.</p>",
            Region::Projects | Region::NewsProjects => "<p>Error loading projects.</p>",
            Region::Articles | Region::NewsArticles => "<p>Error loading articles.</p>",
            Region::Reminders => "<li class=\"reminder-item\">Error loading reminders</li>",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when parsing an unknown region slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.slug() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.slug().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert_eq!(
            "sponsors".parse::<Region>(),
            Err(UnknownRegion("sponsors".to_string()))
        );
    }

    #[test]
    fn news_regions_share_endpoints_but_not_targets() {
        assert_eq!(Region::NewsProjects.endpoint(), Region::Projects.endpoint());
        assert_ne!(Region::NewsProjects.target_id(), Region::Projects.target_id());
        assert_eq!(Region::NewsProjects.section_title(), None);
        assert_eq!(Region::Projects.section_title(), Some("Featured Projects"));
    }
}
