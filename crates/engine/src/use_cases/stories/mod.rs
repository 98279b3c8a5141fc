//! Story use cases.
//!
//! These are the reads the presentation layer calls. None of them fail: an
//! upstream error is logged and turned into an empty list or `None`, so a
//! failed fetch looks the same as "no stories" or "not found" to the caller.
//! Use `entities::Story` directly when the distinction matters.

use std::sync::Arc;

use storyshelf_domain::Story;

use crate::entities;

/// Container for story use cases.
pub struct StoryUseCases {
    pub list: Arc<ListStories>,
    pub get_by_slug: Arc<GetStoryBySlug>,
    pub list_by_virtue: Arc<ListStoriesByVirtue>,
}

impl StoryUseCases {
    pub fn new(story: Arc<entities::Story>) -> Self {
        Self {
            list: Arc::new(ListStories::new(story.clone())),
            get_by_slug: Arc::new(GetStoryBySlug::new(story.clone())),
            list_by_virtue: Arc::new(ListStoriesByVirtue::new(story)),
        }
    }
}

/// List every story, ordered by title.
pub struct ListStories {
    story: Arc<entities::Story>,
}

impl ListStories {
    pub fn new(story: Arc<entities::Story>) -> Self {
        Self { story }
    }

    /// # Returns
    /// All stories, or an empty list if the CMS query failed.
    pub async fn execute(&self) -> Vec<Story> {
        match self.story.list().await {
            Ok(stories) => {
                tracing::debug!(count = stories.len(), "Fetched stories");
                stories
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch stories");
                Vec::new()
            }
        }
    }
}

/// Fetch a single story by its slug.
pub struct GetStoryBySlug {
    story: Arc<entities::Story>,
}

impl GetStoryBySlug {
    pub fn new(story: Arc<entities::Story>) -> Self {
        Self { story }
    }

    /// # Returns
    /// The story with this slug, or `None` if there is none or the CMS query
    /// failed.
    pub async fn execute(&self, slug: &str) -> Option<Story> {
        match self.story.get_by_slug(slug).await {
            Ok(story) => story,
            Err(e) => {
                tracing::error!(error = %e, slug = %slug, "Failed to fetch story by slug");
                None
            }
        }
    }
}

/// List the stories tagged with one virtue.
pub struct ListStoriesByVirtue {
    story: Arc<entities::Story>,
}

impl ListStoriesByVirtue {
    pub fn new(story: Arc<entities::Story>) -> Self {
        Self { story }
    }

    pub async fn execute(&self, virtue: &str) -> Vec<Story> {
        match self.story.list_by_virtue(virtue).await {
            Ok(stories) => stories,
            Err(e) => {
                tracing::error!(error = %e, virtue = %virtue, "Failed to fetch stories by virtue");
                Vec::new()
            }
        }
    }
}
