//! Story entity - narrative content tagged with a virtue
//!
//! Stories are created, edited and deleted in the CMS only. A `Story` here is
//! a fresh projection built for a single read and never written back.

use serde::{Deserialize, Serialize};

use crate::ids::{Slug, StoryId};

/// A narrative piece as served to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: StoryId,
    /// Unique within the CMS; used in URLs and lookups
    pub slug: Slug,
    pub title: String,
    /// Category tag (e.g., "Courage", "Honesty")
    pub virtue: String,
    pub summary: String,
    /// Explanation of the virtue shown alongside the story
    pub virtue_description: String,
    pub image: Option<StoryImage>,
    pub audio_url: Option<String>,
    pub content: StoryContent,
}

/// Illustration reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryImage {
    pub url: String,
    /// Alternative text for accessibility
    pub alt: Option<String>,
}

/// Body of a story in its source and rendered forms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryContent {
    pub markdown: String,
    pub plain_text: String,
    /// Upstream reading estimate in minutes
    pub reading_time: Option<u32>,
}

impl Story {
    pub fn new(id: impl Into<StoryId>, slug: impl Into<Slug>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            virtue: String::new(),
            summary: String::new(),
            virtue_description: String::new(),
            image: None,
            audio_url: None,
            content: StoryContent::default(),
        }
    }

    pub fn with_virtue(
        mut self,
        virtue: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.virtue = virtue.into();
        self.virtue_description = description.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_image(mut self, image: StoryImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    pub fn with_content(mut self, content: StoryContent) -> Self {
        self.content = content;
        self
    }
}

impl StoryImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}
