//! Story entity operations.
//!
//! Builds the CMS queries for stories and maps the returned records into
//! domain `Story` values. Failures are returned as-is; the degradation policy
//! lives in `use_cases::stories`.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use storyshelf_domain::{self as domain, StoryContent, StoryImage};

use crate::infrastructure::ports::{CmsError, CmsPort, CmsQuery, Filter, OrderBy, Projection};
use crate::infrastructure::settings::StoryListSettings;

/// CMS collection holding story records.
pub const STORIES_COLLECTION: &str = "stories";

/// Fields requested for every story, by every story query.
pub fn story_projection() -> Projection {
    Projection::new()
        .field("id")
        .field("slug")
        .field("title")
        .field("virtue")
        .field("summary")
        .field("virtueDescription")
        .nested("image", Projection::new().field("url").field("alt"))
        .field("audioUrl")
        .nested(
            "content",
            Projection::new()
                .field("markdown")
                .field("plainText")
                .field("readingTime"),
        )
}

/// Ordering used by list queries so results do not shift with upstream defaults.
pub fn list_order() -> OrderBy {
    OrderBy::asc("title")
}

/// Story entity operations.
pub struct Story {
    cms: Arc<dyn CmsPort>,
    list_limit: Option<u32>,
}

impl Story {
    pub fn new(cms: Arc<dyn CmsPort>, settings: StoryListSettings) -> Self {
        Self {
            cms,
            list_limit: settings.list_limit,
        }
    }

    // Query construction

    pub fn list_query(&self) -> CmsQuery {
        CmsQuery::new(STORIES_COLLECTION, story_projection())
            .with_order_by(list_order())
            .with_first(self.list_limit)
    }

    pub fn slug_query(slug: &str) -> CmsQuery {
        CmsQuery::new(STORIES_COLLECTION, story_projection())
            .with_filter(Filter::eq("slug", slug))
            .with_first(Some(1))
    }

    pub fn virtue_query(&self, virtue: &str) -> CmsQuery {
        self.list_query().with_filter(Filter::eq("virtue", virtue))
    }

    // Reads

    pub async fn list(&self) -> Result<Vec<domain::Story>, CmsError> {
        let records = self.cms.query(&self.list_query()).await?;
        records.into_iter().map(map_record).collect()
    }

    pub async fn list_by_virtue(&self, virtue: &str) -> Result<Vec<domain::Story>, CmsError> {
        let records = self.cms.query(&self.virtue_query(virtue)).await?;
        records.into_iter().map(map_record).collect()
    }

    /// Look up the story with exactly this slug.
    ///
    /// At most one record is mapped no matter what upstream returns. A record
    /// whose slug differs from the requested one is never returned.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<domain::Story>, CmsError> {
        let records = self.cms.query(&Self::slug_query(slug)).await?;

        if records.len() > 1 {
            tracing::warn!(
                slug = %slug,
                count = records.len(),
                "CMS returned more than one story for a capped slug lookup"
            );
        }

        let matching = records
            .into_iter()
            .find(|record| record.get("slug").and_then(Value::as_str) == Some(slug));

        match matching {
            Some(record) => map_record(record).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Record mapping
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoryRecord {
    id: String,
    slug: String,
    title: String,
    #[serde(default)]
    virtue: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    virtue_description: Option<String>,
    #[serde(default)]
    image: Option<ImageRecord>,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    content: Option<ContentRecord>,
}

#[derive(Debug, Deserialize)]
struct ImageRecord {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    alt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentRecord {
    #[serde(default)]
    markdown: Option<String>,
    #[serde(default)]
    plain_text: Option<String>,
    #[serde(default)]
    reading_time: Option<f64>,
}

fn map_record(record: Value) -> Result<domain::Story, CmsError> {
    let record: StoryRecord = serde_json::from_value(record)
        .map_err(|e| CmsError::invalid_response(format!("Malformed story record: {e}")))?;
    Ok(record.into_domain())
}

impl StoryRecord {
    fn into_domain(self) -> domain::Story {
        let mut story = domain::Story::new(self.id, self.slug, self.title)
            .with_virtue(
                self.virtue.unwrap_or_default(),
                self.virtue_description.unwrap_or_default(),
            )
            .with_summary(self.summary.unwrap_or_default());

        // An image without a URL cannot be rendered, so it is dropped.
        if let Some(image) = self.image {
            if let Some(url) = image.url.filter(|u| !u.is_empty()) {
                let mut mapped = StoryImage::new(url);
                mapped.alt = image.alt;
                story = story.with_image(mapped);
            }
        }
        if let Some(url) = self.audio_url.filter(|u| !u.is_empty()) {
            story = story.with_audio_url(url);
        }
        if let Some(content) = self.content {
            story = story.with_content(StoryContent {
                markdown: content.markdown.unwrap_or_default(),
                plain_text: content.plain_text.unwrap_or_default(),
                reading_time: content
                    .reading_time
                    .filter(|m| m.is_finite() && *m >= 0.0)
                    .map(|m| m.ceil() as u32),
            });
        }
        story
    }
}
