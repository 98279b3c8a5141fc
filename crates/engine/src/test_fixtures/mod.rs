//! Test fixtures and common test helpers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{story_record, InMemoryCms};
//!
//! #[tokio::test]
//! async fn test_lookup() {
//!     let cms = InMemoryCms::new(vec![story_record("courage-in-winter", "Courage in Winter")]);
//!     // ... test logic
//! }
//! ```

pub mod cms_mocks;
pub mod logs;

pub use cms_mocks::InMemoryCms;
pub use logs::CapturedLogs;

use serde_json::{json, Value};

// =============================================================================
// Story Records
// =============================================================================

/// A complete CMS story record as the API would return it.
pub fn story_record(slug: &str, title: &str) -> Value {
    story_record_with_virtue(slug, title, "Courage")
}

pub fn story_record_with_virtue(slug: &str, title: &str, virtue: &str) -> Value {
    json!({
        "id": format!("id-{slug}"),
        "slug": slug,
        "title": title,
        "virtue": virtue,
        "summary": format!("Summary of {title}"),
        "virtueDescription": format!("What {virtue} means"),
        "image": { "url": format!("https://cdn.example/{slug}.png"), "alt": title },
        "audioUrl": format!("https://cdn.example/{slug}.mp3"),
        "content": {
            "markdown": format!("# {title}"),
            "plainText": title,
            "readingTime": 4
        },
        // Not part of the projection; the fake CMS strips it.
        "internalNotes": "editor only"
    })
}

/// A small corpus used by lookup scenarios.
pub fn sample_corpus() -> Vec<Value> {
    vec![
        story_record_with_virtue("the-honest-miller", "The Honest Miller", "Honesty"),
        story_record_with_virtue("courage-in-winter", "Courage in Winter", "Courage"),
        story_record_with_virtue("a-patient-river", "A Patient River", "Patience"),
        story_record_with_virtue("brave-little-lantern", "Brave Little Lantern", "Courage"),
    ]
}
