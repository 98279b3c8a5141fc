//! Storyshelf domain types.
//!
//! Stories are owned by the upstream CMS; everything here is a read-only
//! projection of those records. No I/O lives in this crate.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Story, StoryContent, StoryImage};
pub use error::DomainError;
pub use ids::{Slug, StoryId};
