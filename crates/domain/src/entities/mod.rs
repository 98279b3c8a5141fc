//! Domain entities.

mod story;

pub use story::{Story, StoryContent, StoryImage};
