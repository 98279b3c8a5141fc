//! Application state and composition.

use std::sync::Arc;

use crate::entities;
use crate::infrastructure::ports::CmsPort;
use crate::infrastructure::settings::StoryListSettings;
use crate::use_cases::StoryUseCases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub stories: StoryUseCases,
}

impl App {
    /// Wire the application around an explicitly constructed CMS client.
    pub fn new(cms: Arc<dyn CmsPort>, stories: StoryListSettings) -> Self {
        let story = Arc::new(entities::Story::new(cms, stories));

        Self {
            use_cases: UseCases {
                stories: StoryUseCases::new(story),
            },
        }
    }
}
