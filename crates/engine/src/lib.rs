//! Storyshelf Engine library.
//!
//! Fetches story records from a headless CMS and serves them to the
//! presentation layer.
//!
//! ## Structure
//!
//! - `entities/` - Story queries and record mapping over the CMS port
//! - `use_cases/` - Reads exposed to callers, with failure degradation
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
