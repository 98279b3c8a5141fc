//! Port traits for infrastructure boundaries.
//!
//! The CMS is the only external dependency. Everything above this module
//! talks to it through `CmsPort`, so tests can swap in a mock or an
//! in-memory fake.

mod error;
mod external;
pub mod types;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::CmsPort;

#[cfg(test)]
pub use external::MockCmsPort;

// =============================================================================
// Query Model
// =============================================================================
pub use types::{CmsQuery, FieldPredicate, FieldSelection, Filter, OrderBy, Projection, SortDirection};

// =============================================================================
// Error Types
// =============================================================================
pub use error::CmsError;
