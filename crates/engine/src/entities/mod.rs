//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on infrastructure ports and provide the building blocks for use cases.

pub mod story;

pub use story::Story;
