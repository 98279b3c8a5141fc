//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod cms_client;
pub mod graphql;
pub mod ports;
pub mod settings;
