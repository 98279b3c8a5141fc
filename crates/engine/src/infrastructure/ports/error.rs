//! Error types for port operations.

/// An upstream CMS query failed.
///
/// The variants only describe where the failure surfaced; callers of the
/// story access layer treat all of them the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CmsError {
    /// Transport failure or non-success HTTP status.
    #[error("CMS request failed: {0}")]
    RequestFailed(String),

    /// Body did not have the expected shape, or a record could not be mapped.
    #[error("Invalid CMS response: {0}")]
    InvalidResponse(String),

    /// The CMS answered with query errors.
    #[error("CMS rejected query: {0}")]
    QueryRejected(String),
}

impl CmsError {
    pub fn request_failed(message: impl ToString) -> Self {
        Self::RequestFailed(message.to_string())
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }

    pub fn query_rejected(message: impl ToString) -> Self {
        Self::QueryRejected(message.to_string())
    }
}
