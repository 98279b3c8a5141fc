//! External service port traits (CMS).

use async_trait::async_trait;
use serde_json::Value;

use super::error::CmsError;
use super::types::CmsQuery;

// =============================================================================
// CMS Port
// =============================================================================

/// Executes declarative queries against the headless CMS.
///
/// Implementations issue exactly one upstream request per call and return the
/// matching records as raw JSON objects, shaped by the query's projection and
/// in upstream order. Mapping into domain types happens above this port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CmsPort: Send + Sync {
    async fn query(&self, query: &CmsQuery) -> Result<Vec<Value>, CmsError>;
}
