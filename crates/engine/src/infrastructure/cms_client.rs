//! Headless CMS client over GraphQL
//!
//! Implements `CmsPort` by rendering each `CmsQuery` into a GraphQL document
//! and POSTing it to the configured endpoint. One request per query; no
//! retries and no caching.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::infrastructure::graphql::render_query;
use crate::infrastructure::ports::{CmsError, CmsPort, CmsQuery};
use crate::infrastructure::settings::CmsClientConfig;

/// Client for a GraphQL headless CMS
#[derive(Clone)]
pub struct GraphqlCmsClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl GraphqlCmsClient {
    /// Build a client for `config`. The endpoint is used exactly as configured.
    pub fn new(config: &CmsClientConfig) -> Result<Self, CmsError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CmsError::request_failed(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl CmsPort for GraphqlCmsClient {
    async fn query(&self, query: &CmsQuery) -> Result<Vec<Value>, CmsError> {
        let document = render_query(query);
        tracing::debug!(collection = %query.collection, first = ?query.first, "Issuing CMS query");

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query: &document });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CmsError::request_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CmsError::request_failed(format!("HTTP {status}: {error_text}")));
        }

        let body: GraphqlResponse = response
            .json()
            .await
            .map_err(|e| CmsError::invalid_response(e.to_string()))?;

        extract_items(body, &query.collection)
    }
}

/// Pull `data.<collection>.items` out of a GraphQL response.
///
/// Any reported error fails the whole query, even when partial data came back.
fn extract_items(body: GraphqlResponse, collection: &str) -> Result<Vec<Value>, CmsError> {
    if !body.errors.is_empty() {
        let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
        return Err(CmsError::query_rejected(messages.join("; ")));
    }

    let mut data = body
        .data
        .ok_or_else(|| CmsError::invalid_response("Response has no data"))?;

    match data.get_mut(collection).map(|c| c.get_mut("items").map(Value::take)) {
        Some(Some(Value::Array(items))) => Ok(items),
        Some(Some(other)) => Err(CmsError::invalid_response(format!(
            "Expected {collection}.items to be an array, got {other}"
        ))),
        Some(None) => Err(CmsError::invalid_response(format!(
            "Response is missing {collection}.items"
        ))),
        None => Err(CmsError::invalid_response(format!(
            "Response is missing collection {collection}"
        ))),
    }
}

// =============================================================================
// GraphQL wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorItem>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorItem {
    message: String,
}
