//! In-memory CMS for testing.
//!
//! Evaluates `CmsQuery` values against a fixed set of JSON records the way a
//! GraphQL CMS would: filter, order, cap, then project. Every issued query is
//! recorded so tests can inspect exactly what was asked for.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::infrastructure::ports::{
    CmsError, CmsPort, CmsQuery, FieldPredicate, Projection, SortDirection,
};

pub struct InMemoryCms {
    records: Vec<Value>,
    failure: Option<CmsError>,
    issued: Mutex<Vec<CmsQuery>>,
    returned: Mutex<Vec<usize>>,
}

impl InMemoryCms {
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            records,
            failure: None,
            issued: Mutex::new(Vec::new()),
            returned: Mutex::new(Vec::new()),
        }
    }

    /// A CMS that fails every query with `error`.
    pub fn failing(error: CmsError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(Vec::new())
        }
    }

    /// Queries received so far, in order.
    pub fn issued(&self) -> Vec<CmsQuery> {
        self.issued.lock().map(|q| q.clone()).unwrap_or_default()
    }

    /// Number of records returned by each query, in order.
    pub fn returned_counts(&self) -> Vec<usize> {
        self.returned.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn evaluate(&self, query: &CmsQuery) -> Vec<Value> {
        let mut matched: Vec<&Value> = self
            .records
            .iter()
            .filter(|record| matches_filter(record, query))
            .collect();

        if let Some(order_by) = &query.order_by {
            matched.sort_by(|a, b| {
                let ordering = compare_field(a, b, &order_by.field);
                match order_by.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let cap = query.first.map_or(usize::MAX, |n| n as usize);
        matched
            .into_iter()
            .take(cap)
            .map(|record| project(record, &query.projection))
            .collect()
    }
}

#[async_trait]
impl CmsPort for InMemoryCms {
    async fn query(&self, query: &CmsQuery) -> Result<Vec<Value>, CmsError> {
        if let Ok(mut issued) = self.issued.lock() {
            issued.push(query.clone());
        }
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let items = self.evaluate(query);
        if let Ok(mut returned) = self.returned.lock() {
            returned.push(items.len());
        }
        Ok(items)
    }
}

fn matches_filter(record: &Value, query: &CmsQuery) -> bool {
    let Some(filter) = &query.filter else {
        return true;
    };
    filter.iter().all(|(field, predicate)| match predicate {
        FieldPredicate::Eq(expected) => {
            record.get(field).and_then(Value::as_str) == Some(expected.as_str())
        }
    })
}

fn compare_field(a: &Value, b: &Value, field: &str) -> Ordering {
    let key = |v: &Value| v.get(field).and_then(Value::as_str).map(str::to_string);
    key(a).cmp(&key(b))
}

fn project(record: &Value, projection: &Projection) -> Value {
    let Some(object) = record.as_object() else {
        return record.clone();
    };

    let mut out = Map::new();
    for field in projection.fields() {
        let Some(value) = object.get(&field.name) else {
            continue;
        };
        let value = if field.is_leaf() {
            value.clone()
        } else {
            project(value, &field.children)
        };
        out.insert(field.name.clone(), value);
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{Filter, OrderBy};
    use crate::test_fixtures::sample_corpus;

    #[tokio::test]
    async fn applies_filter_order_cap_and_projection() {
        let cms = InMemoryCms::new(sample_corpus());
        let query = CmsQuery::new(
            "stories",
            Projection::new()
                .field("slug")
                .nested("image", Projection::new().field("url")),
        )
        .with_filter(Filter::eq("virtue", "Courage"))
        .with_order_by(OrderBy::asc("title"))
        .with_first(Some(1));

        let items = cms.query(&query).await.unwrap();

        assert_eq!(
            items,
            vec![serde_json::json!({
                "slug": "brave-little-lantern",
                "image": { "url": "https://cdn.example/brave-little-lantern.png" }
            })]
        );
        assert_eq!(cms.issued(), vec![query]);
        assert_eq!(cms.returned_counts(), vec![1]);
    }

    #[tokio::test]
    async fn failing_cms_records_query_and_errors() {
        let cms = InMemoryCms::failing(CmsError::request_failed("down"));
        let query = CmsQuery::new("stories", Projection::new().field("slug"));

        let err = cms.query(&query).await.unwrap_err();

        assert_eq!(err, CmsError::request_failed("down"));
        assert_eq!(cms.issued().len(), 1);
        assert!(cms.returned_counts().is_empty());
    }
}
