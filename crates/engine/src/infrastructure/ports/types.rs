//! Declarative query model handed to the CMS port.
//!
//! A `CmsQuery` says which collection to read, how to narrow it, how many
//! records to return and which fields to project. Adapters turn it into
//! whatever wire format the CMS speaks.

use std::collections::BTreeMap;

// =============================================================================
// Query
// =============================================================================

/// A single read against one CMS collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsQuery {
    /// Top-level collection name (e.g., "stories")
    pub collection: String,
    /// Narrowing predicates; `None` matches every record
    pub filter: Option<Filter>,
    /// Result-count cap; `None` leaves the CMS default page size in effect
    pub first: Option<u32>,
    /// Explicit ordering; `None` means upstream order
    pub order_by: Option<OrderBy>,
    /// Fields to return for each matching record
    pub projection: Projection,
}

impl CmsQuery {
    pub fn new(collection: impl Into<String>, projection: Projection) -> Self {
        Self {
            collection: collection.into(),
            filter: None,
            first: None,
            order_by: None,
            projection,
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_first(mut self, first: Option<u32>) -> Self {
        self.first = first;
        self
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// True when the query carries no arguments at all.
    pub fn is_unconstrained(&self) -> bool {
        self.filter.as_ref().is_none_or(Filter::is_empty)
            && self.first.is_none()
            && self.order_by.is_none()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Field-name keyed predicates, all of which must hold.
///
/// Backed by a `BTreeMap` so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: BTreeMap<String, FieldPredicate>,
}

/// Predicate applied to a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPredicate {
    /// Field equals the given string value
    Eq(String),
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with a single equality predicate.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().and_eq(field, value)
    }

    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.predicates
            .insert(field.into(), FieldPredicate::Eq(value.into()));
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldPredicate> {
        self.predicates.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldPredicate)> {
        self.predicates.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// =============================================================================
// Ordering
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Tree of fields selected from each record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    fields: Vec<FieldSelection>,
}

/// One selected field, optionally with nested selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    pub name: String,
    pub children: Projection,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a scalar field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldSelection {
            name: name.into(),
            children: Projection::new(),
        });
        self
    }

    /// Select an object field with its own sub-projection.
    pub fn nested(mut self, name: impl Into<String>, children: Projection) -> Self {
        self.fields.push(FieldSelection {
            name: name.into(),
            children,
        });
        self
    }

    pub fn fields(&self) -> &[FieldSelection] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

impl FieldSelection {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
