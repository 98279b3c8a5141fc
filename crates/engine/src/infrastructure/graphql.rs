//! GraphQL rendering for CMS queries.
//!
//! Produces documents of the form
//!
//! ```text
//! query {
//!   stories(filter: { slug: { eq: "courage-in-winter" } }, first: 1) {
//!     items {
//!       id
//!       image {
//!         url
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Argument values are inlined as literals. String literals use JSON escaping,
//! which is a valid subset of GraphQL string syntax.

use std::fmt::Write;

use serde_json::Value;

use crate::infrastructure::ports::{
    CmsQuery, FieldPredicate, Filter, OrderBy, Projection, SortDirection,
};

const INDENT: &str = "  ";

/// Render a full query document.
pub fn render_query(query: &CmsQuery) -> String {
    let mut doc = String::from("query {\n");

    doc.push_str(INDENT);
    doc.push_str(&query.collection);
    if let Some(args) = render_arguments(query) {
        let _ = write!(doc, "({args})");
    }
    doc.push_str(" {\n");

    doc.push_str(&INDENT.repeat(2));
    doc.push_str("items {\n");
    render_projection(&mut doc, &query.projection, 3);
    doc.push_str(&INDENT.repeat(2));
    doc.push_str("}\n");

    doc.push_str(INDENT);
    doc.push_str("}\n}\n");
    doc
}

/// Render the argument list without parentheses, or `None` if there is none.
pub fn render_arguments(query: &CmsQuery) -> Option<String> {
    if query.is_unconstrained() {
        return None;
    }

    let mut args = Vec::new();
    if let Some(filter) = query.filter.as_ref().filter(|f| !f.is_empty()) {
        args.push(format!("filter: {}", render_filter(filter)));
    }
    if let Some(first) = query.first {
        args.push(format!("first: {first}"));
    }
    if let Some(order_by) = &query.order_by {
        args.push(format!("orderBy: {}", render_order_by(order_by)));
    }
    Some(args.join(", "))
}

fn render_filter(filter: &Filter) -> String {
    let predicates: Vec<String> = filter
        .iter()
        .map(|(field, predicate)| match predicate {
            FieldPredicate::Eq(value) => {
                format!("{field}: {{ eq: {} }}", string_literal(value))
            }
        })
        .collect();
    format!("{{ {} }}", predicates.join(", "))
}

fn render_order_by(order_by: &OrderBy) -> String {
    let direction = match order_by.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    format!("{}__{}", order_by.field, direction)
}

fn render_projection(doc: &mut String, projection: &Projection, depth: usize) {
    let indent = INDENT.repeat(depth);
    for field in projection.fields() {
        doc.push_str(&indent);
        doc.push_str(&field.name);
        if field.is_leaf() {
            doc.push('\n');
        } else {
            doc.push_str(" {\n");
            render_projection(doc, &field.children, depth + 1);
            doc.push_str(&indent);
            doc.push_str("}\n");
        }
    }
}

fn string_literal(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}
