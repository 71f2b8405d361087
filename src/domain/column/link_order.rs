// src/domain/column/link_order.rs
//! Newest-first presentation order for column links.
//!
//! Sorting happens on a fresh copy at read time. The stored order is an
//! editorial artefact and is never written back.

use crate::domain::column::entity::{Column, ColumnLinks, LinkItem};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Descending by instant; a missing instant ranks after any present one.
fn compare_instants(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => b.cmp(&a),
    }
}

/// Comparator for link presentation order. Unparseable dates compare as
/// missing.
pub fn compare_links(a: &LinkItem, b: &LinkItem) -> Ordering {
    compare_instants(a.published_at(), b.published_at())
}

/// Return a newly allocated, stably sorted copy of `links`.
pub fn sort_links(links: &[LinkItem]) -> Vec<LinkItem> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, &LinkItem)> =
        links.iter().map(|link| (link.published_at(), link)).collect();
    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| compare_instants(*a, *b));
    keyed.into_iter().map(|(_, link)| link.clone()).collect()
}

/// Normalize a single column. Only a proper list of links is reordered;
/// missing or malformed `links` are passed through unchanged.
pub fn normalize_column(column: &Column) -> Column {
    let mut normalized = column.clone();
    if let ColumnLinks::List(links) = &column.links {
        normalized.links = ColumnLinks::List(sort_links(links));
    }
    normalized
}

/// Normalize every column independently, keeping the outer order.
pub fn normalize_columns(columns: &[Column]) -> Vec<Column> {
    columns.iter().map(normalize_column).collect()
}
