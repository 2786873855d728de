//! Deterministic, offline product selection.
//!
//! This is both the default path when no credential is configured and the
//! fail-safe whenever the remote path cannot be used.

use std::collections::HashSet;

use crate::catalog::{Catalog, Product};

/// Maximum number of products in any recommendation
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Extract a price ceiling from free text.
///
/// Finds the first run of at least two ASCII digits and reads up to its first
/// five digits. Returns `None` (unbounded) when there is no such run.
pub fn parse_budget(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i - start >= 2 {
            let end = (start + 5).min(i);
            // Slice is pure ASCII digits, so parsing cannot fail
            return text[start..end].parse::<f64>().ok();
        }
    }
    None
}

/// Pick up to three products for a preference without any network access.
///
/// Candidates are the union of the budget filter (only when the text contains
/// `$`) and the category filter, deduplicated by id, in catalog order. With
/// no candidates the three cheapest products are returned, ascending by
/// price with ties kept in catalog order.
pub fn local_recommend(preference: &str, catalog: &Catalog) -> Vec<Product> {
    let query = preference.to_lowercase();
    let products = catalog.products();

    let budget = if query.contains('$') {
        Some(parse_budget(&query).unwrap_or(f64::INFINITY))
    } else {
        None
    };

    let by_budget = products
        .iter()
        .filter(|p| budget.is_some_and(|limit| p.price <= limit));
    let by_category = products
        .iter()
        .filter(|p| query.contains(&p.category.to_lowercase()));

    let mut seen = HashSet::new();
    let candidates: Vec<&Product> = by_budget
        .chain(by_category)
        .filter(|p| seen.insert(p.id))
        .collect();

    if !candidates.is_empty() {
        // Union above is budget-first; restore catalog order before truncating
        return products
            .iter()
            .filter(|p| seen.contains(&p.id))
            .take(MAX_RECOMMENDATIONS)
            .cloned()
            .collect();
    }

    cheapest(products)
}

/// The three lowest-priced products, stable on ties
fn cheapest(products: &[Product]) -> Vec<Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by(|a, b| a.price.total_cmp(&b.price));
    sorted
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}
