//! Client-side search over a loaded resource list.
//!
//! A pure function of `(list, query)`: no state, no store mutation, no
//! reordering. The server's list order is preserved in the result.

use crate::types::Resource;

/// Filter `items` to those whose searchable text contains `query`,
/// case-insensitively.
///
/// # Parameters
/// - `items`: slice to filter
/// - `query`: search query string; empty returns every item
/// - `searchable`: projection from an item to its searchable fields
///
/// # Returns
/// References into `items`, in their original order.
pub fn filter_items<'a, T, F>(items: &'a [T], query: &str, searchable: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Vec<&str>,
{
    if query.is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            searchable(*item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Filter resources by their designated searchable fields.
pub fn filter_resources<'a, R: Resource>(items: &'a [R], query: &str) -> Vec<&'a R> {
    filter_items(items, query, |resource| resource.searchable_text())
}
