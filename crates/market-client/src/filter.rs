//! Client-side filter engine
//!
//! A pure function over an in-memory collection: a case-insensitive
//! substring search OR'd across each entity's designated text fields,
//! AND'd with any number of categorical facet selections. Absence of a
//! selection is the "all" sentinel. Output always preserves input order.

use market_core::Listable;
use std::collections::BTreeMap;

/// Current search and facet selections for one list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Substring matched case-insensitively against the entity's text fields
    pub search: String,

    /// Facet name → selected value; a missing key means "all"
    pub selections: BTreeMap<String, String>,
}

impl FilterState {
    /// Empty state: matches everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search needle
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Select a facet value; selecting replaces any previous selection
    pub fn select(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        self.selections.insert(facet.into(), value.into());
    }

    /// Clear a facet back to the "all" sentinel
    pub fn clear(&mut self, facet: &str) {
        self.selections.remove(facet);
    }

    /// Whether this state constrains anything at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.selections.is_empty()
    }
}

/// Whether one entity satisfies the filter state
#[must_use]
pub fn matches<T: Listable>(entity: &T, state: &FilterState) -> bool {
    // Empty search matches everything.
    let search_ok = state.search.is_empty() || {
        let needle = state.search.to_lowercase();
        entity
            .search_text()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    };

    let facets_ok = state
        .selections
        .iter()
        .all(|(facet, selected)| entity.facet(facet).as_deref() == Some(selected.as_str()));

    search_ok && facets_ok
}

/// Derive the view collection: the order-preserving subsequence of
/// `collection` satisfying every active predicate.
#[must_use]
pub fn filter<T: Listable + Clone>(collection: &[T], state: &FilterState) -> Vec<T> {
    collection
        .iter()
        .filter(|entity| matches(*entity, state))
        .cloned()
        .collect()
}
