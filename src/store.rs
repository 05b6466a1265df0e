//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Search state
//! lives here rather than in the search bar so it survives the view switch
//! that a committed query triggers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The bundled catalog tree, read-only for the session
    pub catalog: Catalog,
    /// Raw search-box text, updated on every keystroke
    pub query_input: String,
    /// Debounce-committed query driving the results view
    pub query: String,
    /// Whether the suggestion dropdown is visible
    pub suggestions_open: bool,
    /// Highlighted suggestion index for keyboard navigation
    pub suggestion_idx: usize,
    /// Whether the advanced filter row is open
    pub filters_open: bool,
    /// Active price-tier filter chip, None = all tiers
    pub price_filter: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Clear the search box, the committed query and the dropdown
pub fn store_clear_search(store: &AppStore) {
    store.query_input().set(String::new());
    store.query().set(String::new());
    store.suggestions_open().set(false);
    store.suggestion_idx().set(0);
}

/// Commit a query immediately and close the dropdown
pub fn store_commit_query(store: &AppStore, query: String) {
    store.query_input().set(query.clone());
    store.query().set(query);
    store.suggestions_open().set(false);
    store.suggestion_idx().set(0);
}

/// Toggle a price-tier filter chip; clicking the active chip clears it
pub fn store_toggle_price_filter(store: &AppStore, tier: &str) {
    let active = store.price_filter().get() == Some(tier.to_string());
    store
        .price_filter()
        .set(if active { None } else { Some(tier.to_string()) });
}
