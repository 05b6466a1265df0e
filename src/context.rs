//! Application Context
//!
//! Navigation state provided via Leptos Context API, and the four-way
//! view resolution derived from it.

use leptos::prelude::*;

/// Which of the four mutually exclusive screens is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Hero, search bar and 대분류 card grid
    Home,
    /// 중분류 card grid for the selected category
    SubCategories(String),
    /// Item-group sections for (category, sub-category)
    Items(String, String),
    /// Flattened card grid, also the search-results screen
    AllItems,
}

impl View {
    /// Resolution precedence: search query → show-all flag → drill-down depth
    pub fn resolve(
        category: Option<&str>,
        sub_category: Option<&str>,
        show_all: bool,
        query: &str,
    ) -> View {
        if !query.trim().is_empty() || show_all {
            return View::AllItems;
        }
        match (category, sub_category) {
            (Some(c), Some(s)) => View::Items(c.to_string(), s.to_string()),
            (Some(c), None) => View::SubCategories(c.to_string()),
            _ => View::Home,
        }
    }
}

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Selected 대분류 - read
    pub category: ReadSignal<Option<String>>,
    set_category: WriteSignal<Option<String>>,
    /// Selected 중분류 - read
    pub sub_category: ReadSignal<Option<String>>,
    set_sub_category: WriteSignal<Option<String>>,
    /// Flattened "전체 목록" flag - read
    pub show_all: ReadSignal<bool>,
    set_show_all: WriteSignal<bool>,
}

impl NavContext {
    pub fn new(
        category: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        sub_category: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        show_all: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            category: category.0,
            set_category: category.1,
            sub_category: sub_category.0,
            set_sub_category: sub_category.1,
            show_all: show_all.0,
            set_show_all: show_all.1,
        }
    }

    /// Drill into a 대분류, dropping any deeper selection
    pub fn select_category(&self, name: String) {
        self.set_category.set(Some(name));
        self.set_sub_category.set(None);
        self.set_show_all.set(false);
    }

    /// Drill into a 중분류 of the current category
    pub fn select_sub_category(&self, name: String) {
        self.set_sub_category.set(Some(name));
    }

    /// Back to the 대분류 grid
    pub fn back_to_categories(&self) {
        self.set_category.set(None);
        self.set_sub_category.set(None);
        self.set_show_all.set(false);
    }

    /// Back to the 중분류 grid of the current category
    pub fn back_to_sub_categories(&self) {
        self.set_sub_category.set(None);
    }

    /// Open the flattened "전체 목록" view
    pub fn show_all_items(&self) {
        self.set_show_all.set(true);
        self.set_category.set(None);
        self.set_sub_category.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_home_by_default() {
        assert_eq!(View::resolve(None, None, false, ""), View::Home);
    }

    #[test]
    fn test_resolve_drill_down_levels() {
        assert_eq!(
            View::resolve(Some("AI 맞춤학습"), None, false, ""),
            View::SubCategories("AI 맞춤학습".to_string())
        );
        assert_eq!(
            View::resolve(Some("AI 맞춤학습"), Some("초·중등 교과"), false, ""),
            View::Items("AI 맞춤학습".to_string(), "초·중등 교과".to_string())
        );
    }

    #[test]
    fn test_resolve_sub_category_without_category_is_home() {
        assert_eq!(View::resolve(None, Some("초·중등 교과"), false, ""), View::Home);
    }

    #[test]
    fn test_resolve_show_all_beats_selection() {
        assert_eq!(
            View::resolve(Some("AI 맞춤학습"), Some("초·중등 교과"), true, ""),
            View::AllItems
        );
    }

    #[test]
    fn test_resolve_search_beats_everything() {
        assert_eq!(View::resolve(None, None, false, "콴다"), View::AllItems);
        assert_eq!(
            View::resolve(Some("AI 맞춤학습"), Some("초·중등 교과"), false, "콴다"),
            View::AllItems
        );
    }

    #[test]
    fn test_resolve_whitespace_query_is_no_query() {
        assert_eq!(View::resolve(None, None, false, "   "), View::Home);
    }
}
