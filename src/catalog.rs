//! Catalog Tree
//!
//! The immutable 대분류 → 중분류 → 소분류 category tree, plus the flattening,
//! search and suggestion scans the views are derived from.

use serde::{Deserialize, Serialize};

use crate::models::{EdutechItem, FlatItem};

/// How many names the suggestion dropdown shows
pub const MAX_SUGGESTIONS: usize = 5;

/// The whole bundled dataset, read-only for the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// 대분류
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "subCategories")]
    pub sub_categories: Vec<SubCategory>,
}

/// 중분류
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub name: String,
    pub groups: Vec<ItemGroup>,
}

/// 소분류 with its item list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub name: String,
    pub items: Vec<EdutechItem>,
}

impl Catalog {
    /// Top-level 대분류 names in document order
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// 중분류 names for a category, empty when the category is unknown
    pub fn sub_category_names(&self, category: &str) -> Vec<String> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.sub_categories.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Item groups for a drill-down leaf view, empty when the path is unknown
    pub fn groups(&self, category: &str, sub_category: &str) -> Vec<ItemGroup> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .and_then(|c| c.sub_categories.iter().find(|s| s.name == sub_category))
            .map(|s| s.groups.clone())
            .unwrap_or_default()
    }

    /// Every item joined with its category path, in document order
    pub fn flatten(&self) -> Vec<FlatItem> {
        let mut all = Vec::new();
        for category in &self.categories {
            for sub in &category.sub_categories {
                for group in &sub.groups {
                    for item in &group.items {
                        all.push(FlatItem {
                            item: item.clone(),
                            category: category.name.clone(),
                            sub_category: sub.name.clone(),
                            group: group.name.clone(),
                        });
                    }
                }
            }
        }
        all
    }

    /// Case-insensitive substring search over the flattened items.
    /// An empty or whitespace query returns everything.
    pub fn search(&self, query: &str) -> Vec<FlatItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.flatten();
        }
        self.flatten()
            .into_iter()
            .filter(|flat| flat.matches(&needle))
            .collect()
    }

    /// Item names matching the query in fuzzy (in-order subsequence) fashion,
    /// capped for the dropdown
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.flatten()
            .iter()
            .filter(|flat| fuzzy_match(query, &flat.item.name))
            .map(|flat| flat.item.name.clone())
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// Total item count
    pub fn len(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.sub_categories)
            .flat_map(|s| &s.groups)
            .map(|g| g.items.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}
