//! Bundled Dataset
//!
//! The catalog ships inside the binary; there is no backend to fetch it from.

use crate::catalog::Catalog;

const EDUTECH_JSON: &str = include_str!("../assets/edutech.json");

/// Parse the bundled dataset
pub fn load_catalog() -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(EDUTECH_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_parses() {
        let catalog = load_catalog().expect("bundled dataset should parse");
        assert!(!catalog.is_empty());
        assert!(catalog.categories.len() >= 4);
    }

    #[test]
    fn test_bundled_dataset_records_are_complete() {
        let catalog = load_catalog().expect("bundled dataset should parse");
        for flat in catalog.flatten() {
            assert!(!flat.item.name.is_empty(), "item without a name in {}", flat.group);
            assert!(
                flat.item.website.starts_with("http"),
                "{} has a non-http website: {}",
                flat.item.name,
                flat.item.website
            );
            assert!(!flat.item.price_tier.is_empty(), "{} has no price tier", flat.item.name);
            assert!(!flat.item.target.is_empty(), "{} has no target audience", flat.item.name);
        }
    }

    #[test]
    fn test_bundled_dataset_names_are_unique() {
        let catalog = load_catalog().expect("bundled dataset should parse");
        let mut names: Vec<String> = catalog.flatten().into_iter().map(|f| f.item.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate item names in the dataset");
    }
}
