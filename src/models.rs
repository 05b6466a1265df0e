//! Frontend Models
//!
//! Data structures for the bundled edutech dataset.

use serde::{Deserialize, Serialize};

/// One edutech product record (field keys match the bundled dataset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdutechItem {
    #[serde(rename = "에듀테크명")]
    pub name: String,
    #[serde(rename = "운영현황")]
    pub status: String,
    #[serde(rename = "주요변경사항및핵심특징")]
    pub description: String,
    #[serde(rename = "공식웹사이트")]
    pub website: String,
    #[serde(rename = "가격정책")]
    pub price_tier: String,
    #[serde(rename = "주요대상")]
    pub target: String,
}

/// An item joined with its full category path, for the flattened views
#[derive(Debug, Clone, PartialEq)]
pub struct FlatItem {
    pub item: EdutechItem,
    /// 대분류
    pub category: String,
    /// 중분류
    pub sub_category: String,
    /// 소분류
    pub group: String,
}

impl FlatItem {
    /// Case-insensitive substring match over every displayed text field.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        let haystacks = [
            &self.item.name,
            &self.item.description,
            &self.item.status,
            &self.item.target,
            &self.category,
            &self.sub_category,
            &self.group,
        ];
        haystacks.iter().any(|h| h.to_lowercase().contains(needle))
    }
}

/// CSS badge class for a price tier
pub fn price_badge_class(tier: &str) -> &'static str {
    match tier {
        "무료" => "badge-price-free",
        "부분 유료" => "badge-price-freemium",
        "유료" | "유료(구독)" | "유료(B2B/B2G)" => "badge-price-paid",
        "하드웨어 유료" => "badge-price-hardware",
        "기업용(B2B)" => "badge-price-b2b",
        _ => "badge-price-other",
    }
}

/// CSS badge class for a target-audience text, first matching school level wins
pub fn target_badge_class(target: &str) -> &'static str {
    if target.contains('초') {
        "badge-target-elementary"
    } else if target.contains('중') {
        "badge-target-middle"
    } else if target.contains('고') {
        "badge-target-high"
    } else if target.contains("대학") {
        "badge-target-university"
    } else if target.contains("교원") {
        "badge-target-teacher"
    } else {
        "badge-target-other"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_flat(name: &str, description: &str, group: &str) -> FlatItem {
        FlatItem {
            item: EdutechItem {
                name: name.to_string(),
                status: "운영 중".to_string(),
                description: description.to_string(),
                website: "https://example.com".to_string(),
                price_tier: "무료".to_string(),
                target: "초등학생".to_string(),
            },
            category: "AI 맞춤학습".to_string(),
            sub_category: "초·중등 교과".to_string(),
            group: group.to_string(),
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let flat = make_flat("QANDA 콴다", "AI 문제 풀이", "수학");
        assert!(flat.matches("qanda"));
        assert!(flat.matches("콴다"));
        assert!(!flat.matches("영어"));
    }

    #[test]
    fn test_matches_category_path() {
        let flat = make_flat("콴다", "AI 문제 풀이", "수학");
        assert!(flat.matches("수학"));
        assert!(flat.matches("ai 맞춤학습"));
    }

    #[test]
    fn test_price_badge_class() {
        assert_eq!(price_badge_class("무료"), "badge-price-free");
        assert_eq!(price_badge_class("부분 유료"), "badge-price-freemium");
        assert_eq!(price_badge_class("유료"), "badge-price-paid");
        assert_eq!(price_badge_class("유료(구독)"), "badge-price-paid");
        assert_eq!(price_badge_class("유료(B2B/B2G)"), "badge-price-paid");
        assert_eq!(price_badge_class("하드웨어 유료"), "badge-price-hardware");
        assert_eq!(price_badge_class("기업용(B2B)"), "badge-price-b2b");
        assert_eq!(price_badge_class("문의"), "badge-price-other");
    }

    #[test]
    fn test_target_badge_class_first_level_wins() {
        assert_eq!(target_badge_class("초·중·고 학생"), "badge-target-elementary");
        assert_eq!(target_badge_class("중·고등학생"), "badge-target-middle");
        assert_eq!(target_badge_class("고등학생·N수생"), "badge-target-high");
        assert_eq!(target_badge_class("대학생·성인"), "badge-target-university");
        assert_eq!(target_badge_class("교원·학교 관리자"), "badge-target-teacher");
        assert_eq!(target_badge_class("누구나"), "badge-target-other");
    }
}
