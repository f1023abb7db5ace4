use std::collections::HashSet;

use super::*;
use crate::model::CategoryDescriptor;

const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor { id: "text", name: "Text Tools", description: "", icon: "type", color: "blue" },
    CategoryDescriptor { id: "security", name: "Security", description: "", icon: "shield", color: "slate" },
    CategoryDescriptor { id: "empty", name: "Nothing Here", description: "", icon: "x", color: "gray" },
];

const TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        id: "word-counter",
        name: "Word Counter",
        description: "Count words and characters.",
        category: "text",
        icon: "hash",
        featured: true,
        is_new: false,
    },
    ToolDescriptor {
        id: "case-converter",
        name: "Case Converter",
        description: "Switch between UPPER and lower case.",
        category: "text",
        icon: "case",
        featured: false,
        is_new: true,
    },
    ToolDescriptor {
        id: "hash-generator",
        name: "Hash Generator",
        description: "Compute SHA digests.",
        category: "security",
        icon: "hash",
        featured: true,
        is_new: true,
    },
];

fn sample() -> Catalog {
    Catalog::new(CATEGORIES, TOOLS)
}

fn ids(tools: &[&ToolDescriptor]) -> Vec<&'static str> {
    tools.iter().map(|t| t.id).collect()
}

// =============================================================
// list_by_category
// =============================================================

#[test]
fn list_by_category_filters_on_reference() {
    let catalog = sample();
    assert_eq!(ids(&catalog.list_by_category("text")), ["word-counter", "case-converter"]);
    assert_eq!(ids(&catalog.list_by_category("security")), ["hash-generator"]);
}

#[test]
fn list_by_category_unknown_or_empty_is_empty() {
    let catalog = sample();
    assert!(catalog.list_by_category("empty").is_empty());
    assert!(catalog.list_by_category("missing").is_empty());
    assert!(catalog.list_by_category("").is_empty());
}

#[test]
fn list_by_category_partitions_the_catalog() {
    for catalog in [sample(), Catalog::builtin()] {
        let mut seen = HashSet::new();
        let mut total = 0;
        for category in catalog.categories() {
            for tool in catalog.list_by_category(category.id) {
                assert!(seen.insert(tool.id), "duplicate {}", tool.id);
                total += 1;
            }
        }
        assert_eq!(total, catalog.tools().len());
    }
}

#[test]
fn count_in_matches_list_length() {
    let catalog = Catalog::builtin();
    for category in catalog.categories() {
        assert_eq!(catalog.count_in(category.id), catalog.list_by_category(category.id).len());
    }
}

// =============================================================
// filter_by_text
// =============================================================

#[test]
fn filter_by_text_empty_query_returns_input_unchanged() {
    let catalog = sample();
    assert_eq!(ids(&catalog.filter_by_text("", TOOLS)), ["word-counter", "case-converter", "hash-generator"]);
    let subset = [&TOOLS[2], &TOOLS[0]];
    assert_eq!(ids(&catalog.filter_by_text("", subset)), ["hash-generator", "word-counter"]);
}

#[test]
fn filter_by_text_matches_name_case_insensitively() {
    let catalog = sample();
    assert_eq!(ids(&catalog.filter_by_text("WORD", TOOLS)), ["word-counter"]);
    assert_eq!(ids(&catalog.filter_by_text("hash gen", TOOLS)), ["hash-generator"]);
}

#[test]
fn filter_by_text_matches_description() {
    let catalog = sample();
    assert_eq!(ids(&catalog.filter_by_text("sha digest", TOOLS)), ["hash-generator"]);
    assert_eq!(ids(&catalog.filter_by_text("upper", TOOLS)), ["case-converter"]);
}

#[test]
fn filter_by_text_matches_category_name() {
    let catalog = sample();
    assert_eq!(ids(&catalog.filter_by_text("text tools", TOOLS)), ["word-counter", "case-converter"]);
    assert_eq!(ids(&catalog.filter_by_text("SECURITY", TOOLS)), ["hash-generator"]);
}

#[test]
fn filter_by_text_no_match_is_empty() {
    let catalog = sample();
    assert!(catalog.filter_by_text("zzz", TOOLS).is_empty());
}

#[test]
fn filter_by_text_only_searches_given_set() {
    let catalog = sample();
    let subset = [&TOOLS[0]];
    assert!(catalog.filter_by_text("hash", subset).is_empty());
}

#[test]
fn filter_by_text_does_not_trim_query() {
    let catalog = sample();
    assert_eq!(ids(&catalog.filter_by_text("d c", TOOLS)), ["word-counter"]);
    assert!(catalog.filter_by_text("  word", TOOLS).is_empty());
}

#[test]
fn search_covers_whole_catalog() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.search("").len(), catalog.tools().len());
    assert!(catalog.search("uuid").iter().any(|t| t.id == "uuid-generator"));
}

// =============================================================
// curated listings
// =============================================================

#[test]
fn featured_and_new_flags_are_independent() {
    let catalog = sample();
    assert_eq!(ids(&catalog.featured()), ["word-counter", "hash-generator"]);
    assert_eq!(ids(&catalog.new_tools()), ["case-converter", "hash-generator"]);
}
