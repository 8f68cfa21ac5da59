//! Property-based tests for the dashboard catalogs
//!
//! Search and toggle rules are shared by every view; these check them on
//! arbitrary input and on the real datasets.

use proptest::prelude::*;
use vintrack_core::catalog::{
    autocoop_items, filter_orders, matches_query, orders, search, toggle_flag, FilterBook,
    FilterDraft, Inbox, StatusFilter,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Item names made of lowercase letters and spaces
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,30}").expect("valid regex")
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 0..20)
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: usize,
    name: String,
    on: bool,
}

fn rows_from(names: Vec<String>) -> Vec<Row> {
    names
        .into_iter()
        .enumerate()
        .map(|(id, name)| Row {
            id,
            on: id % 2 == 0,
            name,
        })
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The empty query returns every item in order
    #[test]
    fn empty_query_returns_all(names in names_strategy()) {
        let rows = rows_from(names);
        let found: Vec<usize> = search(&rows, "", |r| r.name.as_str()).iter().map(|r| r.id).collect();
        let all: Vec<usize> = rows.iter().map(|r| r.id).collect();
        prop_assert_eq!(found, all);
    }

    /// A query using characters no name contains finds nothing
    #[test]
    fn impossible_query_returns_none(names in names_strategy(), query in "[0-9]{1,5}") {
        let rows = rows_from(names);
        prop_assert!(search(&rows, &query, |r| r.name.as_str()).is_empty());
    }

    /// Matching ignores case on either side
    #[test]
    fn search_is_case_insensitive(name in name_strategy(), query in "[a-z]{0,4}") {
        let upper_name = name.to_uppercase();
        let upper_query = query.to_uppercase();
        let expected = name.contains(&query);
        prop_assert_eq!(matches_query(&name, &query), expected);
        prop_assert_eq!(matches_query(&upper_name, &query), expected);
        prop_assert_eq!(matches_query(&name, &upper_query), expected);
    }

    /// Every result actually contains the query
    #[test]
    fn results_contain_query(names in names_strategy(), query in "[a-z]{1,2}") {
        let rows = rows_from(names);
        for row in search(&rows, &query, |r| r.name.as_str()) {
            prop_assert!(row.name.contains(&query));
        }
    }

    /// Toggling the same flag twice restores the list
    #[test]
    fn toggle_twice_is_identity(names in names_strategy(), target in 0usize..25) {
        let mut rows = rows_from(names);
        let original = rows.clone();
        let hit = toggle_flag(&mut rows, |r| r.id == target, |r| &mut r.on);
        prop_assert_eq!(hit, target < original.len());
        toggle_flag(&mut rows, |r| r.id == target, |r| &mut r.on);
        prop_assert_eq!(rows, original);
    }

    /// Filter toggles by id are involutions and touch nothing else
    #[test]
    fn filter_book_toggles_are_involutions(id in 0u32..8, notify in any::<bool>()) {
        let mut book = FilterBook::new();
        let original = book.clone();
        if notify {
            book.toggle_notified(id);
            book.toggle_notified(id);
        } else {
            book.toggle_active(id);
            book.toggle_active(id);
        }
        prop_assert_eq!(book, original);
    }

    /// Saved drafts get fresh ids above every existing one
    #[test]
    fn new_filters_get_fresh_ids(names in prop::collection::vec("[a-z]{1,12}", 1..6)) {
        let mut book = FilterBook::new();
        for name in names {
            let max_before = book.filters().iter().map(|f| f.id).max().unwrap_or(0);
            let draft = FilterDraft { name, ..FilterDraft::blank() };
            let id = book.save(draft).unwrap();
            prop_assert_eq!(id, max_before + 1);
        }
    }
}

// ============================================================================
// Dataset checks
// ============================================================================

#[test]
fn test_view_searches_on_real_data() {
    let items = autocoop_items();
    assert_eq!(search(&items, "", |i| i.name.as_str()).len(), items.len());
    assert!(search(&items, "zzz", |i| i.name.as_str()).is_empty());

    let orders = orders();
    assert_eq!(filter_orders(&orders, StatusFilter::All, "").len(), orders.len());
    assert_eq!(filter_orders(&orders, StatusFilter::All, "VINTAGE").len(), 1);

    let book = FilterBook::new();
    assert_eq!(book.search("").len(), book.len());

    let inbox = Inbox::new();
    assert_eq!(inbox.search("").len(), inbox.conversations().len());
    assert!(inbox.search("nobody").is_empty());
}
