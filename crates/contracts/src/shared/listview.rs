//! List view engine: free-text search, categorical filters and column
//! sorting over an in-memory collection.
//!
//! The view state is an explicit, serializable struct so that the
//! filtering logic stays a pure function of `(collection, state)` and
//! can be unit tested without any UI in the loop.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Sentinel filter value that disables a categorical filter.
pub const FILTER_ALL: &str = "all";

/// Types that can be matched against a free-text search query.
pub trait Searchable {
    /// Returns true if ANY of the entity's designated text fields
    /// contains `query` as a case-insensitive substring.
    fn matches_search(&self, query: &str) -> bool;
}

/// Types exposing categorical fields for equality filtering.
pub trait Categorized {
    /// Display value of the given categorical field, if the field exists.
    fn category_value(&self, field: &str) -> Option<String>;
}

/// Types that can be compared by a named field.
pub trait SortableByField {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

/// Ephemeral view state of one list page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListViewState {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with an initial ascending sort on `field`.
    pub fn sorted_by(field: &str) -> Self {
        Self {
            sort: Some(SortSpec {
                field: field.to_string(),
                ascending: true,
            }),
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Sets a categorical filter. The sentinel `"all"` clears it.
    pub fn set_filter(&mut self, field: &str, value: &str) {
        if value.eq_ignore_ascii_case(FILTER_ALL) {
            self.filters.remove(field);
        } else {
            self.filters.insert(field.to_string(), value.to_string());
        }
    }

    /// Current filter value for `field`, `"all"` when inactive.
    pub fn filter_value(&self, field: &str) -> String {
        self.filters
            .get(field)
            .cloned()
            .unwrap_or_else(|| FILTER_ALL.to_string())
    }

    /// Number of active predicates (search counts as one).
    pub fn active_filter_count(&self) -> usize {
        let search = if self.search.trim().is_empty() { 0 } else { 1 };
        search + self.filters.len()
    }

    /// Clicking the same column flips direction; a new column starts
    /// ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        match &mut self.sort {
            Some(spec) if spec.field == field => spec.ascending = !spec.ascending,
            _ => {
                self.sort = Some(SortSpec {
                    field: field.to_string(),
                    ascending: true,
                })
            }
        }
    }
}

/// True if `record` satisfies the search query AND every active
/// categorical filter of `state`.
pub fn matches<T: Searchable + Categorized>(record: &T, state: &ListViewState) -> bool {
    let query = state.search.trim();
    if !query.is_empty() && !record.matches_search(query) {
        return false;
    }
    for (field, expected) in &state.filters {
        if expected.eq_ignore_ascii_case(FILTER_ALL) {
            continue;
        }
        match record.category_value(field) {
            Some(actual) if actual.eq_ignore_ascii_case(expected) => {}
            _ => return false,
        }
    }
    true
}

/// Filtered and sorted projection of `items` under `state`.
///
/// Sorting is stable: records with equal keys keep their relative input
/// order, in both directions.
pub fn apply<T>(items: &[T], state: &ListViewState) -> Vec<T>
where
    T: Searchable + Categorized + SortableByField + Clone,
{
    let mut out: Vec<T> = items
        .iter()
        .filter(|record| matches(*record, state))
        .cloned()
        .collect();
    if let Some(spec) = &state.sort {
        out.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, &spec.field);
            if spec.ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
    }
    out
}

/// Case-insensitive substring containment, shared by `Searchable` impls.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        group: String,
        rank: u32,
    }

    fn row(id: &str, name: &str, group: &str, rank: u32) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            group: group.to_string(),
            rank,
        }
    }

    impl Searchable for Row {
        fn matches_search(&self, query: &str) -> bool {
            contains_ci(&self.id, query) || contains_ci(&self.name, query)
        }
    }

    impl Categorized for Row {
        fn category_value(&self, field: &str) -> Option<String> {
            match field {
                "group" => Some(self.group.clone()),
                _ => None,
            }
        }
    }

    impl SortableByField for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "rank" => self.rank.cmp(&other.rank),
                _ => Ordering::Equal,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("R-1", "Alpha", "North", 3),
            row("R-2", "beta", "South", 1),
            row("R-3", "Gamma", "North", 3),
            row("R-4", "delta", "East", 2),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let items = sample();
        let state = ListViewState::new();
        assert_eq!(apply(&items, &state), items);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = sample();
        let mut state = ListViewState::new();
        state.set_search("ALPH");
        let result = apply(&items, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "R-1");

        // every record matched on a designated field
        state.set_search("r-");
        assert_eq!(apply(&items, &state).len(), 4);
    }

    #[test]
    fn result_is_subset_of_input() {
        let items = sample();
        let mut state = ListViewState::new();
        state.set_search("a");
        for record in apply(&items, &state) {
            assert!(items.contains(&record));
        }
    }

    #[test]
    fn no_match_yields_empty_result() {
        let items = sample();
        let mut state = ListViewState::new();
        state.set_search("zzz");
        assert!(apply(&items, &state).is_empty());
    }

    #[test]
    fn categorical_filter_is_case_insensitive_equality() {
        let items = sample();
        let mut state = ListViewState::new();
        state.set_filter("group", "north");
        let result = apply(&items, &state);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.group == "North"));
    }

    #[test]
    fn all_sentinel_disables_filter() {
        let items = sample();
        let mut state = ListViewState::new();
        state.set_filter("group", "North");
        state.set_filter("group", "all");
        assert_eq!(apply(&items, &state).len(), 4);
        assert_eq!(state.filter_value("group"), "all");
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn predicates_compose_with_and() {
        let items = sample();
        let mut state = ListViewState::new();
        state.set_search("gamma");
        state.set_filter("group", "South");
        assert!(apply(&items, &state).is_empty());

        state.set_filter("group", "North");
        let result = apply(&items, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "R-3");
    }

    #[test]
    fn unknown_filter_field_matches_nothing() {
        let items = sample();
        let mut state = ListViewState::new();
        state.set_filter("color", "red");
        assert!(apply(&items, &state).is_empty());
    }

    #[test]
    fn sort_is_idempotent() {
        let items = sample();
        let state = ListViewState::sorted_by("name");
        let once = apply(&items, &state);
        let twice = apply(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_orders_and_reverse_flips_distinct_keys() {
        let items = sample();
        let mut state = ListViewState::sorted_by("name");
        let asc: Vec<String> = apply(&items, &state).into_iter().map(|r| r.name).collect();
        assert_eq!(asc, vec!["Alpha", "beta", "delta", "Gamma"]);

        state.toggle_sort("name");
        let desc: Vec<String> = apply(&items, &state).into_iter().map(|r| r.name).collect();
        assert_eq!(desc, vec!["Gamma", "delta", "beta", "Alpha"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let items = sample();
        let mut state = ListViewState::sorted_by("rank");
        // R-1 and R-3 share rank 3 and must keep input order
        let asc: Vec<String> = apply(&items, &state).into_iter().map(|r| r.id).collect();
        assert_eq!(asc, vec!["R-2", "R-4", "R-1", "R-3"]);

        state.toggle_sort("rank");
        let desc: Vec<String> = apply(&items, &state).into_iter().map(|r| r.id).collect();
        assert_eq!(desc, vec!["R-1", "R-3", "R-4", "R-2"]);
    }

    #[test]
    fn toggle_sort_switches_field_ascending() {
        let mut state = ListViewState::sorted_by("name");
        state.toggle_sort("rank");
        let spec = state.sort.unwrap();
        assert_eq!(spec.field, "rank");
        assert!(spec.ascending);
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = ListViewState::sorted_by("name");
        state.set_search("alp");
        state.set_filter("group", "North");
        let json = serde_json::to_string(&state).unwrap();
        let back: ListViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
