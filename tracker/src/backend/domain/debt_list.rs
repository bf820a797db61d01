//! Debt list ordering and search.
//!
//! Sorting and filtering are independent and never mutate their input.
//! A list view shows `filter_debts` followed by `sort_debts`.

use std::cmp::Reverse;

use crate::backend::domain::commands::debts::DebtListQuery;
use crate::backend::domain::models::Debt;

/// Unpaid debts first, then newest first within each group. Stable.
pub fn sort_debts(debts: &[Debt]) -> Vec<Debt> {
    let mut sorted = debts.to_vec();
    sorted.sort_by_key(|debt| (debt.is_paid, Reverse(debt.date)));
    sorted
}

/// Case-insensitive substring match on debtor name or description.
/// An empty query matches everything; order is preserved.
pub fn filter_debts(debts: &[Debt], query: &str) -> Vec<Debt> {
    if query.is_empty() {
        return debts.to_vec();
    }
    let needle = query.to_lowercase();
    debts
        .iter()
        .filter(|debt| {
            debt.debtor_name.to_lowercase().contains(&needle)
                || debt.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn list_debts(debts: &[Debt], query: &DebtListQuery) -> Vec<Debt> {
    let filtered = filter_debts(debts, query.search.as_deref().unwrap_or(""));
    sort_debts(&filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::Money;
    use chrono::{DateTime, Utc};

    fn debt(id: &str, name: &str, description: &str, date: &str, is_paid: bool) -> Debt {
        Debt {
            id: id.to_string(),
            debtor_name: name.to_string(),
            amount: Money::from_cents(1000),
            description: description.to_string(),
            date: DateTime::parse_from_rfc3339(date).unwrap().with_timezone(&Utc),
            due_date: None,
            is_paid,
            collection_notes: Vec::new(),
            payment_history: Vec::new(),
        }
    }

    fn sample() -> Vec<Debt> {
        vec![
            debt("1", "John", "Lunch", "2024-02-20T12:00:00Z", false),
            debt("2", "Jane", "Coffee", "2024-02-21T12:00:00Z", true),
            debt("3", "Bob", "Concert tickets", "2024-02-22T12:00:00Z", false),
            debt("4", "Alice", "Taxi", "2024-02-19T12:00:00Z", true),
        ]
    }

    fn ids(debts: &[Debt]) -> Vec<&str> {
        debts.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_sort_unpaid_first_then_newest() {
        let sorted = sort_debts(&sample());
        assert_eq!(ids(&sorted), vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_sort_two_debts_like_reference() {
        let debts = vec![
            debt("1", "John", "Lunch", "2024-02-20T12:00:00Z", false),
            debt("2", "Jane", "Coffee", "2024-02-21T12:00:00Z", true),
        ];
        let sorted = sort_debts(&debts);
        assert_eq!(sorted[0].id, "1");
        assert_eq!(sorted[1].id, "2");
    }

    #[test]
    fn test_sort_partition_and_order_invariant() {
        let sorted = sort_debts(&sample());
        let first_paid = sorted.iter().position(|d| d.is_paid).unwrap();
        assert!(sorted[..first_paid].iter().all(|d| !d.is_paid));
        assert!(sorted[first_paid..].iter().all(|d| d.is_paid));
        for pair in sorted.windows(2) {
            if pair[0].is_paid == pair[1].is_paid {
                assert!(pair[0].date >= pair[1].date);
            }
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let debts = vec![
            debt("a", "A", "", "2024-02-20T12:00:00Z", false),
            debt("b", "B", "", "2024-02-20T12:00:00Z", false),
        ];
        assert_eq!(ids(&sort_debts(&debts)), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_does_not_mutate_and_is_idempotent() {
        let debts = sample();
        let before = debts.clone();
        let once = sort_debts(&debts);
        let twice = sort_debts(&once);
        assert_eq!(debts, before);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_matches_name_or_description_case_insensitive() {
        let debts = sample();
        assert_eq!(ids(&filter_debts(&debts, "JOHN")), vec!["1"]);
        assert_eq!(ids(&filter_debts(&debts, "coff")), vec!["2"]);
        assert_eq!(ids(&filter_debts(&debts, "a")), vec!["2", "4"]);
        assert!(filter_debts(&debts, "zzz").is_empty());
    }

    #[test]
    fn test_filter_empty_query_matches_all_without_reordering() {
        let debts = sample();
        assert_eq!(filter_debts(&debts, ""), debts);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let debts = sample();
        let once = filter_debts(&debts, "o");
        assert_eq!(filter_debts(&once, "o"), once);
        assert_eq!(filter_debts(&debts, "o"), once);
    }

    #[test]
    fn test_list_filters_then_sorts() {
        let query = DebtListQuery {
            search: Some("o".to_string()),
        };
        // John/Lunch, Jane/Coffee, Bob/Concert
        assert_eq!(ids(&list_debts(&sample(), &query)), vec!["3", "1", "2"]);
        assert_eq!(list_debts(&sample(), &DebtListQuery::default()).len(), 4);
    }
}
