//! Sentence rendering for closure queries.
//!
//! Tools return a single human-readable sentence, never structured data, so
//! the phrasing here is an external contract shared with callers.

use super::dataset::ClosureTable;
use super::matching::{DEFAULT_CUTOFF, DEFAULT_MAX_RESULTS, get_close_matches};

/// Describe the closure status of the beach named (possibly misspelled) by
/// `query`.
///
/// Matched names are resolved back to their first record in the table, then
/// rendered according to how many closures matched. No match at all reads as
/// the beach being open.
pub fn closure_sentence(table: &ClosureTable, query: &str) -> String {
    let names = table.beach_names();
    let matches = get_close_matches(query, &names, DEFAULT_MAX_RESULTS, DEFAULT_CUTOFF);

    let closed: Vec<String> = matches
        .iter()
        .filter_map(|name| table.find(name))
        .map(|record| format!("{} (Reason: {})", record.beach_name, record.reason))
        .collect();

    match closed.as_slice() {
        [] => format!("The beach '{query}' appears to be open."),
        [only] => format!("The beach {only} is currently closed."),
        [first, second] => {
            format!("The beaches {first} and {second} are currently closed.")
        }
        // Unreachable while the match cap is 2; kept for a raised cap.
        many => format!("The beaches {} are currently closed.", many.join(", ")),
    }
}

/// Describe every beach in the table as closed.
///
/// The table carries only closed beaches, so no status filtering happens
/// here. An empty table renders the degenerate empty join unchanged.
pub fn all_closures_sentence(table: &ClosureTable) -> String {
    let entries: Vec<String> = table
        .records()
        .iter()
        .map(|record| format!("{} in {}", record.beach_name, record.area))
        .collect();

    format!(
        "The following beaches are currently closed: {}.",
        entries.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::closures::dataset::ClosureRecord;

    fn record(area: &str, name: &str, reason: &str) -> ClosureRecord {
        ClosureRecord {
            area: area.to_string(),
            beach_name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    fn boston_table() -> ClosureTable {
        ClosureTable::from_records(vec![
            record("Boston", "Carson Beach", "Bacteria"),
            record("Boston", "Tenean Beach", ""),
        ])
    }

    #[test]
    fn test_single_fuzzy_match() {
        let sentence = closure_sentence(&boston_table(), "carson beach");
        assert_eq!(
            sentence,
            "The beach Carson Beach (Reason: Bacteria) is currently closed."
        );
    }

    #[test]
    fn test_no_match_reads_as_open() {
        let sentence = closure_sentence(&boston_table(), "nonexistent xyz");
        assert_eq!(sentence, "The beach 'nonexistent xyz' appears to be open.");
    }

    #[test]
    fn test_two_matches_joined_with_and() {
        let table = ClosureTable::from_records(vec![
            record("Lynn", "Kings Beach", "Bacteria"),
            record("Swampscott", "Kings Beach South", "Algae"),
        ]);
        let sentence = closure_sentence(&table, "kings beach");
        assert_eq!(
            sentence,
            "The beaches Kings Beach (Reason: Bacteria) and \
             Kings Beach South (Reason: Algae) are currently closed."
        );
    }

    #[test]
    fn test_empty_reason_is_rendered_empty() {
        let sentence = closure_sentence(&boston_table(), "tenean beach");
        assert_eq!(
            sentence,
            "The beach Tenean Beach (Reason: ) is currently closed."
        );
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let table = boston_table();
        let first = closure_sentence(&table, "carson beach");
        let second = closure_sentence(&table, "carson beach");
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_all() {
        let sentence = all_closures_sentence(&boston_table());
        assert_eq!(
            sentence,
            "The following beaches are currently closed: \
             Carson Beach in Boston, Tenean Beach in Boston."
        );
    }

    #[test]
    fn test_report_all_empty_table() {
        let sentence = all_closures_sentence(&ClosureTable::default());
        assert_eq!(sentence, "The following beaches are currently closed: .");
    }
}
