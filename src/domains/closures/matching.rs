//! Approximate beach-name matching.
//!
//! Visitors rarely spell a beach name the way the closure table does, so
//! lookups go through a similarity ranking instead of exact equality. The
//! score is the classic sequence-matcher ratio `2.0 * M / T`, where `M` is
//! the total length of the longest matching blocks shared by the two strings
//! (found by recursive longest-common-substring decomposition) and `T` is the
//! combined length of both strings. Scores live in `[0.0, 1.0]`.

use std::collections::HashMap;

/// Maximum number of matches a lookup considers.
pub const DEFAULT_MAX_RESULTS: usize = 2;

/// Minimum similarity score for a candidate to count as a match.
pub const DEFAULT_CUTOFF: f64 = 0.61;

/// A maximal run of identical elements: `a[a_start..a_start + len]` equals
/// `b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    len: usize,
}

/// Index of every position each character occupies in `b`.
fn index_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        positions.entry(ch).or_default().push(j);
    }
    positions
}

/// Find the longest block matching within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Of all maximal blocks, returns the one starting earliest in `a`, and of
/// those, earliest in `b`. `run_lengths` tracks, for each end position in
/// `b`, the length of the run ending there against the current prefix of `a`.
fn find_longest_match(
    a: &[char],
    b_positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> Block {
    let mut best = Block {
        a_start: alo,
        b_start: blo,
        len: 0,
    };
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_positions.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = match j.checked_sub(1) {
                    Some(prev) => run_lengths.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                next_runs.insert(j, len);
                if len > best.len {
                    best = Block {
                        a_start: i + 1 - len,
                        b_start: j + 1 - len,
                        len,
                    };
                }
            }
        }
        run_lengths = next_runs;
    }

    best
}

/// Total number of matched characters between `a` and `b`.
///
/// Repeatedly takes the longest matching block and recurses into the
/// unmatched regions on either side of it.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let b_positions = index_positions(b);
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut total = 0;

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = find_longest_match(a, &b_positions, alo, ahi, blo, bhi);
        if block.len == 0 {
            continue;
        }
        total += block.len;
        if alo < block.a_start && blo < block.b_start {
            pending.push((alo, block.a_start, blo, block.b_start));
        }
        if block.a_start + block.len < ahi && block.b_start + block.len < bhi {
            pending.push((block.a_start + block.len, ahi, block.b_start + block.len, bhi));
        }
    }

    total
}

/// Similarity of two strings as a ratio in `[0.0, 1.0]`.
///
/// Case-sensitive. Two empty strings are considered identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_len(&a, &b) as f64 / total as f64
}

/// Return the candidates most similar to `query`, best first.
///
/// Candidates scoring below `cutoff` are excluded; a score exactly equal to
/// the cutoff is included. Equal scores keep the original candidate order.
/// The result is truncated to `max_results` entries.
pub fn get_close_matches<'a>(
    query: &str,
    candidates: &[&'a str],
    max_results: usize,
    cutoff: f64,
) -> Vec<&'a str> {
    let mut scored: Vec<(f64, &'a str)> = candidates
        .iter()
        .filter_map(|&candidate| {
            let score = similarity_ratio(candidate, query);
            (score >= cutoff).then_some((score, candidate))
        })
        .collect();

    // Stable sort, so ties keep candidate order.
    scored.sort_by(|x, y| y.0.total_cmp(&x.0));
    scored.truncate(max_results);

    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_identical() {
        assert_eq!(similarity_ratio("Carson Beach", "Carson Beach"), 1.0);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_ratio_both_empty() {
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_one_empty() {
        assert_eq!(similarity_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_ratio_partial_overlap() {
        // Longest block "bcd" -> 2 * 3 / 8
        assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
    }

    #[test]
    fn test_ratio_recurses_into_side_regions() {
        // "arson " and "each" both match across the case-mismatched letters:
        // 2 * 10 / 24
        let score = similarity_ratio("Carson Beach", "carson beach");
        assert!((score - 10.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_is_case_sensitive() {
        assert!(similarity_ratio("BEACH", "beach") < 1.0);
    }

    #[test]
    fn test_close_matches_ranked_best_first() {
        let matches = get_close_matches("appel", &["ape", "apple", "peach", "puppy"], 3, 0.6);
        assert_eq!(matches, vec!["apple", "ape"]);
    }

    #[test]
    fn test_close_matches_truncates_to_max_results() {
        let matches = get_close_matches("appel", &["ape", "apple", "peach", "puppy"], 1, 0.6);
        assert_eq!(matches, vec!["apple"]);
    }

    #[test]
    fn test_close_matches_cutoff_is_inclusive() {
        // similarity_ratio("abcd", "abxy") == 0.5 exactly
        assert_eq!(similarity_ratio("abcd", "abxy"), 0.5);
        let matches = get_close_matches("abxy", &["abcd"], 2, 0.5);
        assert_eq!(matches, vec!["abcd"]);
    }

    #[test]
    fn test_close_matches_below_cutoff_excluded() {
        let matches = get_close_matches("abxy", &["abcd"], 2, 0.51);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_close_matches_ties_keep_candidate_order() {
        // Both candidates score exactly 0.5 against the query.
        let matches = get_close_matches("ab", &["ay", "ax"], 2, 0.5);
        assert_eq!(matches, vec!["ay", "ax"]);
    }

    #[test]
    fn test_close_matches_never_exceeds_max_results() {
        let candidates = ["beach a", "beach b", "beach c", "beach d"];
        let matches = get_close_matches("beach", &candidates, 2, 0.1);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_close_matches_empty_candidates() {
        let matches = get_close_matches("anything", &[], 2, 0.61);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_misspelled_beach_name_matches() {
        let names = ["Carson Beach", "Tenean Beach", "Constitution Beach"];
        let matches = get_close_matches("carson beach", &names, 2, 0.61);
        assert_eq!(matches, vec!["Carson Beach"]);
    }
}
