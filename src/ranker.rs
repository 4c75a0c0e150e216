//! Feature-importance ranking
//!
//! Selects the K most important features and orders them ascending, which is
//! the order a horizontal bar chart wants: the largest bar ends up at the top.

use std::cmp::Ordering;

use thiserror::Error;

use crate::dataset::ImportanceEntry;

/// Number of features shown on the importance chart by default
pub const DEFAULT_TOP_K: usize = 10;

/// Errors returned by the ranker
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn ascending(a: &ImportanceEntry, b: &ImportanceEntry) -> Ordering {
    a.importance.total_cmp(&b.importance)
}

/// Return the `k` most important entries, sorted by importance ascending.
///
/// Both sorts are stable, so entries with equal importance keep the order
/// they had in `entries`.
///
/// # Errors
///
/// [`RankError::InvalidInput`] when `k` is zero or `entries` is empty.
pub fn rank_top_features(
    entries: &[ImportanceEntry],
    k: usize,
) -> Result<Vec<ImportanceEntry>, RankError> {
    if k == 0 {
        return Err(RankError::InvalidInput(
            "top-k count must be positive".to_string(),
        ));
    }
    if entries.is_empty() {
        return Err(RankError::InvalidInput(
            "no feature importances to rank".to_string(),
        ));
    }

    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| ascending(b, a));
    ranked.truncate(k);
    ranked.sort_by(ascending);

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, importance: f64) -> ImportanceEntry {
        ImportanceEntry::new(name, importance)
    }

    fn names(entries: &[ImportanceEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn sample() -> Vec<ImportanceEntry> {
        vec![
            entry("A", 0.5),
            entry("B", 0.3),
            entry("C", 0.9),
            entry("D", 0.3),
        ]
    }

    #[test]
    fn test_top_two_ascending() {
        let ranked = rank_top_features(&sample(), 2).unwrap();
        assert_eq!(ranked, vec![entry("A", 0.5), entry("C", 0.9)]);
    }

    #[test]
    fn test_tie_keeps_original_order() {
        // B and D tie; only B fits in the top 3
        let ranked = rank_top_features(&sample(), 3).unwrap();
        assert_eq!(names(&ranked), vec!["B", "A", "C"]);

        let ranked = rank_top_features(&sample(), 4).unwrap();
        assert_eq!(names(&ranked), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_k_larger_than_input_returns_all() {
        let ranked = rank_top_features(&sample(), 100).unwrap();
        assert_eq!(ranked.len(), 4);
        assert!(ranked.windows(2).all(|w| w[0].importance <= w[1].importance));
    }

    #[test]
    fn test_output_length_and_order() {
        let input: Vec<ImportanceEntry> = (0..15)
            .map(|i| entry(&format!("f{}", i), ((i * 7) % 11) as f64 / 10.0))
            .collect();

        for k in 1..=20 {
            let ranked = rank_top_features(&input, k).unwrap();
            assert_eq!(ranked.len(), k.min(input.len()));
            assert!(ranked.windows(2).all(|w| w[0].importance <= w[1].importance));

            // Everything left out is no larger than the smallest kept value
            if let Some(min_kept) = ranked.first().map(|e| e.importance) {
                let dropped = input.iter().filter(|e| !ranked.contains(e));
                assert!(dropped.into_iter().all(|e| e.importance <= min_kept));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let once = rank_top_features(&sample(), 3).unwrap();
        let twice = rank_top_features(&once, 3).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_zero_k_is_invalid() {
        assert!(matches!(
            rank_top_features(&sample(), 0),
            Err(RankError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert!(matches!(
            rank_top_features(&[], 10),
            Err(RankError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_input_is_not_modified() {
        let input = sample();
        let before = input.clone();
        let _ = rank_top_features(&input, 2).unwrap();
        assert_eq!(input, before);
    }
}
