//! Contiguous-run labeling for grouped axis labels.

/// A maximal span of equal adjacent values.
#[derive(Debug, Clone, PartialEq)]
pub struct Run<T> {
    pub value: T,
    /// Offset of the first element
    pub start: usize,
    /// Number of elements, always >= 1
    pub len: usize,
}

impl<T> Run<T> {
    /// Inclusive index of the last element.
    pub fn end(&self) -> usize {
        self.start + self.len - 1
    }

    /// Midpoint between the first and last element, where the run label goes.
    pub fn center(&self) -> f64 {
        (self.start + self.end()) as f64 / 2.0
    }
}

/// Partition `values` into maximal runs of equal adjacent elements.
///
/// Runs come back in input order and tile `[0, values.len())`. Equal values
/// that are not adjacent form separate runs, so callers sort first. An empty
/// slice yields no runs.
pub fn contiguous_runs<T: PartialEq + Clone>(values: &[T]) -> Vec<Run<T>> {
    let mut runs: Vec<Run<T>> = Vec::new();
    for (i, value) in values.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.value == *value => run.len += 1,
            _ => runs.push(Run {
                value: value.clone(),
                start: i,
                len: 1,
            }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiles<T: PartialEq + std::fmt::Debug>(runs: &[Run<T>], n: usize) {
        assert_eq!(runs.iter().map(|r| r.len).sum::<usize>(), n);
        let mut expected_start = 0;
        for run in runs {
            assert_eq!(run.start, expected_start);
            assert!(run.len >= 1);
            expected_start += run.len;
        }
        for pair in runs.windows(2) {
            assert_ne!(pair[0].value, pair[1].value);
        }
    }

    #[test]
    fn test_mixed_runs() {
        let values = ["A", "A", "B", "B", "B", "C"];
        let runs = contiguous_runs(&values);
        let triples: Vec<(&str, usize, usize)> =
            runs.iter().map(|r| (r.value, r.start, r.end())).collect();
        assert_eq!(triples, vec![("A", 0, 1), ("B", 2, 4), ("C", 5, 5)]);
        assert_tiles(&runs, values.len());
        assert_eq!(runs[1].center(), 3.0);
        assert_eq!(runs[0].center(), 0.5);
    }

    #[test]
    fn test_all_equal_is_one_run() {
        let values = vec![7u32; 9];
        let runs = contiguous_runs(&values);
        assert_eq!(runs.len(), 1);
        assert_eq!((runs[0].start, runs[0].len), (0, 9));
    }

    #[test]
    fn test_all_distinct_is_n_runs() {
        let values: Vec<i32> = (0..6).collect();
        let runs = contiguous_runs(&values);
        assert_eq!(runs.len(), 6);
        assert!(runs.iter().all(|r| r.len == 1));
        assert_tiles(&runs, 6);
    }

    #[test]
    fn test_non_adjacent_repeats_split() {
        let values = ["x", "y", "x", "x"];
        let runs = contiguous_runs(&values);
        assert_eq!(runs.len(), 3);
        assert_tiles(&runs, 4);
    }

    #[test]
    fn test_pseudo_random_sequences_tile() {
        // Linear congruential sequence over a small alphabet.
        let mut state: u64 = 12345;
        for n in 1..60 {
            let values: Vec<u64> = (0..n)
                .map(|_| {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    (state >> 60) % 3
                })
                .collect();
            let runs = contiguous_runs(&values);
            assert_tiles(&runs, n);
        }
    }

    #[test]
    fn test_empty_input() {
        let runs = contiguous_runs::<String>(&[]);
        assert!(runs.is_empty());
    }
}
