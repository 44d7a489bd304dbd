//! Test-only fixture helpers, adapted from the teacher's `GraphBuilder`
//! pattern for the ranks + weighted-edges model this crate works with.

use crate::model::{Edge, Weight, V};

/// Initializes `env_logger` for a test process, ignoring the error if it
/// has already been initialized by another test in the same binary.
pub fn init_test() {
    drop(env_logger::try_init());
}

/// Builds a dense rank list `[[0, 1, ..., width-1], ...]` for `num_ranks`
/// ranks of equal `width`, with vertex ids assigned contiguously rank by
/// rank. Handy for constructing layered test fixtures without spelling
/// out vertex ids by hand.
pub fn dense_ranks(num_ranks: usize, width: usize) -> Vec<Vec<V>> {
    let mut ranks = Vec::with_capacity(num_ranks);
    let mut next = 0u32;
    for _ in 0..num_ranks {
        let rank: Vec<V> = (0..width as u32).map(|i| next + i).collect();
        next += width as u32;
        ranks.push(rank);
    }
    ranks
}

/// Shorthand for building an `Edge` in test code.
pub fn edge(from: V, to: V, weight: Weight) -> Edge {
    Edge::new(from, to, weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_ranks_assigns_contiguous_ids() {
        let ranks = dense_ranks(3, 2);
        assert_eq!(ranks, vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    }
}
