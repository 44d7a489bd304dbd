#![doc = r###"

Accumulator-tree bilayer crossing counter (spec.md §4.1), adapted from:

> Barth, W., Jünger, M., & Mutzel, P. (2002, August). Simple and efficient
> bilayer cross counting. In International Symposium on Graph Drawing
> (pp. 130-141). Springer, Berlin, Heidelberg.

and grounded directly on `countCrossingsRank` in
`examples/original_source/wasm/countCrossings.cpp`. The tree is a complete
binary tree over south-positions, stored as a flat array: leaf `k` holds
the accumulated weight of edges already inserted whose south-position
equals `k`; internal nodes hold subtree sums. Walking from a freshly
inserted leaf to the root and summing the right-sibling subtree at every
step yields the total weight of previously inserted edges whose
south-position is strictly greater than the current one — exactly the set
of edges that cross it, since edges are fed to the tree in ascending
`north` order.

"###]

use crate::model::BilayerEdge;

fn next_power_of_two(n: usize) -> usize {
    let mut p = 1;
    while p < n {
        p *= 2;
    }
    p
}

/// Exact weighted crossing count for a bilayer.
///
/// `edges` must already be sorted by `(north, south)` ascending (the
/// caller, `bilayer_crossings` in `bilayer.rs`, does this). `num_south` is
/// the size of the rank whose order is being scored; the tree is sized to
/// the next power of two >= `num_south`. `tree` is caller-owned scratch,
/// resized as needed and reused across calls to avoid reallocating on
/// every bilayer (spec.md §3, "scratch buffers ... sized to the largest
/// rank").
pub fn count_bilayer_crossings(num_south: usize, edges: &[BilayerEdge], tree: &mut Vec<u64>) -> u64 {
    if edges.is_empty() {
        return 0;
    }

    let leaf_count = next_power_of_two(num_south.max(1));
    let tree_size = 2 * leaf_count - 1;
    let first_leaf = leaf_count - 1;

    tree.clear();
    tree.resize(tree_size, 0);

    let mut total: u64 = 0;
    for edge in edges {
        let mut index = first_leaf + edge.south as usize;
        tree[index] += edge.weight as u64;
        let mut weight_sum: u64 = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) / 2;
            tree[index] += edge.weight as u64;
        }
        total += edge.weight as u64 * weight_sum;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(north: u32, south: u32, weight: u32) -> BilayerEdge {
        BilayerEdge { north, south, weight }
    }

    /// Brute-force O(E^2) reference: sum of w_e * w_f over unordered pairs
    /// where one edge has the smaller north and larger south.
    fn brute_force(edges: &[BilayerEdge]) -> u64 {
        let mut total = 0u64;
        for (i, e) in edges.iter().enumerate() {
            for f in &edges[..i] {
                let (lo, hi) = if e.north <= f.north { (e, f) } else { (f, e) };
                if lo.south > hi.south {
                    total += lo.weight as u64 * hi.weight as u64;
                }
            }
        }
        total
    }

    fn check(mut edges: Vec<BilayerEdge>, num_south: usize) {
        edges.sort_by_key(|e| (e.north, e.south));
        let mut tree = Vec::new();
        let got = count_bilayer_crossings(num_south, &edges, &mut tree);
        assert_eq!(got, brute_force(&edges), "edges = {:?}", edges);
    }

    #[test]
    fn empty_is_zero() {
        let mut tree = Vec::new();
        assert_eq!(count_bilayer_crossings(0, &[], &mut tree), 0);
        assert_eq!(count_bilayer_crossings(5, &[], &mut tree), 0);
    }

    #[test]
    fn single_edge_never_crosses() {
        check(vec![edge(0, 0, 3)], 1);
    }

    #[test]
    fn two_parallel_edges_do_not_cross() {
        check(vec![edge(0, 0, 1), edge(1, 1, 1)], 2);
    }

    #[test]
    fn classic_k22_crossing() {
        // north 0 -> south 1, north 1 -> south 0: one crossing.
        check(vec![edge(0, 1, 1), edge(1, 0, 1)], 2);
    }

    #[test]
    fn weighted_crossing_multiplies() {
        let mut tree = Vec::new();
        let mut edges = vec![edge(0, 1, 5), edge(1, 0, 7)];
        edges.sort_by_key(|e| (e.north, e.south));
        assert_eq!(count_bilayer_crossings(2, &edges, &mut tree), 35);
    }

    #[test]
    fn many_crossings_against_brute_force() {
        // A denser bilayer: every north maps to the reverse south order.
        let n = 8;
        let edges: Vec<BilayerEdge> = (0..n).map(|i| edge(i, n - 1 - i, 1)).collect();
        check(edges, n as usize);
    }

    #[test]
    fn shared_endpoints_still_counted() {
        // Two edges sharing a north position but distinct souths: they do
        // not "cross" under this counter only if south order agrees; here
        // it disagrees with a third edge.
        check(
            vec![edge(0, 0, 2), edge(0, 1, 3), edge(1, 0, 4)],
            2,
        );
    }
}
