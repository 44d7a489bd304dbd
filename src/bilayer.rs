#![doc = r###"

Bilayer driver (spec.md §4.2): projects a candidate order for one rank,
together with a neighbor projection (`up` or `down`) and the current
vertex positions, into a sorted list of bilayer edges, then hands them to
the accumulator-tree counter (`counting_tree::count_bilayer_crossings`).

"###]

use crate::counting_tree::count_bilayer_crossings;
use crate::model::{BilayerEdge, Neighbor, V};
use crate::ramp_table::RampTable;

/// Scores `candidate` (a proposed order for some rank) against one
/// neighboring rank, using `neighbors` (the `up` or `down` projection for
/// that side) and `pos` (current positions, which must already be correct
/// for every vertex `candidate`'s neighbors live in). Does not mutate
/// `pos` or any order.
///
/// `scratch` and `tree` are reused across calls; both are cleared here.
pub fn bilayer_crossings(
    candidate: &[V],
    neighbors: &RampTable<Neighbor>,
    pos: &[u32],
    scratch: &mut Vec<BilayerEdge>,
    tree: &mut Vec<u64>,
) -> u64 {
    scratch.clear();
    for (south_pos, &v) in candidate.iter().enumerate() {
        for nb in neighbors.entry_values(v as usize) {
            scratch.push(BilayerEdge {
                north: pos[nb.other as usize],
                south: south_pos as u32,
                weight: nb.weight,
            });
        }
    }
    scratch.sort_unstable_by_key(|e| (e.north, e.south));
    count_bilayer_crossings(candidate.len(), scratch, tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp_table::RampTableBuilder;

    fn up_table(edges: &[(V, V, u32)]) -> RampTable<Neighbor> {
        let mut b: RampTableBuilder<Neighbor> = RampTableBuilder::new();
        for &(from, to, weight) in edges {
            b.push(to, Neighbor { other: from, weight });
        }
        b.finish()
    }

    #[test]
    fn k22_crossing_detected() {
        // ranks: [[0,1],[2,3]], edges (0,3,1),(1,2,1) -- spec.md §8 boundary 2.
        let up = up_table(&[(0, 3, 1), (1, 2, 1)]);
        let pos_rank0 = [0u32, 1u32]; // pos[0]=0, pos[1]=1
        let mut scratch = Vec::new();
        let mut tree = Vec::new();
        let candidate = [2u32, 3u32];
        let count = bilayer_crossings(&candidate, &up, &pos_rank0, &mut scratch, &mut tree);
        assert_eq!(count, 1);
    }

    #[test]
    fn swapped_order_resolves_crossing() {
        let up = up_table(&[(0, 3, 1), (1, 2, 1)]);
        let pos_rank0 = [0u32, 1u32];
        let mut scratch = Vec::new();
        let mut tree = Vec::new();
        let candidate = [3u32, 2u32];
        let count = bilayer_crossings(&candidate, &up, &pos_rank0, &mut scratch, &mut tree);
        assert_eq!(count, 0);
    }

    #[test]
    fn vertex_with_no_neighbors_contributes_nothing() {
        let up = up_table(&[(0, 2, 1)]);
        // vertex 1 is in the scored rank but has no up-neighbors at all.
        let pos_rank0 = [0u32];
        let mut scratch = Vec::new();
        let mut tree = Vec::new();
        let candidate = [1u32, 2u32];
        let count = bilayer_crossings(&candidate, &up, &pos_rank0, &mut scratch, &mut tree);
        assert_eq!(count, 0);
    }
}
