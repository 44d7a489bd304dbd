#![doc = r###"

Change-range extractor (spec.md §4.4). Given a proposed order for a rank
and the rank's current positions, finds the minimal disjoint index ranges
that differ, so that only those ranges need to be tried (and, if
rejected, only those ranges need to be reverted) rather than re-testing
the whole rank on every barycenter pass.

"###]

use crate::model::{ChangeRange, V};

/// Computes the minimal disjoint ranges over which `new_order` differs
/// from the order implied by `pos`, following `getChanges` in
/// `examples/original_source/wasm/countCrossings.cpp` exactly.
pub fn compute_change_ranges(new_order: &[V], pos: &[u32]) -> Vec<ChangeRange> {
    let n = new_order.len();
    let perm: Vec<usize> = new_order.iter().map(|&v| pos[v as usize] as usize).collect();

    let mut ranges = Vec::new();
    let mut open: Option<(usize, usize)> = None; // (seq_start, seq_end)

    for p in 0..n {
        if perm[p] > p {
            open = match open {
                None => Some((p, perm[p])),
                Some((start, seq_end)) => {
                    if seq_end < p {
                        ranges.push(ChangeRange { begin: start, end: p - 1 });
                        Some((p, perm[p]))
                    } else {
                        Some((start, seq_end.max(perm[p])))
                    }
                }
            };
        }
        if perm[p] == p {
            if let Some((start, seq_end)) = open {
                if seq_end < p {
                    ranges.push(ChangeRange { begin: start, end: p - 1 });
                    open = None;
                }
            }
        }
    }
    if let Some((start, _)) = open {
        ranges.push(ChangeRange { begin: start, end: n - 1 });
    }
    ranges
}
