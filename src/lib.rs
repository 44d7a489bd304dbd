#![doc = r###"

Exact bilayer crossing counting and weighted barycenter sweep for layered
graph drawings.

Given a graph whose vertices are already partitioned into ranks (layers),
`optimize` repeatedly reorders the vertices within each rank to reduce the
number of times edges between adjacent ranks cross, while leaving the
rank assignment itself untouched. The crossing count between any two
adjacent ranks is computed exactly, not estimated, using an
accumulator-tree method (`counting_tree`); reordering is driven by a
weighted barycenter heuristic (`optimizer::sweep_rank`) alternating sweep
direction through the ranks (`optimizer::run`), the same two-part design
used by Graphviz's `dot` layout engine.

"###]

pub mod bilayer;
pub mod changes;
pub mod counting_tree;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod ramp_table;

#[cfg(test)]
pub mod testing;

pub use error::Error;
pub use model::{Edge, OptimizeReport, Weight, V};

/// Reorders the vertices within each rank of `ranks` to reduce weighted
/// edge crossings between adjacent ranks, per the algorithm described in
/// the crate documentation.
///
/// `ranks[r]` is the ordered list of vertex ids on rank `r`; every vertex
/// id used by `edges` must appear in exactly one rank, and every edge
/// must connect a vertex on rank `r` to a vertex on rank `r + 1` for some
/// `r`. Returns the optimized orders together with the exact weighted
/// crossing count between each pair of adjacent ranks and their sum.
pub fn optimize(ranks: &[Vec<V>], edges: &[Edge]) -> Result<OptimizeReport, Error> {
    Ok(optimizer::Optimizer::build(ranks, edges)?.run())
}
