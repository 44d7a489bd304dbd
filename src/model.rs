/// Vertex id. Ids need not be dense; a max-id-sized index array is used
/// wherever per-vertex data is needed (spec.md §3).
pub type V = u32;

/// Edge weight. Spec.md §3 requires weight >= 1.
pub type Weight = u32;

/// A directed edge between two vertices in adjacent ranks.
///
/// Invariant (checked once, at construction): `rank(from) + 1 == rank(to)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: V,
    pub to: V,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: V, to: V, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

/// One entry of a per-vertex neighbor list: the other endpoint of an edge,
/// and that edge's weight. Two `RampTable<Neighbor>` projections (`up` and
/// `down`) together replace the original's pointer-to-pointer
/// `edgesPerNodePerDir` tables (spec.md §9).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub other: V,
    pub weight: Weight,
}

/// A transient (north, south, weight) triple used only inside a single
/// bilayer crossing count (spec.md §3). `north`/`south` are positions
/// within their respective ranks, not vertex ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BilayerEdge {
    pub north: u32,
    pub south: u32,
    pub weight: Weight,
}

/// A maximal contiguous index range, inclusive on both ends, produced by
/// the change-range extractor (spec.md §4.4).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChangeRange {
    pub begin: usize,
    pub end: usize,
}

/// The result of `optimize`: the optimized per-rank vertex orders, the
/// exact weighted crossing count between each pair of adjacent ranks, and
/// their sum. Spec.md §6 lists `orders` as the required output and the
/// crossing counts as something implementations "MAY additionally
/// expose"; the original C program always computes both (see SPEC_FULL.md
/// §3), so this crate always returns both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptimizeReport {
    pub orders: Vec<Vec<V>>,
    /// `crossings[i]` is the weighted crossing count between rank `i` and
    /// rank `i + 1`. Empty when there are fewer than two ranks.
    pub crossings: Vec<u64>,
    pub total: u64,
}
