use crate::V;

/// Errors detected while validating a graph description before optimization.
///
/// Per spec.md §7, the core itself assumes validated input; these checks
/// run once, at the adapter boundary (`Optimizer::build`), so that a
/// malformed graph never reaches the sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The same vertex id was assigned to more than one rank.
    DuplicateVertex { vertex: V },
    /// An edge names a vertex that was never assigned to any rank.
    UnrankedVertex { vertex: V },
    /// An edge's endpoints are not in adjacent ranks.
    NonAdjacentRankEdge {
        from: V,
        to: V,
        from_rank: u32,
        to_rank: u32,
    },
    /// An edge has a weight less than 1.
    InvalidWeight { from: V, to: V, weight: i64 },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::DuplicateVertex { vertex } => {
                write!(f, "vertex {} is assigned to more than one rank", vertex)
            }
            Error::UnrankedVertex { vertex } => write!(
                f,
                "edge references vertex {} which was not assigned to any rank",
                vertex
            ),
            Error::NonAdjacentRankEdge {
                from,
                to,
                from_rank,
                to_rank,
            } => write!(
                f,
                "edge {}->{} connects rank {} to rank {}, which are not adjacent",
                from, to, from_rank, to_rank
            ),
            Error::InvalidWeight { from, to, weight } => write!(
                f,
                "edge {}->{} has weight {}, which is less than 1",
                from, to, weight
            ),
        }
    }
}

impl std::error::Error for Error {}
