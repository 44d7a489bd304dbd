#![doc = r###"

The sweep controller (C7), barycenter sweep (C6), try-order evaluator
(C5), crossings cache (C3) and the core-facing half of the input/output
adapter (C8): building the `up`/`down` neighbor projections from a graph
description and writing back the final per-rank orders.

Direction bookkeeping in the original C (`boolDirection`, `signDirection`,
`crossingOffsetNorth`, `crossingOffsetSouth`) is replaced here with a
two-valued `Direction` enum (spec.md §9, "Direction flag as index") and a
single observation that collapses all four of those variables: the
crossing count between ranks `a` and `a+1` always lives at
`crossings[max(a, a + 1)]`, so the index to read or write is simply
`r.max(other_rank)` regardless of which way the sweep is going.

"###]

use log::debug;

use crate::bilayer::bilayer_crossings;
use crate::changes::compute_change_ranges;
use crate::error::Error;
use crate::model::{BilayerEdge, Edge, Neighbor, OptimizeReport, Weight, V};
use crate::ramp_table::{RampTable, RampTableBuilder};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Up,
    Down,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Down,
    Up,
}

impl Direction {
    fn sign(self) -> i64 {
        match self {
            Direction::Down => 1,
            Direction::Up => -1,
        }
    }

    fn flip(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// (first rank, last rank) visited this sweep, inclusive, in the
    /// order they are visited. Requires `num_ranks >= 2`.
    fn bounds(self, num_ranks: usize) -> (usize, usize) {
        match self {
            Direction::Down => (1, num_ranks - 1),
            Direction::Up => (num_ranks - 2, 0),
        }
    }

    /// Which neighbor projection faces the already-swept side.
    fn north_side(self) -> Side {
        match self {
            Direction::Down => Side::Up,
            Direction::Up => Side::Down,
        }
    }

    /// Which neighbor projection faces the not-yet-swept side.
    fn south_side(self) -> Side {
        match self {
            Direction::Down => Side::Down,
            Direction::Up => Side::Up,
        }
    }
}

/// Mutable state and scratch buffers for one `optimize` call. Owns
/// `order`/`pos` (mutated in place, per spec.md §3) and the private
/// scratch buffers used by C1-C6; nothing here outlives the call.
pub struct Optimizer {
    order: Vec<Vec<V>>,
    pos: Vec<u32>,
    up: RampTable<Neighbor>,
    down: RampTable<Neighbor>,
    /// `crossings[r]` is the weighted crossing count between rank `r - 1`
    /// and rank `r`, or `None` if it has never been computed.
    crossings: Vec<Option<u64>>,
    tree: Vec<u64>,
    bilayer_scratch: Vec<BilayerEdge>,
    multiplier: f64,
}

impl Optimizer {
    /// Validates and builds the `up`/`down` adjacency projections from a
    /// graph description, per spec.md §4.8 and §7.
    pub fn build(ranks: &[Vec<V>], edges: &[Edge]) -> Result<Self, Error> {
        let num_ranks = ranks.len();
        let max_id = ranks
            .iter()
            .flat_map(|r| r.iter())
            .copied()
            .max()
            .unwrap_or(0);

        let mut v_rank: Vec<Option<u32>> = vec![None; max_id as usize + 1];
        let mut pos: Vec<u32> = vec![0; max_id as usize + 1];
        for (r, verts) in ranks.iter().enumerate() {
            for (p, &v) in verts.iter().enumerate() {
                if v_rank[v as usize].is_some() {
                    return Err(Error::DuplicateVertex { vertex: v });
                }
                v_rank[v as usize] = Some(r as u32);
                pos[v as usize] = p as u32;
            }
        }

        let mut up_builder: RampTableBuilder<Neighbor> = RampTableBuilder::new();
        let mut down_builder: RampTableBuilder<Neighbor> = RampTableBuilder::new();
        let mut edges_per_rank_boundary = vec![0usize; num_ranks];
        let mut max_weight: Weight = 1;

        for &Edge { from, to, weight } in edges {
            if weight < 1 {
                return Err(Error::InvalidWeight {
                    from,
                    to,
                    weight: weight as i64,
                });
            }
            let from_rank = v_rank
                .get(from as usize)
                .copied()
                .flatten()
                .ok_or(Error::UnrankedVertex { vertex: from })?;
            let to_rank = v_rank
                .get(to as usize)
                .copied()
                .flatten()
                .ok_or(Error::UnrankedVertex { vertex: to })?;
            if from_rank + 1 != to_rank {
                return Err(Error::NonAdjacentRankEdge {
                    from,
                    to,
                    from_rank,
                    to_rank,
                });
            }
            up_builder.push(to, Neighbor { other: from, weight });
            down_builder.push(from, Neighbor { other: to, weight });
            edges_per_rank_boundary[to_rank as usize] += 1;
            max_weight = max_weight.max(weight);
        }

        let mut up = up_builder.finish();
        let mut down = down_builder.finish();
        while up.num_keys() <= max_id as usize {
            up.finish_key();
        }
        while down.num_keys() <= max_id as usize {
            down.finish_key();
        }

        let max_edges_per_bilayer = edges_per_rank_boundary.into_iter().max().unwrap_or(0);
        let multiplier = max_weight as f64 * max_edges_per_bilayer as f64 + 1.0;

        let mut crossings = vec![None; num_ranks];
        if num_ranks > 0 {
            crossings[0] = Some(0);
        }

        debug!(
            "Optimizer::build: num_ranks={}, max_id={}, max_weight={}, max_edges_per_bilayer={}",
            num_ranks, max_id, max_weight, max_edges_per_bilayer
        );

        Ok(Self {
            order: ranks.to_vec(),
            pos,
            up,
            down,
            crossings,
            tree: Vec::new(),
            bilayer_scratch: Vec::new(),
            multiplier,
        })
    }

    fn neighbors(&self, side: Side) -> &RampTable<Neighbor> {
        match side {
            Side::Up => &self.up,
            Side::Down => &self.down,
        }
    }

    /// Index into `crossings` for the boundary between rank `a` and rank
    /// `b`, where `a` and `b` are adjacent. See module docs.
    fn boundary_index(a: usize, b: usize) -> usize {
        a.max(b)
    }

    /// C3: sums `crossings[1..]`, computing any still-unknown entries
    /// directly against the currently committed orders.
    fn total_crossings(&mut self) -> u64 {
        let mut sum = 0u64;
        for r in 1..self.order.len() {
            if self.crossings[r].is_none() {
                let neighbors = &self.up;
                let value = bilayer_crossings(
                    &self.order[r],
                    neighbors,
                    &self.pos,
                    &mut self.bilayer_scratch,
                    &mut self.tree,
                );
                self.crossings[r] = Some(value);
            }
            sum += self.crossings[r].unwrap();
        }
        sum
    }

    /// C5: evaluates `candidate` as a replacement order for rank `r`.
    /// Accepts (and commits) iff the north-side crossing count strictly
    /// decreases; the south side is scored too (when `r != last_rank`)
    /// but never vetoes the move, per spec.md §4.5.
    ///
    /// Returns 0 (rejected), 1 (accepted, combined total unchanged) or 2
    /// (accepted, combined total strictly lower).
    fn try_order(&mut self, r: usize, candidate: &[V], direction: Direction, last_rank: usize) -> u8 {
        let sign = direction.sign();
        let north_rank = (r as i64 - sign) as usize;
        let north_idx = Self::boundary_index(r, north_rank);
        let prev_north = self.crossings[north_idx].unwrap_or(u64::MAX);
        let new_north = {
            let neighbors = self.neighbors(direction.north_side());
            bilayer_crossings(candidate, neighbors, &self.pos, &mut self.bilayer_scratch, &mut self.tree)
        };

        if new_north >= prev_north {
            return 0;
        }

        let mut new_south = 0u64;
        let mut prev_south = 0u64;
        let mut south_idx = None;
        if r != last_rank {
            let south_rank = (r as i64 + sign) as usize;
            let idx = Self::boundary_index(r, south_rank);
            prev_south = self.crossings[idx].unwrap_or(u64::MAX);
            new_south = {
                let neighbors = self.neighbors(direction.south_side());
                bilayer_crossings(candidate, neighbors, &self.pos, &mut self.bilayer_scratch, &mut self.tree)
            };
            south_idx = Some(idx);
        }

        self.crossings[north_idx] = Some(new_north);
        if let Some(idx) = south_idx {
            self.crossings[idx] = Some(new_south);
        }
        self.order[r] = candidate.to_vec();
        for (p, &v) in candidate.iter().enumerate() {
            self.pos[v as usize] = p as u32;
        }

        debug!(
            "try_order: rank {} accepted, north {} -> {}, south {} -> {}",
            r, prev_north, new_north, prev_south, new_south
        );

        if new_north + new_south < prev_north + prev_south {
            2
        } else {
            1
        }
    }

    /// C6: recomputes weighted barycenters for rank `r` against its
    /// north neighbor rank, proposes a new order, and tries each minimal
    /// change range against C5 until a full pass makes no changes.
    /// Returns whether any change was accepted.
    fn sweep_rank(&mut self, r: usize, direction: Direction, last_rank: usize) -> bool {
        let sign = direction.sign();
        let north_rank = (r as i64 - sign) as usize;
        let north_idx = Self::boundary_index(r, north_rank);
        if self.crossings[north_idx] == Some(0) {
            return false;
        }

        let north_side = direction.north_side();
        let mut changed_any = false;

        loop {
            let order = self.order[r].clone();
            let mut means: Vec<(V, f64)> = Vec::with_capacity(order.len());
            {
                let neighbors = self.neighbors(north_side);
                for (p, &v) in order.iter().enumerate() {
                    let nbs = neighbors.entry_values(v as usize);
                    if nbs.is_empty() {
                        means.push((v, self.multiplier * p as f64 + p as f64));
                    } else {
                        let mut sum = 0f64;
                        let mut wsum = 0f64;
                        for nb in nbs {
                            sum += nb.weight as f64 * self.pos[nb.other as usize] as f64;
                            wsum += nb.weight as f64;
                        }
                        means.push((v, self.multiplier * sum / wsum + p as f64));
                    }
                }
            }
            means.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
            let proposed: Vec<V> = means.into_iter().map(|(v, _)| v).collect();

            let ranges = compute_change_ranges(&proposed, &self.pos);
            let mut changed = false;
            for range in &ranges {
                let mut candidate = order.clone();
                candidate[range.begin..=range.end].copy_from_slice(&proposed[range.begin..=range.end]);
                if self.try_order(r, &candidate, direction, last_rank) > 0 {
                    changed = true;
                }
            }

            if changed {
                changed_any = true;
            } else {
                break;
            }
        }

        changed_any
    }

    /// C7: alternates sweep direction, tracking the best total crossing
    /// count seen, and stops after two consecutive directional passes
    /// with no improvement.
    pub fn run(mut self) -> OptimizeReport {
        let num_ranks = self.order.len();
        if num_ranks < 2 {
            return OptimizeReport {
                orders: self.order,
                crossings: Vec::new(),
                total: 0,
            };
        }

        let mut direction = Direction::Down;
        let mut min_crossings = u64::MAX;
        let mut improve_counter: u32 = 2;
        let mut last_total = 0u64;

        while improve_counter > 0 {
            improve_counter -= 1;
            debug!("sweep pass, direction = {:?}", direction);

            let (first_rank, last_rank) = direction.bounds(num_ranks);
            let sign = direction.sign();
            let mut r = first_rank as i64;
            loop {
                self.sweep_rank(r as usize, direction, last_rank);
                if r as usize == last_rank {
                    break;
                }
                r += sign;
            }

            direction = direction.flip();
            last_total = self.total_crossings();
            debug!("total crossings after pass: {}", last_total);
            if last_total < min_crossings {
                min_crossings = last_total;
                improve_counter = 2;
            }
        }

        let crossings: Vec<u64> = self.crossings[1..].iter().map(|c| c.unwrap_or(0)).collect();
        OptimizeReport {
            orders: self.order,
            crossings,
            total: last_total,
        }
    }
}
