use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use thiserror::Error;

use crate::graph::{GraphStore, Location};

/// A minimum-weight route, `start` and `end` inclusive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub locations: Vec<Location>,
    pub cost: f64,
}

impl Route {
    pub fn hops(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Unknown location: '{0}'")]
    UnknownLocation(String),
    #[error("No path exists between '{start}' and '{end}'")]
    NoPathExists { start: String, end: String },
}

/// Frontier entry. `seq` is the push counter, so equal costs pop FIFO.
#[derive(Copy, Clone, Debug)]
struct State {
    cost: f64,
    node: usize,
    seq: u64,
}

// Min-heap by cost, then by insertion order (reversed for BinaryHeap)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Compute a minimum-weight path from `start` to `end`
///
/// Both names are checked before any search runs. When several routes tie on
/// cost the result is fixed by the graph's edge insertion order: neighbours
/// are relaxed in that order, a predecessor is only replaced by a strictly
/// cheaper one, and equal-cost frontier entries are finalized first-in
/// first-out.
///
/// # Errors
/// * `UnknownLocation` - `start` or `end` is not a vertex (start is checked first)
/// * `NoPathExists` - both exist but lie in different components
pub fn find_path(graph: &GraphStore, start: &str, end: &str) -> Result<Route, PathError> {
    let start_idx = graph
        .index_of(start)
        .ok_or_else(|| PathError::UnknownLocation(start.to_string()))?;
    let end_idx = graph
        .index_of(end)
        .ok_or_else(|| PathError::UnknownLocation(end.to_string()))?;

    if start_idx == end_idx {
        return Ok(Route {
            locations: vec![start.to_string()],
            cost: 0.0,
        });
    }

    let n = graph.location_count();
    // None marks an unreached vertex; a summed cost may overflow to infinity
    let mut distances: Vec<Option<f64>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut seq: u64 = 0;

    distances[start_idx] = Some(0.0);
    heap.push(State {
        cost: 0.0,
        node: start_idx,
        seq,
    });

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Stale entry left behind by a later, cheaper relaxation
        if settled[node] {
            continue;
        }
        settled[node] = true;

        if node == end_idx {
            tracing::trace!("Settled '{}' at cost {}", end, cost);
            return Ok(reconstruct(graph, &predecessors, end_idx, cost));
        }

        for &(next, weight) in graph.adjacent(node) {
            if settled[next] {
                continue;
            }
            let next_cost = cost + weight;
            if distances[next].is_none_or(|best| next_cost < best) {
                distances[next] = Some(next_cost);
                predecessors[next] = Some(node);
                seq += 1;
                heap.push(State {
                    cost: next_cost,
                    node: next,
                    seq,
                });
            }
        }
    }

    tracing::debug!("Frontier exhausted before reaching '{}' from '{}'", end, start);
    Err(PathError::NoPathExists {
        start: start.to_string(),
        end: end.to_string(),
    })
}

fn reconstruct(
    graph: &GraphStore,
    predecessors: &[Option<usize>],
    end_idx: usize,
    cost: f64,
) -> Route {
    let mut locations = vec![graph.name_of(end_idx).to_string()];
    let mut current = end_idx;
    // The start vertex is the only reached vertex without a predecessor
    while let Some(prev) = predecessors[current] {
        locations.push(graph.name_of(prev).to_string());
        current = prev;
    }
    locations.reverse();
    Route { locations, cost }
}
