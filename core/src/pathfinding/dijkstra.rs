use super::utils::{PathKind, PathResult, SearchStats, reconstruct_path};
use crate::error::{PathfindingError, Result};
use crate::graph::{LocationId, StoreGraph};
use crate::pathfinding_config::PathfindingConfig;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};
use tracing::{debug, warn};

#[derive(Clone)]
struct DijkstraNode {
    cost: f64,
    location: LocationId,
}

impl PartialEq for DijkstraNode {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for DijkstraNode {}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        // Costs are never NaN: traversal costs are checked before they are pushed.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

struct DijkstraState {
    heap: BinaryHeap<DijkstraNode>,
    distances: FxHashMap<LocationId, f64>,
    parent_map: FxHashMap<LocationId, LocationId>,
    visited: FxHashSet<LocationId>,
}

impl DijkstraState {
    fn new(start: &str) -> Self {
        let mut heap = BinaryHeap::new();
        let mut distances = FxHashMap::default();

        heap.push(DijkstraNode {
            cost: 0.0,
            location: start.to_string(),
        });
        distances.insert(start.to_string(), 0.0);

        Self {
            heap,
            distances,
            parent_map: FxHashMap::default(),
            visited: FxHashSet::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: &str, current: &str, edge_cost: f64, current_cost: f64) {
        let new_cost = current_cost + edge_cost;

        if let Some(&existing_cost) = self.distances.get(neighbor) {
            if new_cost >= existing_cost {
                return;
            }
        }

        self.distances.insert(neighbor.to_string(), new_cost);
        self.parent_map
            .insert(neighbor.to_string(), current.to_string());
        self.heap.push(DijkstraNode {
            cost: new_cost,
            location: neighbor.to_string(),
        });
    }

    fn stats(&self, search_timer: Instant) -> SearchStats {
        SearchStats {
            locations_visited: self.visited.len(),
            duration: search_timer.elapsed(),
        }
    }
}

/// Minimum-distance route over base path weights.
pub fn shortest_path(
    graph: &StoreGraph,
    source: &str,
    target: &str,
    config: &PathfindingConfig,
) -> Result<PathResult> {
    shortest_path_with(graph, source, target, |_, _, weight| weight, config)
}

/// Dijkstra over the directed traversal costs produced by `weight_fn`.
///
/// `weight_fn(from, to, base_weight)` is evaluated each time the search
/// examines the hop `from -> to`, so it may treat the two directions of a
/// path differently. It must never return a negative or NaN cost; if it
/// does the search stops with [`PathfindingError::NegativeWeight`].
///
/// Among equal-cost routes the one returned depends on expansion order.
pub fn shortest_path_with<F>(
    graph: &StoreGraph,
    source: &str,
    target: &str,
    weight_fn: F,
    config: &PathfindingConfig,
) -> Result<PathResult>
where
    F: Fn(&str, &str, f64) -> f64,
{
    run_search(graph, source, target, PathKind::Shortest, weight_fn, config)
}

pub(crate) fn run_search<F>(
    graph: &StoreGraph,
    source: &str,
    target: &str,
    kind: PathKind,
    weight_fn: F,
    config: &PathfindingConfig,
) -> Result<PathResult>
where
    F: Fn(&str, &str, f64) -> f64,
{
    for endpoint in [source, target] {
        if !graph.contains(endpoint) {
            return Err(PathfindingError::NodeNotFound(endpoint.to_string()));
        }
    }

    let search_timer = Instant::now();
    debug!(source, target, ?kind, "starting search");

    let mut dijkstra_state = DijkstraState::new(source);

    while let Some(DijkstraNode {
        cost,
        location: current,
    }) = dijkstra_state.heap.pop()
    {
        if current == target {
            let path = reconstruct_path(&dijkstra_state.parent_map, source, target);
            let stats = dijkstra_state.stats(search_timer);
            debug!(
                hops = path.len() - 1,
                cost,
                visited = stats.locations_visited,
                "route found"
            );
            return Ok(PathResult::found(kind, path, cost, stats));
        }

        if dijkstra_state.visited.contains(&current) {
            continue;
        }

        if let Some(deadline) = config.deadline {
            let elapsed = search_timer.elapsed();
            if elapsed >= deadline {
                warn!(source, target, ?elapsed, "search deadline exceeded");
                return Err(PathfindingError::DeadlineExceeded { elapsed });
            }
        }

        dijkstra_state.visited.insert(current.clone());

        for (neighbor, base_weight) in graph.neighbors(&current) {
            if dijkstra_state.visited.contains(neighbor) {
                continue;
            }

            let edge_cost = weight_fn(current.as_str(), neighbor, base_weight);
            if edge_cost.is_nan() || edge_cost < 0.0 {
                return Err(PathfindingError::NegativeWeight {
                    from: current.clone(),
                    to: neighbor.to_string(),
                    weight: edge_cost,
                });
            }

            dijkstra_state.visit_neighbor(neighbor, &current, edge_cost, cost);
        }
    }

    let stats = dijkstra_state.stats(search_timer);
    debug!(visited = stats.locations_visited, "no route");
    Ok(PathResult::no_path(kind, stats))
}
