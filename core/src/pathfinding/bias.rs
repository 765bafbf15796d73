use super::dijkstra::run_search;
use super::utils::{PathKind, PathResult};
use crate::error::{PathfindingError, Result};
use crate::graph::{ItemId, StoreGraph};
use crate::pathfinding_config::PathfindingConfig;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Per-request overlay marking which locations stock a preferred item.
///
/// Built fresh for every biased query and never written back to the graph,
/// so concurrent queries with different preferences do not interact.
#[derive(Debug, Clone, Default)]
pub struct PreferenceScores {
    scores: FxHashMap<String, u8>,
}

impl PreferenceScores {
    pub fn compute(graph: &StoreGraph, preferred_items: &FxHashSet<ItemId>) -> Self {
        let scores = graph
            .locations()
            .map(|location| (location.id.clone(), u8::from(location.stocks_any(preferred_items))))
            .collect();
        Self { scores }
    }

    /// 1 if the location stocks a preferred item, otherwise 0.
    pub fn score(&self, location: &str) -> u8 {
        self.scores.get(location).copied().unwrap_or(0)
    }

    pub fn preferred_count(&self) -> usize {
        self.scores.values().filter(|&&score| score == 1).count()
    }
}

/// Cost of arriving at a location with `destination_score`, never below zero.
pub fn adjusted_weight(base_weight: f64, boost_factor: f64, destination_score: u8) -> f64 {
    (base_weight - boost_factor * f64::from(destination_score)).max(0.0)
}

/// Route that favors passing through locations stocking `preferred_items`.
///
/// Each hop `u -> v` costs `max(0, base - boost * score(v))`, so the discount
/// depends only on where the hop lands. The reported cost is the sum of
/// those adjusted weights, not the walking distance.
pub fn smart_shortest_path(
    graph: &StoreGraph,
    source: &str,
    target: &str,
    preferred_items: &FxHashSet<ItemId>,
    config: &PathfindingConfig,
) -> Result<PathResult> {
    let boost_factor = config.boost_factor;
    if !boost_factor.is_finite() || boost_factor < 0.0 {
        return Err(PathfindingError::InvalidBoost(boost_factor));
    }

    let scores = PreferenceScores::compute(graph, preferred_items);
    debug!(
        preferred_items = preferred_items.len(),
        preferred_locations = scores.preferred_count(),
        boost_factor,
        "scored locations"
    );

    run_search(
        graph,
        source,
        target,
        PathKind::Smart,
        |_, to, base_weight| adjusted_weight(base_weight, boost_factor, scores.score(to)),
        config,
    )
}
