use crate::graph::LocationId;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::time::Duration;

/// Which query produced a [`PathResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Shortest,
    Smart,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    pub locations_visited: usize,
    pub duration: Duration,
}

/// Outcome of a route query.
///
/// An unreachable target is a normal result: `path` is empty and `cost` is
/// `f64::INFINITY`. A partial path is never returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub kind: PathKind,
    pub path: Vec<LocationId>,
    /// Sum of the weights the search used: base weights for
    /// [`PathKind::Shortest`], adjusted weights for [`PathKind::Smart`].
    pub cost: f64,
    pub stats: SearchStats,
}

impl PathResult {
    pub fn found(kind: PathKind, path: Vec<LocationId>, cost: f64, stats: SearchStats) -> Self {
        Self {
            kind,
            path,
            cost,
            stats,
        }
    }

    pub fn no_path(kind: PathKind, stats: SearchStats) -> Self {
        Self {
            kind,
            path: Vec::new(),
            cost: f64::INFINITY,
            stats,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of paths walked, zero when source and target coincide or
    /// nothing was found.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

pub fn reconstruct_path(
    parent_map: &FxHashMap<LocationId, LocationId>,
    start: &str,
    target: &str,
) -> Vec<LocationId> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        path.push(current_node.to_string());
        current_node = parent_map[current_node].as_str();
    }

    path.push(start.to_string());
    path.reverse();
    path
}
