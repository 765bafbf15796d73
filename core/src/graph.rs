use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{PathfindingError, Result};
use crate::pathfinding::{PathResult, smart_shortest_path};
use crate::pathfinding_config::PathfindingConfig;
use crate::string_normalization::clean_str;

/// Identifier of a location in the store (e.g. `"A4"`).
pub type LocationId = String;

/// Identifier of a product stocked at a location.
pub type ItemId = u64;

/// Weight given to a path when the caller does not supply one.
pub const DEFAULT_PATH_WEIGHT: f64 = 1.0;

/// A point in the store graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub label: String,
    /// Items available here. Duplicates are kept but only membership matters.
    pub items: Vec<ItemId>,
}

impl Location {
    fn empty(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: String::new(),
            items: Vec::new(),
        }
    }

    /// Whether any of this location's items is in `preferred`.
    pub fn stocks_any(&self, preferred: &FxHashSet<ItemId>) -> bool {
        self.items.iter().any(|item| preferred.contains(item))
    }
}

/// Undirected, weighted store graph.
///
/// Every path is recorded under both endpoints so `neighbors` is a single
/// map lookup. There is at most one weight per unordered pair.
#[derive(Debug, Clone, Default)]
pub struct StoreGraph {
    locations: FxHashMap<LocationId, Location>,
    adjacency: FxHashMap<LocationId, FxHashMap<LocationId, f64>>,
}

impl StoreGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location, replacing the label and items of an existing one.
    pub fn add_location(
        &mut self,
        id: impl Into<LocationId>,
        label: impl Into<String>,
        items: impl IntoIterator<Item = ItemId>,
    ) {
        let id = id.into();
        let location = Location {
            id: id.clone(),
            label: label.into(),
            items: items.into_iter().collect(),
        };
        self.locations.insert(id, location);
    }

    /// Insert or overwrite the path between `from` and `to`.
    ///
    /// Unknown endpoints are created with an empty label and no items.
    /// Negative weights are accepted here; only the solver rejects them.
    pub fn add_path(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(PathfindingError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        if from == to {
            return Err(PathfindingError::SelfLoop(from.to_string()));
        }

        self.ensure_location(from);
        self.ensure_location(to);

        let previous = self
            .adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
        self.adjacency
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string(), weight);

        if let Some(previous) = previous {
            trace!(from, to, previous, weight, "overwrote path weight");
        }
        Ok(())
    }

    /// `add_path` with [`DEFAULT_PATH_WEIGHT`].
    pub fn add_unit_path(&mut self, from: &str, to: &str) -> Result<()> {
        self.add_path(from, to, DEFAULT_PATH_WEIGHT)
    }

    fn ensure_location(&mut self, id: &str) {
        if !self.locations.contains_key(id) {
            self.locations.insert(id.to_string(), Location::empty(id));
        }
    }

    /// `(neighbor, weight)` for every path touching `id`. Empty for unknown ids.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&str, f64)> {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|links| links.iter().map(|(neighbor, &weight)| (neighbor.as_str(), weight)))
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Each unordered path once, as `(a, b, weight)` with `a < b`.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.adjacency.iter().flat_map(|(from, links)| {
            links
                .iter()
                .filter(move |(to, _)| from < *to)
                .map(move |(to, &weight)| (from.as_str(), to.as_str(), weight))
        })
    }

    pub fn path_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn path_count(&self) -> usize {
        self.adjacency.values().map(|links| links.len()).sum::<usize>() / 2
    }

    /// Resolve a user-typed query to a location: exact id first, then id
    /// ignoring case, then normalized label. Ties on label go to the
    /// smallest id.
    pub fn find_location(&self, query: &str) -> Option<&Location> {
        if let Some(location) = self.locations.get(query) {
            return Some(location);
        }

        let trimmed = query.trim();
        if let Some(location) = self
            .locations
            .values()
            .find(|location| location.id.eq_ignore_ascii_case(trimmed))
        {
            return Some(location);
        }

        let clean_query = clean_str(query);
        if clean_query.is_empty() {
            return None;
        }
        self.locations
            .values()
            .filter(|location| clean_str(&location.label) == clean_query)
            .min_by(|a, b| a.id.cmp(&b.id))
    }

    /// Minimum-distance route using base weights.
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<PathResult> {
        crate::pathfinding::shortest_path(self, source, target, &PathfindingConfig::default())
    }

    /// Route biased towards locations stocking any of `preferred_items`.
    pub fn smart_shortest_path(
        &self,
        source: &str,
        target: &str,
        preferred_items: &FxHashSet<ItemId>,
        boost_factor: f64,
    ) -> Result<PathResult> {
        let config = PathfindingConfig::new(boost_factor);
        smart_shortest_path(self, source, target, preferred_items, &config)
    }
}
