//! Store routing core: an undirected weighted store graph, a Dijkstra
//! solver, and a preferred-item bias that discounts arriving at locations
//! stocking items the shopper wants.

pub mod error;
pub mod graph;
pub mod layout;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{PathfindingError, Result};
pub use graph::{DEFAULT_PATH_WEIGHT, ItemId, Location, LocationId, StoreGraph};
pub use layout::{LocationSpec, PathSpec, StoreLayout};
pub use pathfinding::{
    PathKind, PathResult, PreferenceScores, SearchStats, adjusted_weight, shortest_path,
    shortest_path_with, smart_shortest_path,
};
pub use pathfinding_config::{DEFAULT_BOOST_FACTOR, PathfindingConfig};
