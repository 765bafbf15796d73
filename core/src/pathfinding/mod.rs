pub mod bias;
pub mod dijkstra;
pub mod utils;

// Re-export the public functions
pub use bias::{PreferenceScores, adjusted_weight, smart_shortest_path};
pub use dijkstra::{shortest_path, shortest_path_with};
pub use utils::{PathKind, PathResult, SearchStats};
