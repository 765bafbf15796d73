use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{DEFAULT_PATH_WEIGHT, ItemId, LocationId, StoreGraph};

/// Store layout as supplied by a catalog/dataset provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreLayout {
    #[serde(default)]
    pub locations: Vec<LocationSpec>,
    #[serde(default)]
    pub paths: Vec<PathSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSpec {
    pub id: LocationId,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub items: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    pub from: LocationId,
    pub to: LocationId,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_PATH_WEIGHT
}

impl StoreLayout {
    /// Build a graph: all locations first, then paths in declaration order.
    pub fn build(&self) -> Result<StoreGraph> {
        let mut graph = StoreGraph::new();

        for location in &self.locations {
            graph.add_location(
                location.id.clone(),
                location.label.clone(),
                location.items.iter().copied(),
            );
        }

        for path in &self.paths {
            graph.add_path(&path.from, &path.to, path.weight)?;
        }

        Ok(graph)
    }
}
