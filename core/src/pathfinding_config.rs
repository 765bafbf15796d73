use std::time::Duration;

/// Boost factor used when the caller does not pick one.
pub const DEFAULT_BOOST_FACTOR: f64 = 2.0;

/// Configuration for pathfinding queries
#[derive(Debug, Clone)]
pub struct PathfindingConfig {
    /// How much arriving at a location stocking a preferred item is discounted
    pub boost_factor: f64,
    /// Abort the search once it has run longer than this
    pub deadline: Option<Duration>,
}

impl PathfindingConfig {
    pub fn new(boost_factor: f64) -> Self {
        Self {
            boost_factor,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            boost_factor: DEFAULT_BOOST_FACTOR,
            deadline: None,
        }
    }
}
