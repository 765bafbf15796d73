use clap::Parser;
use rustc_hash::FxHashSet;
use smartkart_core::{DEFAULT_BOOST_FACTOR, ItemId, PathfindingConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "smartkart")]
#[command(about = "Find a route through a store, optionally favoring locations with the items you want")]
pub struct Args {
    /// Store layout JSON file
    pub layout: PathBuf,

    /// Start location (id or label)
    pub from: String,

    /// Destination location (id or label)
    pub to: String,

    /// Preferred item ids; enables the smart route (comma separated or repeated)
    #[arg(short = 'p', long = "prefer", value_name = "ITEM", value_delimiter = ',')]
    pub prefer: Vec<ItemId>,

    /// How much arriving at a location with a preferred item is discounted
    #[arg(short = 'b', long, value_name = "FACTOR", default_value_t = DEFAULT_BOOST_FACTOR)]
    pub boost: f64,

    /// Also show the plain shortest route next to the smart one
    #[arg(short = 'c', long)]
    pub compare: bool,

    /// Give up on a search after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Show the items stocked at each location on the route
    #[arg(short = 'i', long)]
    pub show_items: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the route flow
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn preferred_items(&self) -> FxHashSet<ItemId> {
        self.prefer.iter().copied().collect()
    }

    pub fn wants_smart_route(&self) -> bool {
        !self.prefer.is_empty()
    }

    pub fn wants_shortest_route(&self) -> bool {
        !self.wants_smart_route() || self.compare
    }

    pub fn pathfinding_config(&self) -> PathfindingConfig {
        let config = PathfindingConfig::new(self.boost);
        match self.timeout_ms {
            Some(ms) => config.with_deadline(Duration::from_millis(ms)),
            None => config,
        }
    }
}
