use smartkart_core::{
    LocationId, PathKind, PathResult, PathfindingError, StoreGraph, adjusted_weight,
    shortest_path, smart_shortest_path,
};

use crate::args::Args;

pub struct SearchRequest {
    pub from_location: LocationId,
    pub to_location: LocationId,
    pub from_name: String,
    pub to_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub shortest: Option<PathResult>,
    pub smart: Option<PathResult>,
    pub from_name: String,
    pub to_name: String,
    pub display_options: Args,
}

impl SearchResult {
    pub fn locations_visited(&self) -> usize {
        [&self.shortest, &self.smart]
            .into_iter()
            .flatten()
            .map(|result| result.stats.locations_visited)
            .sum()
    }

    pub fn search_duration(&self) -> f64 {
        [&self.shortest, &self.smart]
            .into_iter()
            .flatten()
            .map(|result| result.stats.duration.as_secs_f64())
            .sum()
    }
}

/// Name shown to the user: the label if there is one, otherwise the id.
pub fn display_name(store: &StoreGraph, id: &str) -> String {
    match store.location(id) {
        Some(location) if !location.label.is_empty() => location.label.clone(),
        _ => id.to_string(),
    }
}

pub fn resolve_location(query: &str, store: &StoreGraph) -> Result<LocationId, String> {
    store
        .find_location(query)
        .map(|location| location.id.clone())
        .ok_or_else(|| format!("Location '{}' not found in store layout", query))
}

pub fn create_search_request(args: Args, store: &StoreGraph) -> Result<SearchRequest, String> {
    let from_location = resolve_location(&args.from, store)?;
    let to_location = resolve_location(&args.to, store)?;

    let from_name = display_name(store, &from_location);
    let to_name = display_name(store, &to_location);

    Ok(SearchRequest {
        from_location,
        to_location,
        from_name,
        to_name,
        search_args: args,
    })
}

pub fn execute_search(
    request: SearchRequest,
    store: &StoreGraph,
) -> Result<SearchResult, PathfindingError> {
    let args = &request.search_args;
    let config = args.pathfinding_config();

    let shortest = if args.wants_shortest_route() {
        Some(shortest_path(
            store,
            &request.from_location,
            &request.to_location,
            &config,
        )?)
    } else {
        None
    };

    let smart = if args.wants_smart_route() {
        Some(smart_shortest_path(
            store,
            &request.from_location,
            &request.to_location,
            &args.preferred_items(),
            &config,
        )?)
    } else {
        None
    };

    Ok(SearchResult {
        shortest,
        smart,
        from_name: request.from_name,
        to_name: request.to_name,
        display_options: request.search_args,
    })
}

/// Cost of each hop on a route as the search saw it: `None` for the first
/// location, base weight for shortest routes, adjusted weight for smart ones.
pub fn step_costs(result: &PathResult, store: &StoreGraph, args: &Args) -> Vec<Option<f64>> {
    let preferred = args.preferred_items();

    let mut costs = Vec::with_capacity(result.path.len());
    costs.push(None);
    for hop in result.path.windows(2) {
        let base_weight = store.path_weight(&hop[0], &hop[1]).unwrap_or(0.0);
        let cost = match result.kind {
            PathKind::Shortest => base_weight,
            PathKind::Smart => {
                let score = store
                    .location(&hop[1])
                    .map(|location| u8::from(location.stocks_any(&preferred)))
                    .unwrap_or(0);
                adjusted_weight(base_weight, args.boost, score)
            }
        };
        costs.push(Some(cost));
    }

    costs.truncate(result.path.len());
    costs
}
