use serde::{Deserialize, Serialize};
use smartkart_core::{ItemId, PathKind, PathResult, StoreGraph};

use crate::search::{SearchResult, step_costs};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub routes: Vec<JsonRoute>,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub preferred_items: Vec<ItemId>,
    pub boost_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonRoute {
    pub kind: String,
    pub found: bool,
    /// `None` when the target is unreachable.
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonLocation>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonLocation {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub items: Vec<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_from_previous: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub locations_explored: usize,
}

fn kind_name(kind: PathKind) -> &'static str {
    match kind {
        PathKind::Shortest => "shortest",
        PathKind::Smart => "smart",
    }
}

fn create_json_route(route: &PathResult, store: &StoreGraph, result: &SearchResult) -> JsonRoute {
    let path = route.is_found().then(|| {
        let costs = step_costs(route, store, &result.display_options);
        route
            .path
            .iter()
            .zip(costs)
            .map(|(id, cost_from_previous)| {
                let location = store.location(id);
                JsonLocation {
                    id: id.clone(),
                    label: location.map(|l| l.label.clone()).unwrap_or_default(),
                    items: location.map(|l| l.items.clone()).unwrap_or_default(),
                    cost_from_previous,
                }
            })
            .collect::<Vec<_>>()
    });

    JsonRoute {
        kind: kind_name(route.kind).to_string(),
        found: route.is_found(),
        cost: route.cost.is_finite().then_some(route.cost),
        path,
    }
}

pub fn create_json_output(result: &SearchResult, store: &StoreGraph) -> JsonOutput {
    let args = &result.display_options;

    let routes = [&result.shortest, &result.smart]
        .into_iter()
        .flatten()
        .map(|route| create_json_route(route, store, result))
        .collect();

    JsonOutput {
        query: JsonQuery {
            from: result.from_name.clone(),
            to: result.to_name.clone(),
            options: JsonOptions {
                preferred_items: args.prefer.clone(),
                boost_factor: args.boost,
                timeout_ms: args.timeout_ms,
            },
        },
        routes,
        stats: JsonStats {
            search_time_ms: (result.search_duration() * 1000.0) as u64,
            locations_explored: result.locations_visited(),
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
