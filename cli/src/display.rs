use rustc_hash::FxHashSet;
use smartkart_core::{ItemId, PathKind, PathResult, StoreGraph};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult, display_name, step_costs};
use crate::utils::{format_cost, format_number};

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    let args = &request.search_args;

    println!(
        "🛒 Finding route from {} to {}",
        colors.location_name(&format!("\"{}\"", request.from_name)),
        colors.location_name(&format!("\"{}\"", request.to_name))
    );

    if args.wants_smart_route() {
        let items = args
            .prefer
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "⭐ Favoring locations with items {} (boost {})",
            colors.preferred(&items),
            colors.number(&format!("{:.2}", args.boost))
        );
    } else {
        println!("⚙️  Using plain shortest route (Dijkstra)");
    }

    if let Some(ms) = args.timeout_ms {
        println!("⏱️  Giving up after {} ms", colors.number(&ms.to_string()));
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: &SearchResult, store: &StoreGraph, colors: &ColorScheme) {
    let options = &result.display_options;

    if options.verbose {
        println!("\n---\n");
    }

    let routes: Vec<&PathResult> = [&result.shortest, &result.smart]
        .into_iter()
        .flatten()
        .collect();
    let show_headings = routes.len() > 1;

    for (index, route) in routes.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        if show_headings {
            println!("{}", route_heading(route.kind));
        }
        display_route(route, result, store, colors);
    }

    if options.verbose {
        display_search_statistics(result.locations_visited(), result.search_duration(), colors);
    }
}

fn route_heading(kind: PathKind) -> &'static str {
    match kind {
        PathKind::Shortest => "📏 Shortest route",
        PathKind::Smart => "⭐ Smart route",
    }
}

fn display_route(
    route: &PathResult,
    result: &SearchResult,
    store: &StoreGraph,
    colors: &ColorScheme,
) {
    if !route.is_found() {
        println!(
            "{} {} and {}",
            colors.error("❌ No route found between"),
            colors.location_name(&format!("\"{}\"", result.from_name)),
            colors.location_name(&format!("\"{}\"", result.to_name))
        );
        return;
    }

    let options = &result.display_options;
    let cost_label = match route.kind {
        PathKind::Shortest => "distance",
        PathKind::Smart => "smart cost",
    };

    if options.verbose {
        println!(
            "{} Found route with {} steps ({} {}):\n",
            colors.success("✅"),
            colors.number(&route.hop_count().to_string()),
            cost_label,
            colors.number(&format_cost(route.cost))
        );
    }

    let route_flow = route
        .path
        .iter()
        .map(|id| {
            colors
                .location_name(&format!("\"{}\"", display_name(store, id)))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", route_flow);

    if options.quiet {
        return;
    }

    if !options.verbose {
        println!("{}: {}", cost_label, colors.number(&format_cost(route.cost)));
    }

    println!();
    let preferred = options.preferred_items();
    let costs = step_costs(route, store, options);
    for (step_index, (id, step_cost)) in route.path.iter().zip(costs).enumerate() {
        let step_number = format!("{}.", step_index + 1);
        let formatted_line =
            format_route_step(&step_number, id, step_cost, store, &preferred, options, colors);
        println!("{}", formatted_line);
    }
}

fn format_route_step(
    step_number: &str,
    id: &str,
    step_cost: Option<f64>,
    store: &StoreGraph,
    preferred: &FxHashSet<ItemId>,
    display_options: &Args,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:3} {} ({})",
        colors.step_number(step_number),
        colors.location_name(&format!("\"{}\"", display_name(store, id))),
        colors.location_id(id)
    );

    if let Some(cost) = step_cost {
        formatted_line.push_str(&format!(" +{}", colors.number(&format!("{:.2}", cost))));
    }

    let location = store.location(id);
    if display_options.show_items {
        if let Some(location) = location.filter(|location| !location.items.is_empty()) {
            let items = location
                .items
                .iter()
                .map(|item| {
                    if preferred.contains(item) {
                        colors.preferred(&format!("{}★", item)).to_string()
                    } else {
                        item.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            formatted_line.push_str(&format!(" [items: {}]", items));
        }
    } else if location.is_some_and(|location| location.stocks_any(preferred)) {
        formatted_line.push_str(&format!(" {}", colors.preferred("★")));
    }

    formatted_line
}

fn display_search_statistics(locations_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} locations in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(locations_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
