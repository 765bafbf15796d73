use rustc_hash::FxHashSet;
use smartkart_core::{ItemId, StoreGraph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = StoreGraph::new();

    store.add_location("A1", "Entrance", []);
    store.add_location("A2", "Snacks", [101, 202]);
    store.add_location("A3", "Drinks", [303]);
    store.add_location("A4", "Dairy", [404, 505]);
    store.add_location("A5", "Exit", []);

    store.add_path("A1", "A2", 2.0)?;
    store.add_path("A2", "A3", 3.0)?;
    store.add_path("A3", "A4", 3.0)?;
    store.add_path("A4", "A5", 2.0)?;
    store.add_path("A2", "A4", 6.0)?;

    let plain = store.shortest_path("A1", "A5")?;
    println!("Shortest path: {} (distance {})", plain.path.join(" → "), plain.cost);

    let recommended: FxHashSet<ItemId> = [202, 303, 505].into_iter().collect();
    let smart = store.smart_shortest_path("A1", "A5", &recommended, 2.0)?;
    println!("Smart path: {} (smart cost {})", smart.path.join(" → "), smart.cost);

    Ok(())
}
