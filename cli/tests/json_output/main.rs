#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{load_sample_store, parse_args};
use serde_json::Value;
use smartkart::json_output::create_json_output;
use smartkart::{create_search_request, execute_search};

#[test]
fn test_json_output_with_both_routes() {
    let (file, store) = load_sample_store();
    let args = parse_args(&file, &["A1", "A5", "-p", "303,505", "-c", "--json"]);

    let request = create_search_request(args, &store).unwrap();
    let result = execute_search(request, &store).unwrap();
    let json_output = create_json_output(&result, &store);
    let value: Value = serde_json::to_value(&json_output).unwrap();

    assert_eq!(value["query"]["from"], "Entrance");
    assert_eq!(value["query"]["to"], "Exit");
    assert_eq!(value["query"]["options"]["preferred_items"], serde_json::json!([303, 505]));
    assert_eq!(value["query"]["options"]["boost_factor"], 2.0);
    assert!(value["query"]["options"].get("timeout_ms").is_none());

    let routes = value["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["kind"], "shortest");
    assert_eq!(routes[0]["cost"], 10.0);
    assert_eq!(routes[1]["kind"], "smart");
    assert_eq!(routes[1]["cost"], 6.0);

    let smart_path = routes[1]["path"].as_array().unwrap();
    assert_eq!(smart_path.len(), 5);
    assert_eq!(smart_path[0]["id"], "A1");
    assert!(smart_path[0].get("cost_from_previous").is_none());
    assert!(smart_path[0].get("items").is_none());
    assert_eq!(smart_path[2]["label"], "Drinks");
    assert_eq!(smart_path[2]["items"], serde_json::json!([303]));
    assert_eq!(smart_path[2]["cost_from_previous"], 1.0);
}

#[test]
fn test_json_output_no_route() {
    let (file, store) = load_sample_store();
    let args = parse_args(&file, &["A1", "B1", "--json", "--timeout-ms", "5000"]);

    let request = create_search_request(args, &store).unwrap();
    let result = execute_search(request, &store).unwrap();
    let json_output = create_json_output(&result, &store);

    assert_eq!(json_output.routes.len(), 1);
    assert!(!json_output.routes[0].found);
    assert!(json_output.routes[0].cost.is_none());
    assert!(json_output.routes[0].path.is_none());
    assert_eq!(json_output.query.options.timeout_ms, Some(5000));

    let json_string = serde_json::to_string(&json_output).unwrap();
    assert!(json_string.contains(r#""cost":null"#));
    assert!(!json_string.contains(r#""path""#));
}
