#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{load_sample_store, parse_args, write_layout};
use smartkart::search::{resolve_location, step_costs};
use smartkart::{SmartKartApp, create_search_request, execute_search};
use smartkart_core::{PathKind, PathfindingError};

#[test]
fn test_resolve_location_by_label_or_id() {
    let (_file, store) = load_sample_store();

    assert_eq!(resolve_location("A3", &store).unwrap(), "A3");
    assert_eq!(resolve_location("dairy", &store).unwrap(), "A4");
    assert!(
        resolve_location("Bakery", &store)
            .unwrap_err()
            .contains("Bakery")
    );
}

#[test]
fn test_plain_search_without_preferences() {
    let (file, store) = load_sample_store();
    let args = parse_args(&file, &["entrance", "exit"]);

    let request = create_search_request(args, &store).unwrap();
    assert_eq!(request.from_name, "Entrance");
    assert_eq!(request.to_name, "Exit");

    let result = execute_search(request, &store).unwrap();
    assert!(result.smart.is_none());

    let shortest = result.shortest.unwrap();
    assert_eq!(shortest.kind, PathKind::Shortest);
    assert_eq!(shortest.path, vec!["A1", "A2", "A3", "A4", "A5"]);
    assert_eq!(shortest.cost, 10.0);
}

#[test]
fn test_smart_search_with_compare() {
    let (file, store) = load_sample_store();
    let args = parse_args(&file, &["A1", "A5", "--prefer", "303,505", "--compare"]);

    let request = create_search_request(args, &store).unwrap();
    let result = execute_search(request, &store).unwrap();

    assert_eq!(result.shortest.as_ref().unwrap().cost, 10.0);
    let smart = result.smart.as_ref().unwrap();
    assert_eq!(smart.kind, PathKind::Smart);
    assert_eq!(smart.cost, 6.0);
    assert!(result.locations_visited() > 0);
}

#[test]
fn test_smart_search_alone_skips_plain_route() {
    let (file, store) = load_sample_store();
    let args = parse_args(&file, &["A1", "A5", "-p", "303", "-p", "505", "-b", "1.5"]);
    assert_eq!(args.prefer, vec![303, 505]);

    let request = create_search_request(args, &store).unwrap();
    let result = execute_search(request, &store).unwrap();

    assert!(result.shortest.is_none());
    // 2 + 1.5 + 1.5 + 2
    assert_eq!(result.smart.unwrap().cost, 7.0);
}

#[test]
fn test_step_costs_follow_route_kind() {
    let (file, store) = load_sample_store();
    let args = parse_args(&file, &["A1", "A5", "-p", "303,505", "-c"]);

    let request = create_search_request(args, &store).unwrap();
    let result = execute_search(request, &store).unwrap();
    let options = &result.display_options;

    let plain_costs = step_costs(result.shortest.as_ref().unwrap(), &store, options);
    assert_eq!(
        plain_costs,
        vec![None, Some(2.0), Some(3.0), Some(3.0), Some(2.0)]
    );

    let smart_costs = step_costs(result.smart.as_ref().unwrap(), &store, options);
    assert_eq!(
        smart_costs,
        vec![None, Some(2.0), Some(1.0), Some(1.0), Some(2.0)]
    );
}

#[test]
fn test_unreachable_destination_is_reported_as_no_route() {
    let (file, store) = load_sample_store();
    let args = parse_args(&file, &["A1", "Stockroom"]);

    let request = create_search_request(args, &store).unwrap();
    let result = execute_search(request, &store).unwrap();
    let shortest = result.shortest.unwrap();

    assert!(!shortest.is_found());
    assert_eq!(shortest.cost, f64::INFINITY);
    assert!(step_costs(&shortest, &store, &result.display_options).is_empty());
}

#[test]
fn test_negative_boost_is_an_error() {
    let (file, store) = load_sample_store();
    let args = parse_args(&file, &["A1", "A5", "-p", "303", "--boost=-1"]);

    let request = create_search_request(args, &store).unwrap();

    assert!(matches!(
        execute_search(request, &store),
        Err(PathfindingError::InvalidBoost(_))
    ));
}

#[test]
fn test_missing_layout_file() {
    let error = SmartKartApp::new("/nonexistent/layout.json".into()).err().unwrap();
    assert!(error.to_string().contains("does not exist"));
}

#[test]
fn test_malformed_layout_file() {
    let file = write_layout(r#"{"locations": [{"label": "no id"}]}"#);
    let app = SmartKartApp::new(file.path().to_path_buf()).unwrap();

    let error = app.load_store().err().unwrap();
    assert!(error.to_string().contains("Invalid layout file"));
}

#[test]
fn test_layout_with_bad_weight_fails_to_build() {
    let file = write_layout(r#"{"paths": [{"from": "A", "to": "A", "weight": 1}]}"#);
    let app = SmartKartApp::new(file.path().to_path_buf()).unwrap();

    let error = app.load_store().err().unwrap();
    assert_eq!(
        error.to_string(),
        PathfindingError::SelfLoop("A".to_string()).to_string()
    );
}
