use smartkart::{format_cost, format_number};

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(1234567), "1,234,567");
}

#[test]
fn test_format_cost() {
    assert_eq!(format_cost(10.0), "10.00");
    assert_eq!(format_cost(0.5), "0.50");
    assert_eq!(format_cost(f64::INFINITY), "∞");
}
