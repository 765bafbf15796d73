use smartkart::colors::ColorScheme;

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    // With colors disabled, output should be plain text
    assert_eq!(colors.location_name("Dairy").to_string(), "Dairy");
    assert_eq!(colors.location_id("A4").to_string(), "A4");
    assert_eq!(colors.preferred("505★").to_string(), "505★");
    assert_eq!(colors.success("Success").to_string(), "Success");
    assert_eq!(colors.error("Error").to_string(), "Error");
    assert_eq!(colors.step_number("1.").to_string(), "1.");
    assert_eq!(colors.number("10.00").to_string(), "10.00");
    assert_eq!(colors.stats("Stats").to_string(), "Stats");
}
