use super::*;

// --- parse_measurement ---

#[test]
fn parses_plain_numbers() {
    assert_eq!(parse_measurement("255"), 255.0);
    assert_eq!(parse_measurement("10.5"), 10.5);
    assert_eq!(parse_measurement("-2"), -2.0);
}

#[test]
fn empty_and_garbage_fall_back_to_zero() {
    assert_eq!(parse_measurement(""), 0.0);
    assert_eq!(parse_measurement("   "), 0.0);
    assert_eq!(parse_measurement("abc"), 0.0);
    assert_eq!(parse_measurement("-"), 0.0);
    assert_eq!(parse_measurement("."), 0.0);
}

#[test]
fn takes_leading_numeric_prefix() {
    assert_eq!(parse_measurement("10.5in"), 10.5);
    assert_eq!(parse_measurement("  3.5 inches"), 3.5);
    assert_eq!(parse_measurement("12,7"), 12.0);
    assert_eq!(parse_measurement("1.2.3"), 1.2);
}

#[test]
fn accepts_partial_decimals_and_exponents() {
    assert_eq!(parse_measurement(".5"), 0.5);
    assert_eq!(parse_measurement("5."), 5.0);
    assert_eq!(parse_measurement("+7"), 7.0);
    assert_eq!(parse_measurement("2.5e1"), 25.0);
    assert_eq!(parse_measurement("3e"), 3.0);
}

#[test]
fn overflow_counts_as_zero() {
    assert_eq!(parse_measurement("1e400"), 0.0);
}

#[test]
fn word_literals_are_not_numbers() {
    assert_eq!(parse_measurement("NaN"), 0.0);
    assert_eq!(parse_measurement("inf"), 0.0);
}

// --- parse_bolt_pattern ---

#[test]
fn parses_common_pcd_notations() {
    let expected = BoltPattern {
        holes: 5,
        pcd_mm: 112.0,
    };
    assert_eq!(parse_bolt_pattern("5x112"), Ok(expected));
    assert_eq!(parse_bolt_pattern("5 X 112"), Ok(expected));
    assert_eq!(parse_bolt_pattern("5/112"), Ok(expected));
    assert_eq!(parse_bolt_pattern(" 5x112mm "), Ok(expected));
}

#[test]
fn parses_fractional_diameter() {
    let pattern = parse_bolt_pattern("6x139.7").unwrap();
    assert_eq!(pattern.holes, 6);
    assert_eq!(pattern.pcd_mm, 139.7);
    assert_eq!(pattern.to_string(), "6 holes on 139.7 mm PCD");
}

#[test]
fn rejects_empty_pcd() {
    assert_eq!(parse_bolt_pattern("  "), Err(BoltPatternError::Empty));
}

#[test]
fn rejects_zero_holes() {
    assert_eq!(parse_bolt_pattern("0x100"), Err(BoltPatternError::ZeroHoles));
}

#[test]
fn rejects_zero_diameter() {
    assert_eq!(
        parse_bolt_pattern("5x0"),
        Err(BoltPatternError::InvalidDiameter)
    );
}

#[test]
fn rejects_free_text() {
    let err = parse_bolt_pattern("five on one-twelve").unwrap_err();
    assert!(matches!(err, BoltPatternError::InvalidFormat(_)));
    assert!(err.to_string().contains("5x112"));
}
