use super::*;

#[test]
fn whole_numbers_pass_through() {
    assert_eq!(parse_size("200", SizeField::Width), 200);
    assert_eq!(parse_size("150", SizeField::Height), 150);
}

#[test]
fn fractions_are_floored() {
    assert_eq!(parse_size("120.9", SizeField::Width), 120);
    assert_eq!(parse_size("60.99", SizeField::Height), 60);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_size("  300 \t", SizeField::Width), 300);
}

#[test]
fn empty_input_yields_minimum() {
    assert_eq!(parse_size("", SizeField::Width), 80);
    assert_eq!(parse_size("   ", SizeField::Height), 60);
}

#[test]
fn garbage_yields_minimum() {
    assert_eq!(parse_size("not a number", SizeField::Width), 80);
    assert_eq!(parse_size("12px", SizeField::Height), 60);
}

#[test]
fn non_finite_yields_minimum() {
    assert_eq!(parse_size("NaN", SizeField::Width), 80);
    assert_eq!(parse_size("inf", SizeField::Width), 80);
    assert_eq!(parse_size("-infinity", SizeField::Height), 60);
}

#[test]
fn values_below_minimum_are_clamped() {
    assert_eq!(parse_size("10", SizeField::Width), 80);
    assert_eq!(parse_size("-40", SizeField::Height), 60);
    assert_eq!(parse_size("79.99", SizeField::Width), 80);
}

#[test]
fn no_upper_bound() {
    assert_eq!(parse_size("100000", SizeField::Width), 100_000);
}

#[test]
fn exponent_notation_is_accepted() {
    assert_eq!(parse_size("1e3", SizeField::Height), 1000);
}

#[test]
fn floors_and_clamps_across_range() {
    for n in [-500.5_f64, 0.0, 59.5, 60.0, 79.1, 80.0, 81.7, 999.999] {
        for field in [SizeField::Width, SizeField::Height] {
            let min = f64::from(field.min());
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let expected = n.floor().max(min) as u32;
            assert_eq!(parse_size(&n.to_string(), field), expected, "input {n} {field:?}");
        }
    }
}

#[test]
fn field_minimums() {
    assert_eq!(SizeField::Width.min(), 80);
    assert_eq!(SizeField::Height.min(), 60);
}

#[test]
fn field_accepts_short_names() {
    let w: SizeField = serde_json::from_str("\"w\"").unwrap();
    let h: SizeField = serde_json::from_str("\"height\"").unwrap();
    assert_eq!((w, h), (SizeField::Width, SizeField::Height));
}
