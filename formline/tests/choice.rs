use formline::{Choices, Value, ValueKind};

#[test]
fn codes_are_contiguous_from_one() {
    let c = Choices::new(["London", "New York", "Tokyo"]);
    assert_eq!(c.len(), 3);
    assert_eq!(c.last_code(), 3);
    assert_eq!(c.label(1), Some("London"));
    assert_eq!(c.label(3), Some("Tokyo"));
}

#[test]
fn unknown_code_has_no_label() {
    let c = Choices::new(["London", "New York"]);
    assert_eq!(c.label(0), None);
    assert_eq!(c.label(3), None);
}

#[test]
fn listing_is_one_entry_per_line() {
    let c = Choices::new(["London", "New York"]);
    assert_eq!(c.listing(), "1 - London\n2 - New York\n");
}

#[test]
fn parse_reads_a_code_without_range_checks() {
    // Out-of-table codes are stored anyway; a range validator rejects them.
    assert_eq!(Value::parse(ValueKind::Code, "2\n"), Value::Code(2));
    assert_eq!(Value::parse(ValueKind::Code, "99"), Value::Code(99));
}

#[test]
fn parse_falls_back_to_empty_on_bad_input() {
    assert_eq!(Value::parse(ValueKind::Code, "soon"), Value::Empty);
    assert_eq!(Value::parse(ValueKind::Int, "12x"), Value::Empty);
    assert_eq!(Value::parse(ValueKind::Int, ""), Value::Empty);
    assert_eq!(Value::parse(ValueKind::Text, "  \n"), Value::Empty);
}

#[test]
fn parse_trims_surrounding_whitespace() {
    assert_eq!(
        Value::parse(ValueKind::Text, "  Jane Doe \n"),
        Value::Text("Jane Doe".to_string())
    );
    assert_eq!(Value::parse(ValueKind::Int, " 1985 \n"), Value::Int(1985));
}
