use std::collections::VecDeque;
use std::io;

use formline::{
    Choices, CompatRule, Console, Field, Form, FormError, IdValidator, NoDigitValidator,
    RangeValidator, Validity, Value,
};

/// Console fed from a canned list of lines; records every prompt it shows.
struct Script {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl Console for Script {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        self.prompts.push(text.to_string());
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}

/// A small registration form: name, ID, destination, flight time, plus a
/// destination/flight-time compatibility rule.
///
/// Destination 1 allows both flight times; destination 2 only time 2.
fn registration_form() -> Form {
    let mut name = Field::text("What is your name?");
    name.add_validator(Box::new(NoDigitValidator::new())).unwrap();

    let mut id = Field::int("What is your ID?");
    id.add_validator(Box::new(IdValidator::new())).unwrap();

    let destinations = Choices::new(["Alpha", "Beta"]);
    let mut destination = Field::choice("Destination?", destinations);
    destination
        .add_validator(Box::new(RangeValidator::new(1, 2)))
        .unwrap();

    let times = Choices::new(["Early", "Late"]);
    let mut flight_time = Field::choice("Flight time?", times);
    flight_time
        .add_validator(Box::new(RangeValidator::new(1, 2)))
        .unwrap();

    let mut form = Form::new();
    form.add_field(name);
    form.add_field(id);
    let destination_id = form.add_field(destination);
    let flight_time_id = form.add_field(flight_time);

    form.add_rule(Box::new(CompatRule::new(
        destination_id,
        flight_time_id,
        &[(1, &[1, 2]), (2, &[2])],
        "destination does not offer that flight time",
    )))
    .unwrap();

    form
}

#[test]
fn field_without_validator_is_always_valid() {
    let mut field = Field::text("Anything?");
    assert!(field.validate()); // empty sentinel included

    let mut console = Script::new(&["whatever 123"]);
    field.read_input(&mut console).unwrap();
    assert!(field.validate());
}

#[test]
fn attaching_a_second_validator_is_an_error() {
    let mut field = Field::text("Name?");
    field.add_validator(Box::new(NoDigitValidator::new())).unwrap();

    let result = field.add_validator(Box::new(NoDigitValidator::new()));
    assert!(matches!(
        result,
        Err(FormError::ValidatorAlreadyAttached { .. })
    ));
}

#[test]
fn unparseable_input_leaves_the_field_empty() {
    let mut field = Field::int("What is your ID?");
    field.add_validator(Box::new(IdValidator::new())).unwrap();

    let mut console = Script::new(&["not a number"]);
    field.read_input(&mut console).unwrap();
    assert!(field.value().is_empty());
    assert!(!field.validate());
}

#[test]
fn fill_reprompts_everything_until_a_validate_pass() {
    let mut form = registration_form();

    let mut console = Script::new(&["Jane Doe", "123456782", "1", "1", "x", "x", "x", "x"]);
    form.fill(&mut console).unwrap();
    assert_eq!(console.prompts.len(), 4);

    // No validate in between: every field is prompted again.
    form.fill(&mut console).unwrap();
    assert_eq!(console.prompts.len(), 8);
}

#[test]
fn fill_skips_fields_marked_valid() {
    let mut form = registration_form();

    // Bad ID, everything else fine.
    let mut console = Script::new(&["Jane Doe", "123456789", "1", "2"]);
    form.fill(&mut console).unwrap();
    assert!(!form.validate());

    let mut retry = Script::new(&["123456782"]);
    form.fill(&mut retry).unwrap();
    assert_eq!(retry.prompts.len(), 1);
    assert!(retry.prompts[0].starts_with("What is your ID?"));
    assert!(form.validate());
}

#[test]
fn valid_form_passes_on_the_first_attempt() {
    let mut form = registration_form();

    let mut console = Script::new(&["Jane Doe", "123456782", "2", "2"]);
    form.fill(&mut console).unwrap();
    assert!(form.validate());

    let rendered = format!("{form}");
    assert!(rendered.contains("Jane Doe"));
    assert!(rendered.contains("Beta"));
    assert!(!rendered.contains("!!"));
}

#[test]
fn cross_rule_mismatch_fails_the_form_and_marks_both_fields() {
    let mut form = registration_form();

    // Each field passes its own validator, but destination 2 only offers
    // flight time 2.
    let mut console = Script::new(&["Jane Doe", "123456782", "2", "1"]);
    form.fill(&mut console).unwrap();
    assert!(!form.validate());

    let rendered = format!("{form}");
    assert!(rendered.contains("destination does not offer that flight time"));

    // Only the two implicated fields are re-prompted.
    let mut retry = Script::new(&["1", "1"]);
    form.fill(&mut retry).unwrap();
    assert_eq!(retry.prompts.len(), 2);
    assert!(retry.prompts[0].starts_with("Destination?"));
    assert!(retry.prompts[1].starts_with("Flight time?"));
    assert!(form.validate());
}

#[test]
fn cross_rule_fails_while_a_referenced_field_is_empty() {
    let mut form = registration_form();
    // Nothing filled in yet: conservative policy treats the rule as failing.
    assert!(!form.validate());
}

#[test]
fn unknown_code_renders_as_the_raw_number() {
    let mut form = registration_form();

    let mut console = Script::new(&["Jane Doe", "123456782", "9", "1"]);
    form.fill(&mut console).unwrap();
    assert!(!form.validate());

    let rendered = format!("{form}");
    assert!(rendered.contains('9'));
    assert!(rendered.contains("value must be between 1 and 2"));
}

#[test]
fn rule_over_a_foreign_field_id_is_rejected() {
    let mut other = Form::new();
    other.add_field(Field::text("a"));
    other.add_field(Field::text("b"));
    let foreign = other.add_field(Field::text("c"));

    let mut form = Form::new();
    let local = form.add_field(Field::text("only"));

    let result = form.add_rule(Box::new(CompatRule::new(
        local,
        foreign,
        &[(1, &[1])],
        "never evaluated",
    )));
    assert!(matches!(result, Err(FormError::UnknownField(_))));
}

#[test]
fn validity_is_recomputed_by_each_validate_call() {
    let mut form = registration_form();

    let mut console = Script::new(&["J4ne", "123456782", "1", "1"]);
    form.fill(&mut console).unwrap();
    assert!(!form.validate());

    let rendered = format!("{form}");
    assert!(rendered.contains("must not contain digits"));

    let mut retry = Script::new(&["Jane"]);
    form.fill(&mut retry).unwrap();
    assert!(form.validate());
    assert!(!format!("{form}").contains("!!"));
}

#[test]
fn field_accessors_reflect_current_state() {
    let mut form = Form::new();
    let mut year = Field::int("Year?");
    year.add_validator(Box::new(RangeValidator::new(1900, 2011)))
        .unwrap();
    let year_id = form.add_field(year);

    let mut console = Script::new(&["1985"]);
    form.fill(&mut console).unwrap();
    assert_eq!(form.value(year_id), Some(&Value::Int(1985)));
    assert_eq!(
        form.field(year_id).map(|f| f.validity().clone()),
        Some(Validity::Unchecked)
    );

    assert!(form.validate());
    assert_eq!(
        form.field(year_id).map(|f| f.validity().clone()),
        Some(Validity::Valid)
    );
}
