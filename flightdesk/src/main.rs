//! Interactive flight-registration form.
//!
//! Prompts for name, ID, year of birth, destination, flight-time window and
//! WIFI bundle, validates each field and the cross-field compatibility
//! rules, and re-prompts the offending fields until the whole form passes.

mod catalog;
mod messages;
mod screen;

use std::fs::File;

use chrono::Datelike;
use formline::{
    CompatRule, Field, Form, FormError, IdValidator, NoDigitValidator, RangeValidator,
};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use screen::StdinConsole;

fn main() {
    let log_file = File::create("flightdesk.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), FormError> {
    let current_year = i64::from(chrono::Local::now().year());
    info!("starting registration, current year {current_year}");

    let mut form = build_form(current_year)?;
    let mut console = StdinConsole;

    screen::clear_screen()?;
    print!("{}", messages::WELCOME);
    form.fill(&mut console)?;

    while !form.validate() {
        screen::clear_screen()?;
        print!("{}", messages::ERROR);
        println!("{form}");
        form.fill(&mut console)?;
    }

    screen::clear_screen()?;
    print!("{}", messages::GOODBYE);
    println!("{form}");

    info!("registration complete");
    Ok(())
}

/// Wire fields, validators and cross-field rules into the form.
///
/// The current year arrives as a plain integer; the birth-year range is
/// `[current_year - 120, current_year - 15]`.
fn build_form(current_year: i64) -> Result<Form, FormError> {
    let mut name = Field::text("What is your name?");
    name.add_validator(Box::new(NoDigitValidator::new()))?;

    let mut id = Field::int("What is your ID?");
    id.add_validator(Box::new(IdValidator::new()))?;

    let mut year_of_birth = Field::int("What is your year of birth?");
    year_of_birth.add_validator(Box::new(RangeValidator::new(
        current_year - catalog::MAX_AGE,
        current_year - catalog::MIN_AGE,
    )))?;

    let destinations = catalog::destinations();
    let mut destination = Field::choice("What is your flight destination?", destinations.clone());
    destination.add_validator(Box::new(RangeValidator::new(
        1,
        i64::from(destinations.last_code()),
    )))?;

    let flight_times = catalog::flight_times();
    let mut flight_time = Field::choice(
        "What is your desired flight time range?",
        flight_times.clone(),
    );
    flight_time.add_validator(Box::new(RangeValidator::new(
        1,
        i64::from(flight_times.last_code()),
    )))?;

    let wifi_bundles = catalog::wifi_bundles();
    let mut wifi_bundle = Field::choice("What is your desired WIFI bundle?", wifi_bundles.clone());
    wifi_bundle.add_validator(Box::new(RangeValidator::new(
        1,
        i64::from(wifi_bundles.last_code()),
    )))?;

    let mut form = Form::new();
    form.add_field(name);
    form.add_field(id);
    form.add_field(year_of_birth);
    let destination_id = form.add_field(destination);
    let flight_time_id = form.add_field(flight_time);
    let wifi_bundle_id = form.add_field(wifi_bundle);

    form.add_rule(Box::new(CompatRule::new(
        destination_id,
        flight_time_id,
        catalog::DESTINATION_FLIGHT_TIMES,
        "this destination does not offer that flight time",
    )))?;
    form.add_rule(Box::new(CompatRule::new(
        destination_id,
        wifi_bundle_id,
        catalog::DESTINATION_WIFI_BUNDLES,
        "this destination does not offer that WIFI bundle",
    )))?;

    Ok(form)
}
