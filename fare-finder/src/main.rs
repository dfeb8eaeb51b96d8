use chrono::{Days, Local, Months, NaiveDate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fare_finder::domain::{AirportCode, Route, SearchWindow};
use fare_finder::pegasus::{PegasusClient, PegasusConfig};
use fare_finder::report;
use fare_finder::search::{RoundTripSearch, SearchConfig};

/// Days from today to the default window start.
const DEFAULT_START_OFFSET_DAYS: u64 = 4;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fare_finder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get search parameters from environment
    let from = require_airport("PGS_FROM");
    let to = require_airport("PGS_TO");

    let today = Local::now().date_naive();
    let default_start = today
        .checked_add_days(Days::new(DEFAULT_START_OFFSET_DAYS))
        .expect("default start date out of range");
    let default_end = today
        .checked_add_months(Months::new(1))
        .expect("default end date out of range");

    let start = date_var("PGS_START_DATE", default_start);
    let end = date_var("PGS_END_DATE", default_end);
    let min_stay = int_var("PGS_MIN_STAY", 3);
    let max_stay = int_var("PGS_MAX_STAY", 15);

    // Validate the window before any query goes out
    let window = SearchWindow::new(start, end, min_stay, max_stay).unwrap_or_else(|e| {
        eprintln!("Invalid search window: {e}");
        std::process::exit(2);
    });

    let route = Route::new(from, to);

    let client =
        PegasusClient::new(PegasusConfig::new()).expect("Failed to create Pegasus client");
    let config = SearchConfig::default();

    println!(
        "Searching {} round trips, {} to {}, stays of {} to {} days...",
        route, window.start, window.end, window.min_stay, window.max_stay
    );

    let search = RoundTripSearch::new(&client, &config);
    let outcome = search.search(&route, &window).await;

    let format = std::env::var("PGS_FORMAT").unwrap_or_default();
    if format == "json" {
        let json = report::render_json(&outcome.trips).expect("Failed to serialize trips");
        println!("{json}");
    } else if outcome.trips.is_empty() {
        println!("No trips found.");
    } else {
        print!("{}", report::render_table(&outcome.trips));
    }

    println!();
    println!(
        "{} queries issued, {} outbound fares, {} return fares, {} trips.",
        outcome.queries_issued,
        outcome.outbound_fares,
        outcome.return_fares,
        outcome.trips.len()
    );
}

/// Read a required airport code from the environment.
fn require_airport(name: &str) -> AirportCode {
    let value = std::env::var(name).unwrap_or_else(|_| {
        eprintln!("{name} is not set. Set PGS_FROM and PGS_TO to airport codes (e.g. LWO, IST_SAW).");
        std::process::exit(2);
    });
    AirportCode::parse(&value).unwrap_or_else(|e| {
        eprintln!("{name}={value} is not a valid airport code: {e}");
        std::process::exit(2);
    })
}

/// Read an optional `YYYY-MM-DD` date from the environment.
fn date_var(name: &str, default: NaiveDate) -> NaiveDate {
    match std::env::var(name) {
        Ok(value) => NaiveDate::parse_from_str(&value, "%Y-%m-%d").unwrap_or_else(|_| {
            eprintln!("{name}={value} is not a date in YYYY-MM-DD form.");
            std::process::exit(2);
        }),
        Err(_) => default,
    }
}

/// Read an optional whole number of days from the environment.
fn int_var(name: &str, default: i64) -> i64 {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("{name}={value} is not a whole number of days.");
            std::process::exit(2);
        }),
        Err(_) => default,
    }
}
