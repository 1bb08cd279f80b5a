//! Fixed tables for the registration form: destinations, flight-time
//! windows, WIFI bundles, and the compatibility rules between them.

use formline::Choices;

pub const MIN_AGE: i64 = 15;
pub const MAX_AGE: i64 = 120;

pub fn destinations() -> Choices {
    Choices::new([
        "London",
        "New York",
        "Tokyo",
        "Sydney",
        "Reykjavik",
    ])
}

pub fn flight_times() -> Choices {
    Choices::new([
        "Morning (06:00 - 12:00)",
        "Afternoon (12:00 - 18:00)",
        "Night (18:00 - 00:00)",
    ])
}

pub fn wifi_bundles() -> Choices {
    Choices::new([
        "No WIFI",
        "Basic browsing",
        "Streaming",
    ])
}

/// Flight-time windows on offer per destination. Long-haul routes only
/// depart at night; short-haul routes keep daytime slots.
pub const DESTINATION_FLIGHT_TIMES: &[(u32, &[u32])] = &[
    (1, &[1, 2, 3]),
    (2, &[2, 3]),
    (3, &[3]),
    (4, &[1, 3]),
    (5, &[1, 2]),
];

/// WIFI bundles available per destination; remote routes lack the
/// satellite coverage for the streaming tier.
pub const DESTINATION_WIFI_BUNDLES: &[(u32, &[u32])] = &[
    (1, &[1, 2, 3]),
    (2, &[1, 2, 3]),
    (3, &[1, 2]),
    (4, &[1, 2]),
    (5, &[1]),
];
