#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_year_matches_system_clock() {
    let expected = time::OffsetDateTime::now_utc().year();
    let year = current_year();
    // Tolerate a New Year's Eve rollover between the two reads.
    assert!(year == expected || year == expected + 1, "year {year} vs {expected}");
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2024);
}
