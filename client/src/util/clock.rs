//! Wall-clock access for render-time values.
//!
//! The footer year is the only time-dependent value on the page. The browser
//! reads it from `Date`; everywhere else it comes from the system clock. Both
//! sides use UTC so server markup and hydration agree around New Year.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_utc_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
