//! Clock string formatting for the home-screen widget.
//!
//! Formatting is split from the tick handling so it can be tested on
//! fixed timestamps; the runtime feeds it `chrono::Local::now()` once a
//! second.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Format the time line of the clock widget, e.g. `"14:05"`.
pub fn time_string<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Format the date line of the clock widget, e.g. `"Friday, August 7"`.
pub fn date_string<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!(
        "{}, {} {}",
        weekday_name(now.weekday()),
        month_name(now.month()),
        now.day()
    )
}

/// English weekday name; the clock is locale-stable by design.
fn weekday_name(wd: chrono::Weekday) -> &'static str {
    match wd {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

/// English month name for `month` in 1..=12.
fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[((month.clamp(1, 12)) - 1) as usize]
}
