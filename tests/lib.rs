use jalali::Timestamp;

mod fields;
mod week;

/// A type alias we use for tests.
///
/// Most operations that take options return a `Result`, and `?` reads
/// better than a wall of `unwrap()` calls.
type Result = std::result::Result<(), jalali::Error>;

/// Creates a UTC timestamp from a Gregorian date at midnight.
fn greg(year: i64, month: i64, day: i64) -> Timestamp {
    Timestamp::from_gregorian(year, month, day, 0, 0, 0, 0)
}

/// Creates a UTC timestamp from a Gregorian date and a time of day.
fn greg_hms(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Timestamp {
    Timestamp::from_gregorian(year, month, day, hour, minute, second, 0)
}
