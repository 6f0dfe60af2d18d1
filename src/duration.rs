/// A compound duration of calendar and clock units.
///
/// A duration is added to a [`Timestamp`](crate::Timestamp) with
/// [`Calendar::add`](crate::Calendar::add) or subtracted from one with
/// [`Calendar::sub`](crate::Calendar::sub). Calendar units (years, months,
/// weeks and days) are applied to Jalali fields, while clock units (hours,
/// minutes and seconds) are applied as an exact number of milliseconds.
///
/// Units are never balanced against each other. For example, `30` days is
/// not the same as `1` month, and `0` months with `12` years is not the same
/// as `144` months and `0` years (although they add the same way).
///
/// Every unit defaults to zero.
///
/// # Example
///
/// ```
/// use jalali::{Duration, ToDuration};
///
/// let duration = Duration::new().years(2).months(9).hours(5);
/// assert_eq!(duration, 2.years().months(9).hours(5));
/// assert_eq!(duration.get_months(), 9);
/// assert_eq!((-duration).get_years(), -2);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Duration {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Duration {
    /// A duration in which every unit is zero.
    pub const ZERO: Duration = Duration {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a new zero duration.
    #[inline]
    pub const fn new() -> Duration {
        Duration::ZERO
    }

    /// Sets the number of years in this duration.
    #[inline]
    pub const fn years(self, years: i64) -> Duration {
        Duration { years, ..self }
    }

    /// Sets the number of months in this duration.
    #[inline]
    pub const fn months(self, months: i64) -> Duration {
        Duration { months, ..self }
    }

    /// Sets the number of weeks in this duration.
    #[inline]
    pub const fn weeks(self, weeks: i64) -> Duration {
        Duration { weeks, ..self }
    }

    /// Sets the number of days in this duration.
    #[inline]
    pub const fn days(self, days: i64) -> Duration {
        Duration { days, ..self }
    }

    /// Sets the number of hours in this duration.
    #[inline]
    pub const fn hours(self, hours: i64) -> Duration {
        Duration { hours, ..self }
    }

    /// Sets the number of minutes in this duration.
    #[inline]
    pub const fn minutes(self, minutes: i64) -> Duration {
        Duration { minutes, ..self }
    }

    /// Sets the number of seconds in this duration.
    #[inline]
    pub const fn seconds(self, seconds: i64) -> Duration {
        Duration { seconds, ..self }
    }

    /// Returns the number of years in this duration.
    #[inline]
    pub fn get_years(&self) -> i64 {
        self.years
    }

    /// Returns the number of months in this duration.
    #[inline]
    pub fn get_months(&self) -> i64 {
        self.months
    }

    /// Returns the number of weeks in this duration.
    #[inline]
    pub fn get_weeks(&self) -> i64 {
        self.weeks
    }

    /// Returns the number of days in this duration.
    #[inline]
    pub fn get_days(&self) -> i64 {
        self.days
    }

    /// Returns the number of hours in this duration.
    #[inline]
    pub fn get_hours(&self) -> i64 {
        self.hours
    }

    /// Returns the number of minutes in this duration.
    #[inline]
    pub fn get_minutes(&self) -> i64 {
        self.minutes
    }

    /// Returns the number of seconds in this duration.
    #[inline]
    pub fn get_seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns true if every unit in this duration is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    /// Returns the total number of months, counting years as 12 months.
    #[inline]
    pub(crate) fn total_months(&self) -> i128 {
        i128::from(self.years) * 12 + i128::from(self.months)
    }

    /// Returns the total number of days, counting weeks as 7 days.
    #[inline]
    pub(crate) fn total_days(&self) -> i128 {
        i128::from(self.weeks) * 7 + i128::from(self.days)
    }

    /// Returns the hours, minutes and seconds as a number of milliseconds.
    #[inline]
    pub(crate) fn clock_milliseconds(&self) -> i128 {
        let minutes = i128::from(self.hours) * 60 + i128::from(self.minutes);
        let seconds = minutes * 60 + i128::from(self.seconds);
        seconds * 1_000
    }
}

/// Negates every unit. An `i64::MIN` unit saturates to `i64::MAX`.
impl core::ops::Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        Duration {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            weeks: self.weeks.saturating_neg(),
            days: self.days.saturating_neg(),
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
        }
    }
}

/// A trait for creating durations from integer literals.
///
/// This trait is implemented for `i8`, `i16`, `i32` and `i64`. It's
/// provided as a convenience for writing durations in source code.
///
/// # Example
///
/// ```
/// use jalali::{Duration, ToDuration};
///
/// assert_eq!(5.days(), Duration::new().days(5));
/// assert_eq!(1.weeks().hours(12), Duration::new().weeks(1).hours(12));
/// assert_eq!((-3).months(), -(3.months()));
/// ```
pub trait ToDuration: Sized {
    /// Create a new duration from this integer in units of years.
    fn years(self) -> Duration;

    /// Create a new duration from this integer in units of months.
    fn months(self) -> Duration;

    /// Create a new duration from this integer in units of weeks.
    fn weeks(self) -> Duration;

    /// Create a new duration from this integer in units of days.
    fn days(self) -> Duration;

    /// Create a new duration from this integer in units of hours.
    fn hours(self) -> Duration;

    /// Create a new duration from this integer in units of minutes.
    fn minutes(self) -> Duration;

    /// Create a new duration from this integer in units of seconds.
    fn seconds(self) -> Duration;
}

macro_rules! impl_to_duration {
    ($ty:ty) => {
        impl ToDuration for $ty {
            #[inline]
            fn years(self) -> Duration {
                Duration::new().years(i64::from(self))
            }
            #[inline]
            fn months(self) -> Duration {
                Duration::new().months(i64::from(self))
            }
            #[inline]
            fn weeks(self) -> Duration {
                Duration::new().weeks(i64::from(self))
            }
            #[inline]
            fn days(self) -> Duration {
                Duration::new().days(i64::from(self))
            }
            #[inline]
            fn hours(self) -> Duration {
                Duration::new().hours(i64::from(self))
            }
            #[inline]
            fn minutes(self) -> Duration {
                Duration::new().minutes(i64::from(self))
            }
            #[inline]
            fn seconds(self) -> Duration {
                Duration::new().seconds(i64::from(self))
            }
        }
    };
}

impl_to_duration!(i8);
impl_to_duration!(i16);
impl_to_duration!(i32);
impl_to_duration!(i64);

/// The names of the units, in the order they are serialized.
#[cfg(feature = "serde")]
const UNIT_NAMES: &[&str] =
    &["years", "months", "weeks", "days", "hours", "minutes", "seconds"];

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let values = [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ];
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in UNIT_NAMES.iter().zip(values) {
            if value != 0 {
                map.serialize_entry(name, &value)?;
            }
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        use alloc::string::String;

        use serde::de;

        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a map of duration units to integers")
            }

            fn visit_map<A: de::MapAccess<'de>>(
                self,
                mut map: A,
            ) -> Result<Duration, A::Error> {
                let mut duration = Duration::new();
                while let Some(key) = map.next_key::<String>()? {
                    let value: i64 = map.next_value()?;
                    duration = match key.as_str() {
                        "years" => duration.years(value),
                        "months" => duration.months(value),
                        "weeks" => duration.weeks(value),
                        "days" => duration.days(value),
                        "hours" => duration.hours(value),
                        "minutes" => duration.minutes(value),
                        "seconds" => duration.seconds(value),
                        unknown => {
                            return Err(de::Error::unknown_field(
                                unknown, UNIT_NAMES,
                            ))
                        }
                    };
                }
                Ok(duration)
            }
        }

        deserializer.deserialize_map(DurationVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        use quickcheck::Arbitrary;

        // Bounded so that most durations added to most timestamps stay in
        // the supported range.
        let mut unit = |max: i64| i64::arbitrary(g) % max;
        Duration::new()
            .years(unit(1_000))
            .months(unit(12_000))
            .weeks(unit(50_000))
            .days(unit(350_000))
            .hours(unit(8_000_000))
            .minutes(unit(500_000_000))
            .seconds(unit(1_000_000_000))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        // Shrink by zeroing out units one at a time, largest first.
        let original = *self;
        let candidates = [
            original.years(0),
            original.months(0),
            original.weeks(0),
            original.days(0),
            original.hours(0),
            original.minutes(0),
            original.seconds(0),
        ];
        alloc::boxed::Box::new(
            candidates.into_iter().filter(move |d| *d != original),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        let duration = 2.years().months(-3).weeks(1).days(2).hours(1);
        assert_eq!(duration.total_months(), 21);
        assert_eq!(duration.total_days(), 9);
        assert_eq!(duration.clock_milliseconds(), 3_600_000);
        let duration = i64::MAX.years().months(i64::MAX);
        assert_eq!(
            duration.total_months(),
            i128::from(i64::MAX) * 13,
        );
    }

    #[test]
    fn negation_saturates() {
        let duration = -(i64::MIN.seconds().minutes(5));
        assert_eq!(duration.get_seconds(), i64::MAX);
        assert_eq!(duration.get_minutes(), -5);
        assert!((-Duration::ZERO).is_zero());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_map() {
        let duration = 2.years().months(9).weeks(1).days(7).hours(5);
        let json = serde_json::to_string(&duration).unwrap();
        insta::assert_snapshot!(
            json,
            @r#"{"years":2,"months":9,"weeks":1,"days":7,"hours":5}"#,
        );
        let got: Duration =
            serde_json::from_str(r#"{"minutes":9,"seconds":30}"#).unwrap();
        assert_eq!(got, 9.minutes().seconds(30));
        let err = serde_json::from_str::<Duration>(r#"{"decades":1}"#);
        assert!(err.is_err());
    }
}
