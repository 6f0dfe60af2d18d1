/*!
Week numbering in the Jalali calendar.

Week numbering depends on two pieces of configuration:

* The day on which weeks start (`weekStartsOn`), from `0` (Sunday) to `6`
(Saturday).
* The minimal day of Farvardin that the first week of a year must contain
(`firstWeekContainsDate`), from `1` to `7`. The *week-year* starts at the
beginning of the week containing that day, so a week-year may begin a few
days before or after 1 Farvardin.

Both values are supplied through [`WeekOptions`]. Each is resolved, in
order of precedence, from an explicit value, from the caller's [`Locale`],
from the default locale and finally from the library defaults of `0` and
`1`. The default locale is [`Locale::FA_IR`], in which weeks start on
Saturday and the first week contains 1 Farvardin.

The operations themselves are methods on [`Calendar`]:

* [`Calendar::start_of_week`]
* [`Calendar::start_of_week_year`]
* [`Calendar::week_year`]
* [`Calendar::week`]
* [`Calendar::set_week`]
* [`Calendar::set_day_of_week`]
* [`Calendar::previous_weekday`]

# Example

```
use jalali::{Calendar, Timestamp, WeekOptions};

let cal = Calendar::UTC;
// 1384-04-11
let ts = Timestamp::from_gregorian(2005, 7, 2, 0, 0, 0, 0);
// With the default Persian locale, the week-year 1384 started on Saturday
// 1383-12-29.
assert_eq!(
    cal.start_of_week_year(ts, &WeekOptions::new())?,
    Timestamp::from_gregorian(2005, 3, 19, 0, 0, 0, 0),
);
assert_eq!(cal.week(ts, &WeekOptions::new())?, Some(16));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{
    calendar::Calendar,
    error::Error,
    fields::{Field, JalaliFields},
    timestamp::Timestamp,
    util::itime::{IEpochDay, ITime, MILLIS_PER_DAY},
};

/// A day of the week.
///
/// The numbering used throughout this crate starts at `0` for Sunday, to
/// match the native date representation's `getDay`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Weekday {
    /// Sunday, numbered `0`.
    Sunday,
    /// Monday, numbered `1`.
    Monday,
    /// Tuesday, numbered `2`.
    Tuesday,
    /// Wednesday, numbered `3`.
    Wednesday,
    /// Thursday, numbered `4`.
    Thursday,
    /// Friday, numbered `5`.
    Friday,
    /// Saturday, numbered `6`.
    Saturday,
}

impl Weekday {
    /// Converts an offset from Sunday to a weekday.
    ///
    /// # Errors
    ///
    /// This returns an error when `offset` is not in `0..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::Weekday;
    ///
    /// assert_eq!(Weekday::from_sunday_zero_offset(6)?, Weekday::Saturday);
    /// assert!(Weekday::from_sunday_zero_offset(7).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_sunday_zero_offset(offset: i64) -> Result<Weekday, Error> {
        let weekday = match offset {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            6 => Weekday::Saturday,
            _ => return Err(Error::range("weekday", offset, 0, 6)),
        };
        Ok(weekday)
    }

    /// Returns this weekday as an offset from Sunday.
    #[inline]
    pub fn to_sunday_zero_offset(self) -> i8 {
        self as i8
    }

    /// Returns the number of days from `other` forward to `self`, in the
    /// range `0..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::Weekday;
    ///
    /// assert_eq!(Weekday::Monday.since(Weekday::Saturday), 2);
    /// assert_eq!(Weekday::Saturday.since(Weekday::Monday), 5);
    /// assert_eq!(Weekday::Friday.since(Weekday::Friday), 0);
    /// ```
    #[inline]
    pub fn since(self, other: Weekday) -> i8 {
        (self.to_sunday_zero_offset() - other.to_sunday_zero_offset())
            .rem_euclid(7)
    }

    /// Returns the weekday following this one.
    #[inline]
    pub fn next(self) -> Weekday {
        let offset = i64::from(self.to_sunday_zero_offset());
        Weekday::from_offset_wrapping(offset + 1)
    }

    /// Returns the weekday preceding this one.
    #[inline]
    pub fn previous(self) -> Weekday {
        let offset = i64::from(self.to_sunday_zero_offset());
        Weekday::from_offset_wrapping(offset - 1)
    }

    #[inline]
    pub(crate) fn from_epoch_day(epoch_day: IEpochDay) -> Weekday {
        Weekday::from_offset_wrapping(i64::from(epoch_day.weekday()))
    }

    #[inline]
    fn from_offset_wrapping(offset: i64) -> Weekday {
        match offset.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Weekday {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.to_sunday_zero_offset())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Weekday {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Weekday, D::Error> {
        use serde::de;

        struct WeekdayVisitor;

        impl<'de> de::Visitor<'de> for WeekdayVisitor {
            type Value = Weekday;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an integer from 0 (Sunday) to 6 (Saturday)")
            }

            #[inline]
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Weekday, E> {
                Weekday::from_sunday_zero_offset(v).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Weekday, E> {
                let v = i64::try_from(v).unwrap_or(i64::MAX);
                self.visit_i64(v)
            }
        }

        deserializer.deserialize_i64(WeekdayVisitor)
    }
}

/// The week related defaults of a locale.
///
/// Only the parts of a locale relevant to week numbering are represented.
/// Either value may be absent, in which case resolution falls through to
/// the next level of precedence. See [`WeekOptions`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Locale {
    week_starts_on: Option<i64>,
    first_week_contains_date: Option<i64>,
}

impl Locale {
    /// The Persian (Iran) locale. Weeks start on Saturday and the first
    /// week of a year is the one containing 1 Farvardin.
    pub const FA_IR: Locale = Locale {
        week_starts_on: Some(6),
        first_week_contains_date: Some(1),
    };

    /// Creates a locale with no week related defaults.
    #[inline]
    pub const fn new() -> Locale {
        Locale { week_starts_on: None, first_week_contains_date: None }
    }

    /// Sets the day on which weeks start in this locale.
    #[inline]
    pub const fn week_starts_on(self, day: i64) -> Locale {
        Locale { week_starts_on: Some(day), ..self }
    }

    /// Sets the day of Farvardin that the first week of the year must
    /// contain in this locale.
    #[inline]
    pub const fn first_week_contains_date(self, day: i64) -> Locale {
        Locale { first_week_contains_date: Some(day), ..self }
    }

    /// Returns the configured week start, if any.
    #[inline]
    pub fn get_week_starts_on(&self) -> Option<i64> {
        self.week_starts_on
    }

    /// Returns the configured first week date, if any.
    #[inline]
    pub fn get_first_week_contains_date(&self) -> Option<i64> {
        self.first_week_contains_date
    }
}

/// Options for the week numbering operations on [`Calendar`].
///
/// This is a builder. Each value is resolved independently with the
/// following precedence:
///
/// 1. The value set explicitly via [`WeekOptions::week_starts_on`] or
/// [`WeekOptions::first_week_contains_date`].
/// 2. The value from the locale set via [`WeekOptions::locale`].
/// 3. The value from the default locale, which is [`Locale::FA_IR`] unless
/// replaced via [`WeekOptions::default_locale`].
/// 4. The library defaults, which are `0` for the week start and `1` for the
/// first week date.
///
/// Resolution happens once per operation, before any computation. A
/// resolved value outside its valid range results in an error for which
/// [`Error::is_range`](crate::Error::is_range) returns true.
///
/// # Example
///
/// An explicit option takes precedence over the locale:
///
/// ```
/// use jalali::{Calendar, Locale, Timestamp, WeekOptions};
///
/// let cal = Calendar::UTC;
/// let ts = Timestamp::from_gregorian(2005, 7, 2, 0, 0, 0, 0);
/// let options = WeekOptions::new()
///     .week_starts_on(1)
///     .first_week_contains_date(4)
///     .locale(Locale::new().week_starts_on(0).first_week_contains_date(1));
/// // 1384-01-01 was a Monday, so the week-year starts right on it.
/// assert_eq!(
///     cal.start_of_week_year(ts, &options)?,
///     Timestamp::from_gregorian(2005, 3, 21, 0, 0, 0, 0),
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeekOptions {
    week_starts_on: Option<i64>,
    first_week_contains_date: Option<i64>,
    locale: Option<Locale>,
    default_locale: Locale,
}

impl WeekOptions {
    /// Creates options with nothing set explicitly.
    #[inline]
    pub const fn new() -> WeekOptions {
        WeekOptions {
            week_starts_on: None,
            first_week_contains_date: None,
            locale: None,
            default_locale: Locale::FA_IR,
        }
    }

    /// Explicitly sets the day on which weeks start, where `0` is Sunday.
    #[inline]
    pub const fn week_starts_on(self, day: i64) -> WeekOptions {
        WeekOptions { week_starts_on: Some(day), ..self }
    }

    /// Explicitly sets the day of Farvardin that the first week of a year
    /// must contain.
    #[inline]
    pub const fn first_week_contains_date(self, day: i64) -> WeekOptions {
        WeekOptions { first_week_contains_date: Some(day), ..self }
    }

    /// Sets the caller's locale.
    #[inline]
    pub const fn locale(self, locale: Locale) -> WeekOptions {
        WeekOptions { locale: Some(locale), ..self }
    }

    /// Replaces the default locale consulted after the caller's locale.
    ///
    /// Passing `Locale::new()` here makes the library defaults of `0` and
    /// `1` apply when nothing else is set.
    #[inline]
    pub const fn default_locale(self, locale: Locale) -> WeekOptions {
        WeekOptions { default_locale: locale, ..self }
    }

    /// Resolves and validates both week options.
    ///
    /// # Errors
    ///
    /// This returns an error when the resolved week start is not in `0..=6`
    /// or when the resolved first week date is not in `1..=7`.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Locale, WeekOptions, Weekday};
    ///
    /// let config = WeekOptions::new().resolve()?;
    /// assert_eq!(config.week_start(), Weekday::Saturday);
    /// assert_eq!(config.first_week_contains_date(), 1);
    ///
    /// let config = WeekOptions::new().default_locale(Locale::new()).resolve()?;
    /// assert_eq!(config.week_start(), Weekday::Sunday);
    ///
    /// assert!(WeekOptions::new().first_week_contains_date(0).resolve().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn resolve(&self) -> Result<WeekConfig, Error> {
        let week_start = self.resolve_week_start()?;
        let first_week_contains_date = self
            .first_week_contains_date
            .or_else(|| self.locale?.first_week_contains_date)
            .or(self.default_locale.first_week_contains_date)
            .unwrap_or(1);
        let config = WeekConfig::new(
            i64::from(week_start.to_sunday_zero_offset()),
            first_week_contains_date,
        )?;
        trace!(
            "resolved week options: weekStartsOn={}, firstWeekContainsDate={}",
            config.week_start.to_sunday_zero_offset(),
            config.first_week_contains_date,
        );
        Ok(config)
    }

    /// Resolves and validates only the week start.
    ///
    /// Operations that don't depend on week-years use this, so that a bad
    /// first week date doesn't cause them to fail.
    pub fn resolve_week_start(&self) -> Result<Weekday, Error> {
        let week_starts_on = self
            .week_starts_on
            .or_else(|| self.locale?.week_starts_on)
            .or(self.default_locale.week_starts_on)
            .unwrap_or(0);
        if !(0..=6).contains(&week_starts_on) {
            return Err(Error::range("weekStartsOn", week_starts_on, 0, 6));
        }
        Weekday::from_sunday_zero_offset(week_starts_on)
    }
}

impl Default for WeekOptions {
    fn default() -> WeekOptions {
        WeekOptions::new()
    }
}

impl From<WeekConfig> for WeekOptions {
    fn from(config: WeekConfig) -> WeekOptions {
        let week_starts_on = config.week_start.to_sunday_zero_offset();
        let first_week_contains_date = config.first_week_contains_date;
        WeekOptions::new()
            .week_starts_on(i64::from(week_starts_on))
            .first_week_contains_date(i64::from(first_week_contains_date))
    }
}

/// Fully resolved and validated week options.
///
/// This is produced by [`WeekOptions::resolve`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeekConfig {
    week_start: Weekday,
    first_week_contains_date: i8,
}

impl WeekConfig {
    /// Creates a validated week configuration.
    ///
    /// # Errors
    ///
    /// This returns an error when `week_starts_on` is not in `0..=6` or
    /// when `first_week_contains_date` is not in `1..=7`.
    pub fn new(
        week_starts_on: i64,
        first_week_contains_date: i64,
    ) -> Result<WeekConfig, Error> {
        if !(0..=6).contains(&week_starts_on) {
            return Err(Error::range("weekStartsOn", week_starts_on, 0, 6));
        }
        if !(1..=7).contains(&first_week_contains_date) {
            return Err(Error::range(
                "firstWeekContainsDate",
                first_week_contains_date,
                1,
                7,
            ));
        }
        Ok(WeekConfig {
            week_start: Weekday::from_sunday_zero_offset(week_starts_on)?,
            // OK because we checked the range above.
            first_week_contains_date: first_week_contains_date as i8,
        })
    }

    /// Returns the day on which weeks start.
    #[inline]
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Returns the day of Farvardin that the first week must contain.
    #[inline]
    pub fn first_week_contains_date(&self) -> i8 {
        self.first_week_contains_date
    }
}

/// Week numbering.
impl Calendar {
    /// Returns local midnight of the most recent day, on or before the given
    /// timestamp, that starts a week.
    ///
    /// # Errors
    ///
    /// This returns an error when the week start option resolves to a value
    /// outside `0..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp, WeekOptions};
    ///
    /// let cal = Calendar::UTC;
    /// // A Tuesday afternoon.
    /// let ts = Timestamp::from_gregorian(2014, 9, 2, 11, 55, 0, 0);
    /// assert_eq!(
    ///     cal.start_of_week(ts, &WeekOptions::new())?,
    ///     Timestamp::from_gregorian(2014, 8, 30, 0, 0, 0, 0),
    /// );
    /// assert_eq!(
    ///     cal.start_of_week(ts, &WeekOptions::new().week_starts_on(1))?,
    ///     Timestamp::from_gregorian(2014, 9, 1, 0, 0, 0, 0),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn start_of_week(
        &self,
        ts: Timestamp,
        options: &WeekOptions,
    ) -> Result<Timestamp, Error> {
        let week_start = options.resolve_week_start()?;
        Ok(self.start_of_week_with(ts, week_start))
    }

    /// Returns local midnight of the first day of the week-year containing
    /// the given timestamp.
    ///
    /// # Errors
    ///
    /// This returns an error when either week option resolves to a value
    /// outside its valid range.
    pub fn start_of_week_year(
        &self,
        ts: Timestamp,
        options: &WeekOptions,
    ) -> Result<Timestamp, Error> {
        let config = options.resolve()?;
        Ok(match self.week_year_with(ts, config) {
            None => Timestamp::INVALID,
            Some(year) => self.start_of_week_year_for(year, config),
        })
    }

    /// Returns the week-year of the given timestamp.
    ///
    /// This is usually the Jalali year of the timestamp, but it may be one
    /// more for dates in the last days of Esfand, or one less for dates in
    /// the first days of Farvardin. `None` is returned when the timestamp is
    /// invalid.
    ///
    /// # Errors
    ///
    /// This returns an error when either week option resolves to a value
    /// outside its valid range.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp, WeekOptions};
    ///
    /// let cal = Calendar::UTC;
    /// let options = WeekOptions::new();
    /// // Saturday 1383-12-29 starts the week containing 1384-01-01.
    /// let ts = Timestamp::from_gregorian(2005, 3, 19, 0, 0, 0, 0);
    /// assert_eq!(cal.week_year(ts, &options)?, Some(1384));
    /// // But the millisecond before is still in week-year 1383.
    /// let ts = Timestamp::from_gregorian(2005, 3, 18, 23, 59, 59, 999);
    /// assert_eq!(cal.week_year(ts, &options)?, Some(1383));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn week_year(
        &self,
        ts: Timestamp,
        options: &WeekOptions,
    ) -> Result<Option<i64>, Error> {
        let config = options.resolve()?;
        Ok(self.week_year_with(ts, config))
    }

    /// Returns the week number of the given timestamp within its week-year,
    /// starting at `1`.
    ///
    /// `None` is returned when the timestamp is invalid, or when the start
    /// of its week-year is outside the supported range.
    ///
    /// # Errors
    ///
    /// This returns an error when either week option resolves to a value
    /// outside its valid range.
    pub fn week(
        &self,
        ts: Timestamp,
        options: &WeekOptions,
    ) -> Result<Option<i64>, Error> {
        let config = options.resolve()?;
        Ok(self.week_with(ts, config))
    }

    /// Moves the given timestamp by whole weeks so that it falls in the
    /// given week number, keeping its day of the week and time of day.
    ///
    /// # Errors
    ///
    /// This returns an error when either week option resolves to a value
    /// outside its valid range.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp, WeekOptions};
    ///
    /// let cal = Calendar::UTC;
    /// // 1388-09-11
    /// let ts = Timestamp::from_gregorian(2009, 12, 2, 0, 0, 0, 0);
    /// assert_eq!(
    ///     cal.set_week(ts, 1, &WeekOptions::new())?,
    ///     // 1388-01-05
    ///     Timestamp::from_gregorian(2009, 3, 25, 0, 0, 0, 0),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_week(
        &self,
        ts: Timestamp,
        week: i64,
        options: &WeekOptions,
    ) -> Result<Timestamp, Error> {
        let config = options.resolve()?;
        let Some(current) = self.week_with(ts, config) else {
            return Ok(Timestamp::INVALID);
        };
        let weeks = i128::from(current) - i128::from(week);
        Ok(ts.add_milliseconds(-weeks * 7 * i128::from(MILLIS_PER_DAY)))
    }

    /// Sets the day of the week of the given timestamp, within the week
    /// (as determined by the week start option) that contains it.
    ///
    /// Days are numbered from `0` (Sunday) to `6` (Saturday). Values
    /// outside that range select a day in a later or earlier week: `7` is
    /// Sunday of the following week, and `-1` is Saturday of the preceding
    /// one, measured from the start of the current week.
    ///
    /// # Errors
    ///
    /// This returns an error when the week start option resolves to a value
    /// outside `0..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp, WeekOptions};
    ///
    /// let cal = Calendar::UTC;
    /// // Monday 1393-06-10.
    /// let ts = Timestamp::from_gregorian(2014, 9, 1, 0, 0, 0, 0);
    /// // Weeks start on Saturday by default, so Sunday is before Monday.
    /// assert_eq!(
    ///     cal.set_day_of_week(ts, 0, &WeekOptions::new())?,
    ///     Timestamp::from_gregorian(2014, 8, 31, 0, 0, 0, 0),
    /// );
    /// // But if weeks start on Monday, then Sunday is the end of the week.
    /// assert_eq!(
    ///     cal.set_day_of_week(ts, 0, &WeekOptions::new().week_starts_on(1))?,
    ///     Timestamp::from_gregorian(2014, 9, 7, 0, 0, 0, 0),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_day_of_week(
        &self,
        ts: Timestamp,
        day: i64,
        options: &WeekOptions,
    ) -> Result<Timestamp, Error> {
        let week_start = options.resolve_week_start()?;
        let Some(current) = self.day_of_week(ts) else {
            return Ok(Timestamp::INVALID);
        };
        // Offsets are relative to the start of the week.
        let delta = 7 - i128::from(week_start.to_sunday_zero_offset());
        let current =
            (i128::from(current.to_sunday_zero_offset()) + delta) % 7;
        let day = i128::from(day);
        let days = if (0..=6).contains(&day) {
            (day + delta) % 7 - current
        } else {
            day - current
        };
        Ok(ts.add_milliseconds(days * i128::from(MILLIS_PER_DAY)))
    }

    /// Returns the nearest timestamp strictly before the given one that
    /// falls on the given day of the week, at the same time of day.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp, Weekday};
    ///
    /// let cal = Calendar::UTC;
    /// // Friday 1400-03-14.
    /// let friday = Timestamp::from_gregorian(2021, 6, 4, 0, 0, 0, 0);
    /// // Saturday 1400-03-15.
    /// let ts = Timestamp::from_gregorian(2021, 6, 5, 0, 0, 0, 0);
    /// assert_eq!(cal.previous_weekday(ts, Weekday::Friday), friday);
    /// // A Friday maps to the Friday one week earlier.
    /// assert_eq!(
    ///     cal.previous_weekday(friday, Weekday::Friday),
    ///     Timestamp::from_gregorian(2021, 5, 28, 0, 0, 0, 0),
    /// );
    /// ```
    pub fn previous_weekday(
        &self,
        ts: Timestamp,
        weekday: Weekday,
    ) -> Timestamp {
        let Some(current) = self.day_of_week(ts) else {
            trace!("previous weekday of invalid timestamp");
            return Timestamp::INVALID;
        };
        let mut days = current.since(weekday);
        if days == 0 {
            days = 7;
        }
        ts.add_milliseconds(-i128::from(days) * i128::from(MILLIS_PER_DAY))
    }

    pub(crate) fn start_of_week_with(
        &self,
        ts: Timestamp,
        week_start: Weekday,
    ) -> Timestamp {
        let Some((epoch_day, _)) = self.to_day_time(ts) else {
            return Timestamp::INVALID;
        };
        let days = Weekday::from_epoch_day(epoch_day).since(week_start);
        let epoch_day = IEpochDay {
            epoch_day: epoch_day.epoch_day - i64::from(days),
        };
        self.from_day_time(epoch_day, ITime::ZERO)
    }

    /// Returns the start of the given week-year.
    ///
    /// This builds a reference date at local midnight of the configured day
    /// of Farvardin in `year`, and then finds the start of its week.
    fn start_of_week_year_for(
        &self,
        year: i64,
        config: WeekConfig,
    ) -> Timestamp {
        let reference = self.to_timestamp(JalaliFields::date(
            year,
            0,
            i64::from(config.first_week_contains_date),
        ));
        self.start_of_week_with(reference, config.week_start)
    }

    fn week_year_with(
        &self,
        ts: Timestamp,
        config: WeekConfig,
    ) -> Option<i64> {
        let millis = ts.as_millisecond()?;
        let year = self.get(ts, Field::Year)?;
        let start_of_next = self
            .start_of_week_year_for(year + 1, config)
            .as_millisecond();
        let start_of_this =
            self.start_of_week_year_for(year, config).as_millisecond();
        // A week-year start beyond the supported range can only be in the
        // far future for `year + 1` and the far past for `year`.
        if start_of_next.map_or(false, |start| millis >= start) {
            Some(year + 1)
        } else if start_of_this.map_or(true, |start| millis >= start) {
            Some(year)
        } else {
            Some(year - 1)
        }
    }

    fn week_with(&self, ts: Timestamp, config: WeekConfig) -> Option<i64> {
        let week_year = self.week_year_with(ts, config)?;
        let start_of_week =
            self.start_of_week_with(ts, config.week_start).as_millisecond()?;
        let start_of_week_year = self
            .start_of_week_year_for(week_year, config)
            .as_millisecond()?;
        let weeks = (start_of_week - start_of_week_year)
            .div_euclid(7 * MILLIS_PER_DAY);
        Some(weeks + 1)
    }
}
