/*!
Calendar arithmetic: adding durations and measuring differences.

Arithmetic never fails because of the timestamps it is given. An invalid
input, or a result outside the supported range, produces
[`Timestamp::INVALID`] for timestamp results and `None` for integer results.
The only errors returned from this module are for configuration values out
of range, like the `nearest_to` parameter of
[`Calendar::round_to_nearest_minutes`].
*/

use core::cmp::Ordering;

use crate::{
    calendar::{days_in_month, Calendar},
    duration::Duration,
    error::Error,
    fields::{Field, JalaliFields},
    round::RoundingMethod,
    timestamp::Timestamp,
    util::itime::MILLIS_PER_DAY,
};

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// Compares two timestamps in ascending order.
///
/// This returns `None` when either timestamp is invalid. Otherwise, it
/// returns `Ordering::Less` when `a` is before `b`.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
///
/// use jalali::{compare_asc, Timestamp};
///
/// let a = Timestamp::from_millisecond(1);
/// let b = Timestamp::from_millisecond(2);
/// assert_eq!(compare_asc(a, b), Some(Ordering::Less));
/// assert_eq!(compare_asc(b, a), Some(Ordering::Greater));
/// assert_eq!(compare_asc(a, Timestamp::INVALID), None);
/// ```
#[inline]
pub fn compare_asc(a: Timestamp, b: Timestamp) -> Option<Ordering> {
    Some(a.as_millisecond()?.cmp(&b.as_millisecond()?))
}

/// Returns `-1`, `0` or `1`. Callers have already checked validity.
fn signum(ordering: Ordering) -> i64 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Arithmetic.
impl Calendar {
    /// Adds a duration to a timestamp.
    ///
    /// The duration is applied in three phases, in this order:
    ///
    /// 1. Years and months, as a number of months via
    /// [`Calendar::add_months`].
    /// 2. Weeks and days, as a number of days via [`Calendar::add_days`].
    /// 3. Hours, minutes and seconds, as an exact number of milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp, ToDuration};
    ///
    /// let cal = Calendar::UTC;
    /// // 1399-11-30, the last day of Bahman.
    /// let ts = Timestamp::from_gregorian(2021, 2, 18, 10, 0, 0, 0);
    /// // Esfand 1399 has 30 days, so adding a month lands on its last day.
    /// assert_eq!(
    ///     cal.add(ts, &1.months().hours(3)),
    ///     Timestamp::from_gregorian(2021, 3, 20, 13, 0, 0, 0),
    /// );
    /// // But Esfand 1400 has only 29 days, so the day is clamped.
    /// assert_eq!(
    ///     cal.add(ts, &1.years().months(1)),
    ///     Timestamp::from_gregorian(2022, 3, 20, 10, 0, 0, 0),
    /// );
    /// ```
    pub fn add(&self, ts: Timestamp, duration: &Duration) -> Timestamp {
        self.add_signed(ts, duration, 1)
    }

    /// Subtracts a duration from a timestamp.
    ///
    /// This is the same as adding the negation of the duration, with the
    /// same three phases as [`Calendar::add`].
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Duration, Timestamp};
    ///
    /// let cal = Calendar::UTC;
    /// let ts = Timestamp::from_gregorian(2017, 6, 15, 15, 29, 20, 0);
    /// let duration = Duration::new()
    ///     .years(2)
    ///     .months(9)
    ///     .weeks(1)
    ///     .days(7)
    ///     .hours(5)
    ///     .minutes(9)
    ///     .seconds(30);
    /// // 1396-03-25 15:29:20 minus 2 years and 9 months is 1393-06-25,
    /// // then minus 14 days is 1393-06-11.
    /// assert_eq!(
    ///     cal.sub(ts, &duration),
    ///     Timestamp::from_gregorian(2014, 9, 2, 10, 19, 50, 0),
    /// );
    /// ```
    pub fn sub(&self, ts: Timestamp, duration: &Duration) -> Timestamp {
        self.add_signed(ts, duration, -1)
    }

    /// Adds the given number of Jalali months to a timestamp.
    ///
    /// The time of day is kept. When the day of the month doesn't exist in
    /// the target month, the result is the last day of the target month.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, JalaliFields};
    ///
    /// let cal = Calendar::UTC;
    /// let ts = cal.to_timestamp(JalaliFields::date(1400, 5, 31));
    /// // Mehr only has 30 days.
    /// let got = cal.add_months(ts, 1);
    /// assert_eq!(cal.to_fields(got), Some(JalaliFields::date(1400, 6, 30)));
    /// let got = cal.add_months(ts, -1);
    /// assert_eq!(cal.to_fields(got), Some(JalaliFields::date(1400, 4, 31)));
    /// ```
    pub fn add_months(&self, ts: Timestamp, months: i64) -> Timestamp {
        self.add_months_wide(ts, i128::from(months))
    }

    /// Adds the given number of days to a timestamp.
    ///
    /// Since calendars use a fixed offset, every day is exactly 24 hours
    /// long and the time of day is always kept.
    pub fn add_days(&self, ts: Timestamp, days: i64) -> Timestamp {
        ts.add_milliseconds(i128::from(days) * i128::from(MILLIS_PER_DAY))
    }

    /// Returns the difference between the Jalali year and month of two
    /// timestamps, in months, ignoring the day and time.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp};
    ///
    /// let cal = Calendar::UTC;
    /// // 1393-05-10 and 1393-04-31.
    /// let a = Timestamp::from_gregorian(2014, 8, 1, 0, 0, 0, 0);
    /// let b = Timestamp::from_gregorian(2014, 7, 22, 0, 0, 0, 0);
    /// assert_eq!(cal.difference_in_calendar_months(a, b), Some(1));
    /// assert_eq!(cal.difference_in_calendar_months(b, a), Some(-1));
    /// ```
    pub fn difference_in_calendar_months(
        &self,
        a: Timestamp,
        b: Timestamp,
    ) -> Option<i64> {
        let (a, b) = (self.to_fields(a)?, self.to_fields(b)?);
        Some((a.year - b.year) * 12 + (a.month - b.month))
    }

    /// Returns the number of full Jalali months between two timestamps.
    ///
    /// The result is negative when `a` is before `b`.
    ///
    /// A month is full when shifting `a` by that many months toward `b`
    /// doesn't overshoot `b`. There are two exceptions to make months of
    /// different lengths compare sensibly:
    ///
    /// * Day 29 or 30 of Esfand counts as day 30 when shifting, since
    /// Esfand is shorter than every other month.
    /// * When `a` is after `b`, `a` is on the last day of its month and the
    /// months are adjacent, the month counts as full. For example, from 31
    /// Shahrivar to 30 Mehr is one full month.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp};
    ///
    /// let cal = Calendar::UTC;
    /// let a = Timestamp::from_gregorian(2012, 7, 2, 18, 0, 0, 0);
    /// let b = Timestamp::from_gregorian(2011, 7, 2, 6, 0, 0, 0);
    /// assert_eq!(cal.difference_in_months(a, b), Some(12));
    /// assert_eq!(cal.difference_in_months(b, a), Some(-12));
    ///
    /// // 1398-12-29, the last day of a common year, and 1398-11-30.
    /// let a = Timestamp::from_gregorian(2020, 3, 19, 0, 0, 0, 0);
    /// let b = Timestamp::from_gregorian(2020, 2, 19, 0, 0, 0, 0);
    /// assert_eq!(cal.difference_in_months(a, b), Some(1));
    /// ```
    pub fn difference_in_months(
        &self,
        a: Timestamp,
        b: Timestamp,
    ) -> Option<i64> {
        let sign = signum(compare_asc(a, b)?);
        let difference = self.difference_in_calendar_months(a, b)?.abs();
        if difference < 1 {
            return Some(0);
        }

        let mut shifted = a;
        let fields = self.to_fields(shifted)?;
        if fields.month == 11 && fields.day > 28 {
            shifted = self.set(shifted, Field::Day, 30);
        }
        let month = self.get(shifted, Field::Month)?;
        shifted = self.set(shifted, Field::Month, month - sign * difference);

        let mut is_last_month_not_full = compare_asc(shifted, b)
            .map_or(false, |ordering| signum(ordering) == -sign);
        if self.is_last_day_of_month(a) == Some(true)
            && difference == 1
            && compare_asc(a, b) == Some(Ordering::Greater)
        {
            is_last_month_not_full = false;
        }
        Some(sign * (difference - i64::from(is_last_month_not_full)))
    }

    /// Returns the number of Jalali quarters between two timestamps.
    ///
    /// This is the number of full months divided by `3`, rounded according
    /// to the given method.
    pub fn difference_in_quarters(
        &self,
        a: Timestamp,
        b: Timestamp,
        method: RoundingMethod,
    ) -> Option<i64> {
        let months = self.difference_in_months(a, b)?;
        Some(method.round(months, 3))
    }

    /// Returns the number of weeks between two timestamps.
    ///
    /// This is the number of full days divided by `7`, rounded according to
    /// the given method.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, RoundingMethod, Timestamp};
    ///
    /// let cal = Calendar::UTC;
    /// let a = Timestamp::from_gregorian(2014, 7, 10, 18, 0, 0, 0);
    /// let b = Timestamp::from_gregorian(2014, 6, 29, 6, 0, 0, 0);
    /// // 11 full days.
    /// assert_eq!(cal.difference_in_weeks(a, b, RoundingMethod::Trunc), Some(1));
    /// assert_eq!(cal.difference_in_weeks(a, b, RoundingMethod::Round), Some(2));
    /// ```
    pub fn difference_in_weeks(
        &self,
        a: Timestamp,
        b: Timestamp,
        method: RoundingMethod,
    ) -> Option<i64> {
        let days = self.difference_in_days(a, b)?;
        Some(method.round(days, 7))
    }

    /// Returns the number of full days between two timestamps.
    pub fn difference_in_days(
        &self,
        a: Timestamp,
        b: Timestamp,
    ) -> Option<i64> {
        let millis = self.difference_in_milliseconds(a, b)?;
        Some(RoundingMethod::Trunc.round(millis, MILLIS_PER_DAY))
    }

    /// Returns the number of hours between two timestamps, rounded
    /// according to the given method.
    pub fn difference_in_hours(
        &self,
        a: Timestamp,
        b: Timestamp,
        method: RoundingMethod,
    ) -> Option<i64> {
        let millis = self.difference_in_milliseconds(a, b)?;
        Some(method.round(millis, MILLIS_PER_HOUR))
    }

    /// Returns the number of minutes between two timestamps, rounded
    /// according to the given method.
    pub fn difference_in_minutes(
        &self,
        a: Timestamp,
        b: Timestamp,
        method: RoundingMethod,
    ) -> Option<i64> {
        let millis = self.difference_in_milliseconds(a, b)?;
        Some(method.round(millis, MILLIS_PER_MINUTE))
    }

    /// Returns the number of seconds between two timestamps, rounded
    /// according to the given method.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, RoundingMethod, Timestamp};
    ///
    /// let cal = Calendar::UTC;
    /// let a = Timestamp::from_gregorian(2014, 7, 2, 12, 30, 6, 29);
    /// let b = Timestamp::from_gregorian(2014, 7, 2, 12, 30, 20, 28);
    /// assert_eq!(cal.difference_in_seconds(a, b, RoundingMethod::Trunc), Some(-13));
    /// assert_eq!(cal.difference_in_seconds(a, b, RoundingMethod::Floor), Some(-14));
    /// ```
    pub fn difference_in_seconds(
        &self,
        a: Timestamp,
        b: Timestamp,
        method: RoundingMethod,
    ) -> Option<i64> {
        let millis = self.difference_in_milliseconds(a, b)?;
        Some(method.round(millis, MILLIS_PER_SECOND))
    }

    /// Returns the number of milliseconds between two timestamps.
    ///
    /// This doesn't depend on the calendar, but is provided here for
    /// symmetry with the other differences.
    pub fn difference_in_milliseconds(
        &self,
        a: Timestamp,
        b: Timestamp,
    ) -> Option<i64> {
        // Valid timestamps are within 8.64e15 of the epoch, so this can't
        // overflow.
        Some(a.as_millisecond()? - b.as_millisecond()?)
    }

    /// Rounds a timestamp to the nearest multiple of `nearest_to` minutes
    /// within its hour.
    ///
    /// Seconds are taken into account and milliseconds are discarded. A
    /// timestamp exactly between two multiples rounds up.
    ///
    /// # Errors
    ///
    /// This returns an error when `nearest_to` is not in `1..=30`.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp};
    ///
    /// let cal = Calendar::UTC;
    /// let ts = Timestamp::from_gregorian(2014, 7, 10, 12, 12, 34, 0);
    /// assert_eq!(
    ///     cal.round_to_nearest_minutes(ts, 1)?,
    ///     Timestamp::from_gregorian(2014, 7, 10, 12, 13, 0, 0),
    /// );
    /// assert_eq!(
    ///     cal.round_to_nearest_minutes(ts, 15)?,
    ///     Timestamp::from_gregorian(2014, 7, 10, 12, 15, 0, 0),
    /// );
    /// assert!(cal.round_to_nearest_minutes(ts, 31).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn round_to_nearest_minutes(
        &self,
        ts: Timestamp,
        nearest_to: i64,
    ) -> Result<Timestamp, Error> {
        if !(1..=30).contains(&nearest_to) {
            return Err(Error::range("nearestTo", nearest_to, 1, 30));
        }
        let Some(fields) = self.to_fields(ts) else {
            trace!("rounding invalid timestamp to nearest minutes");
            return Ok(Timestamp::INVALID);
        };
        let seconds = fields.minute * 60 + fields.second;
        let increment = nearest_to * 60;
        let mut minute = (seconds / increment) * nearest_to;
        if 2 * (seconds % increment) >= increment {
            minute += nearest_to;
        }
        Ok(self.to_timestamp(JalaliFields {
            minute,
            second: 0,
            millisecond: 0,
            ..fields
        }))
    }

    fn add_signed(
        &self,
        ts: Timestamp,
        duration: &Duration,
        sign: i128,
    ) -> Timestamp {
        if !ts.is_valid() {
            trace!("adding {duration:?} to invalid timestamp");
            return Timestamp::INVALID;
        }
        let ts = self.add_months_wide(ts, sign * duration.total_months());
        let ts = ts.add_milliseconds(
            sign * duration.total_days() * i128::from(MILLIS_PER_DAY),
        );
        ts.add_milliseconds(sign * duration.clock_milliseconds())
    }

    /// Like `add_months`, but accepts the wider month counts that a
    /// duration with both years and months can produce.
    fn add_months_wide(&self, ts: Timestamp, months: i128) -> Timestamp {
        let Some(fields) = self.to_fields(ts) else {
            return Timestamp::INVALID;
        };
        if months == 0 {
            return ts;
        }
        let month = i128::from(fields.month) + months;
        let Ok(year) =
            i64::try_from(i128::from(fields.year) + month.div_euclid(12))
        else {
            return Timestamp::INVALID;
        };
        // OK because the remainder is always in 0..=11.
        let month = month.rem_euclid(12) as i64;
        let day = fields.day.min(i64::from(days_in_month(year, month)));
        self.to_timestamp(JalaliFields { year, month, day, ..fields })
    }
}

#[cfg(test)]
mod tests {
    use crate::{duration::ToDuration, offset::Offset};

    use super::*;

    fn greg(y: i64, m: i64, d: i64) -> Timestamp {
        Timestamp::from_gregorian(y, m, d, 0, 0, 0, 0)
    }

    #[test]
    fn add_months_clamps_to_end_of_month() {
        let cal = Calendar::UTC;
        let start = cal.to_timestamp(JalaliFields::date(1399, 5, 31));
        let got = cal.add_months(start, 6);
        assert_eq!(cal.to_fields(got), Some(JalaliFields::date(1399, 11, 30)));
        let got = cal.add_months(start, 18);
        assert_eq!(cal.to_fields(got), Some(JalaliFields::date(1400, 11, 29)));
        let got = cal.add_months(start, -6);
        assert_eq!(cal.to_fields(got), Some(JalaliFields::date(1398, 11, 29)));
        assert!(!cal.add_months(Timestamp::MAX, 1).is_valid());
        assert!(!cal.add_months(Timestamp::INVALID, 0).is_valid());
    }

    #[test]
    fn add_phases_happen_in_order() {
        let cal = Calendar::UTC;
        // 1400-06-30. Adding the month first gives 1400-07-30 and then the
        // day moves into 1400-08-01. Adding the day first would give
        // 1400-06-31 and then 1400-07-30.
        let ts = cal.to_timestamp(JalaliFields::date(1400, 5, 30));
        let got = cal.add(ts, &1.months().days(1));
        assert_eq!(cal.to_fields(got), Some(JalaliFields::date(1400, 7, 1)));
        let got = cal.sub(got, &1.days());
        assert_eq!(cal.to_fields(got), Some(JalaliFields::date(1400, 6, 30)));
    }

    #[test]
    fn add_extreme_durations_are_invalid() {
        let cal = Calendar::UTC;
        let ts = Timestamp::UNIX_EPOCH;
        assert!(!cal.add(ts, &i64::MAX.years().months(i64::MAX)).is_valid());
        assert!(!cal.sub(ts, &i64::MIN.weeks()).is_valid());
        assert!(!cal.add(ts, &i64::MAX.hours()).is_valid());
        assert!(cal.add(ts, &Duration::ZERO).is_valid());
    }

    #[test]
    fn difference_in_months_fixtures() {
        let cal = Calendar::UTC;
        let cases = [
            (greg(2021, 3, 20), greg(2021, 2, 18), 1),
            (greg(2021, 11, 30), greg(2021, 10, 31), 1),
            (greg(2021, 10, 31), greg(2021, 9, 30), 1),
            (greg(2021, 5, 21), greg(2020, 11, 20), 6),
            (greg(2021, 9, 30), greg(2021, 10, 31), -1),
            (greg(2014, 8, 1), greg(2014, 7, 31), 0),
            (greg(2014, 7, 31), greg(2014, 8, 1), 0),
            (greg(2014, 9, 6), greg(2014, 8, 6), 1),
            (greg(2014, 9, 5), greg(2014, 9, 5), 0),
        ];
        for (a, b, expected) in cases {
            assert_eq!(
                cal.difference_in_months(a, b),
                Some(expected),
                "difference_in_months({a}, {b})",
            );
        }
    }

    #[test]
    fn round_to_nearest_minutes_edges() {
        let cal = Calendar::UTC;
        let at = |h, m, s| Timestamp::from_gregorian(2014, 7, 10, h, m, s, 0);
        let round = |ts, nearest_to| {
            cal.round_to_nearest_minutes(ts, nearest_to).unwrap()
        };
        assert_eq!(round(at(12, 12, 30), 1), at(12, 13, 0));
        assert_eq!(round(at(12, 12, 29), 1), at(12, 12, 0));
        assert_eq!(round(at(12, 7, 30), 15), at(12, 15, 0));
        assert_eq!(round(at(12, 7, 29), 15), at(12, 0, 0));
        // Rounding up can carry into the next day.
        assert_eq!(
            round(at(23, 59, 45), 30),
            Timestamp::from_gregorian(2014, 7, 11, 0, 0, 0, 0),
        );
        // Milliseconds are dropped without taking part in rounding.
        assert_eq!(
            round(Timestamp::from_gregorian(2014, 7, 10, 12, 12, 29, 999), 1),
            at(12, 12, 0),
        );
        let err = cal.round_to_nearest_minutes(at(0, 0, 0), 0).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"parameter 'nearestTo' with value 0 is not in the required range of 1..=30",
        );
        assert!(!cal
            .round_to_nearest_minutes(Timestamp::INVALID, 1)
            .unwrap()
            .is_valid());
    }

    #[test]
    fn offset_calendar_months() {
        // 2024-03-19T21:00Z is 1403-01-01 in Tehran but still 1402-12-29
        // in UTC.
        let tehran = Calendar::fixed(Offset::from_seconds(12_600).unwrap());
        let a = Timestamp::from_gregorian(2024, 3, 19, 21, 0, 0, 0);
        let b = Timestamp::from_gregorian(2024, 3, 18, 21, 0, 0, 0);
        assert_eq!(tehran.difference_in_calendar_months(a, b), Some(1));
        assert_eq!(Calendar::UTC.difference_in_calendar_months(a, b), Some(0));
    }

    quickcheck::quickcheck! {
        fn prop_calendar_months_antisymmetric(
            a: Timestamp,
            b: Timestamp
        ) -> bool {
            let cal = Calendar::UTC;
            let ab = cal.difference_in_calendar_months(a, b).unwrap();
            let ba = cal.difference_in_calendar_months(b, a).unwrap();
            ab == -ba
        }

        fn prop_zero_law(a: Timestamp, method: RoundingMethod) -> bool {
            let cal = Calendar::UTC;
            cal.difference_in_months(a, a) == Some(0)
                && cal.difference_in_calendar_months(a, a) == Some(0)
                && cal.difference_in_quarters(a, a, method) == Some(0)
                && cal.difference_in_weeks(a, a, method) == Some(0)
                && cal.difference_in_days(a, a) == Some(0)
                && cal.difference_in_hours(a, a, method) == Some(0)
                && cal.difference_in_minutes(a, a, method) == Some(0)
                && cal.difference_in_seconds(a, a, method) == Some(0)
                && cal.difference_in_milliseconds(a, a) == Some(0)
        }

        fn prop_rounding_order(a: Timestamp, b: Timestamp) -> bool {
            let cal = Calendar::UTC;
            let seconds =
                |method| cal.difference_in_seconds(a, b, method).unwrap();
            let floor = seconds(RoundingMethod::Floor);
            let round = seconds(RoundingMethod::Round);
            let ceil = seconds(RoundingMethod::Ceil);
            let trunc = seconds(RoundingMethod::Trunc);
            let millis = cal.difference_in_milliseconds(a, b).unwrap();
            floor <= round
                && round <= ceil
                && (trunc == 0 || trunc.signum() == millis.signum())
        }

        fn prop_invalid_propagates(
            a: Timestamp,
            duration: Duration,
            method: RoundingMethod
        ) -> bool {
            let cal = Calendar::UTC;
            let bad = Timestamp::INVALID;
            cal.difference_in_months(a, bad).is_none()
                && cal.difference_in_months(bad, a).is_none()
                && cal.difference_in_calendar_months(bad, a).is_none()
                && cal.difference_in_quarters(bad, a, method).is_none()
                && cal.difference_in_weeks(a, bad, method).is_none()
                && cal.difference_in_seconds(bad, a, method).is_none()
                && cal.difference_in_milliseconds(a, bad).is_none()
                && !cal.add(bad, &duration).is_valid()
                && !cal.sub(bad, &duration).is_valid()
        }

        fn prop_months_never_exceed_calendar_months(
            a: Timestamp,
            b: Timestamp
        ) -> bool {
            let cal = Calendar::UTC;
            let full = cal.difference_in_months(a, b).unwrap();
            let calendar = cal.difference_in_calendar_months(a, b).unwrap();
            full.abs() <= calendar.abs()
                && (full == 0 || full.signum() == calendar.signum())
        }

        fn prop_sub_undoes_add_for_exact_units(
            a: Timestamp,
            duration: Duration
        ) -> bool {
            let cal = Calendar::UTC;
            let clock = Duration::new()
                .weeks(duration.get_weeks())
                .days(duration.get_days())
                .hours(duration.get_hours())
                .minutes(duration.get_minutes())
                .seconds(duration.get_seconds());
            let added = cal.add(a, &clock);
            if !added.is_valid() {
                return true;
            }
            // The days phase of the subtraction can leave the supported
            // range before the clock phase brings it back.
            let back = cal.sub(added, &clock);
            !back.is_valid() || back == a
        }
    }
}
