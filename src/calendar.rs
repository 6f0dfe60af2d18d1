use crate::{
    fields::{Field, JalaliFields},
    offset::Offset,
    timestamp::Timestamp,
    util::itime::{self, IEpochDay, IMillis, ITime},
    week::Weekday,
};

/// The Jalali calendar interpreted at a fixed offset from UTC.
///
/// A calendar is the engine through which every calendar aware operation in
/// this crate runs. It knows how to decompose a [`Timestamp`] into
/// [`JalaliFields`] and how to compose fields back into a timestamp. Field
/// access and mutation, week numbering (see the [`week`](crate::week)
/// module) and calendar arithmetic are all provided as methods on this type.
///
/// A calendar is a small `Copy` value with no internal state. The "local"
/// time it computes fields in is UTC shifted by its [`Offset`].
/// [`Calendar::UTC`] is the variant with no shift.
///
/// # Example
///
/// ```
/// use jalali::{Calendar, Timestamp};
///
/// let ts = Timestamp::from_gregorian(2012, 7, 2, 18, 0, 0, 0);
/// let fields = Calendar::UTC.to_fields(ts).unwrap();
/// // Note that months are 0-indexed, so this is 12 Tir 1391.
/// assert_eq!((fields.year, fields.month, fields.day), (1391, 3, 12));
/// assert_eq!(fields.hour, 18);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Calendar {
    offset: Offset,
}

impl Calendar {
    /// The Jalali calendar in UTC.
    pub const UTC: Calendar = Calendar { offset: Offset::UTC };

    /// Creates a Jalali calendar whose fields are computed at the given
    /// fixed offset from UTC.
    #[inline]
    pub const fn fixed(offset: Offset) -> Calendar {
        Calendar { offset }
    }

    /// Returns the offset from UTC used by this calendar.
    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Decomposes a timestamp into Jalali fields.
    ///
    /// This returns `None` if and only if the timestamp is invalid.
    #[inline]
    pub fn to_fields(&self, ts: Timestamp) -> Option<JalaliFields> {
        let (epoch_day, time) = self.to_day_time(ts)?;
        let date = epoch_day.to_jalali();
        Some(JalaliFields {
            year: date.year,
            month: i64::from(date.month),
            day: i64::from(date.day),
            hour: i64::from(time.hour),
            minute: i64::from(time.minute),
            second: i64::from(time.second),
            millisecond: i64::from(time.millisecond),
        })
    }

    /// Composes Jalali fields into a timestamp.
    ///
    /// Out of range fields carry into their neighbors. If the resulting
    /// point in time is outside the supported range, then this returns
    /// [`Timestamp::INVALID`].
    ///
    /// # Example
    ///
    /// This shows that day `30` of Esfand only exists in leap years. In
    /// other years, it's the first day of the next year:
    ///
    /// ```
    /// use jalali::{Calendar, JalaliFields};
    ///
    /// let cal = Calendar::UTC;
    /// let ts = cal.to_timestamp(JalaliFields::date(1399, 11, 30));
    /// assert_eq!(cal.to_fields(ts), Some(JalaliFields::date(1399, 11, 30)));
    /// let ts = cal.to_timestamp(JalaliFields::date(1400, 11, 30));
    /// assert_eq!(cal.to_fields(ts), Some(JalaliFields::date(1401, 0, 1)));
    /// ```
    #[inline]
    pub fn to_timestamp(&self, fields: JalaliFields) -> Timestamp {
        let epoch_day =
            itime::jalali_epoch_day(fields.year, fields.month, fields.day);
        let local = itime::compose_millis(
            epoch_day,
            fields.hour,
            fields.minute,
            fields.second,
            fields.millisecond,
        );
        Timestamp::from_millis_i128(
            local - i128::from(self.offset.milliseconds()),
        )
    }

    /// Returns a single Jalali field of the given timestamp.
    ///
    /// This returns `None` if and only if the timestamp is invalid.
    #[inline]
    pub fn get(&self, ts: Timestamp, field: Field) -> Option<i64> {
        self.to_fields(ts).map(|fields| fields.get(field))
    }

    /// Sets a single Jalali field of the given timestamp.
    ///
    /// The other fields are left as they are, and then the result is
    /// normalized by carrying. For example, setting the day to `32` in a
    /// month with 31 days rolls into the first day of the following month.
    /// Nothing is clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Field, Timestamp};
    ///
    /// let cal = Calendar::UTC;
    /// // 1393-06-10 11:30, i.e., 2014-09-01 11:30.
    /// let ts = Timestamp::from_gregorian(2014, 9, 1, 11, 30, 0, 0);
    /// assert_eq!(
    ///     cal.set(ts, Field::Hour, 4),
    ///     Timestamp::from_gregorian(2014, 9, 1, 4, 30, 0, 0),
    /// );
    /// // Shahrivar has 31 days, so day 32 is the first day of Mehr.
    /// assert_eq!(
    ///     cal.set(ts, Field::Day, 32),
    ///     Timestamp::from_gregorian(2014, 9, 23, 11, 30, 0, 0),
    /// );
    /// ```
    #[inline]
    pub fn set(&self, ts: Timestamp, field: Field, value: i64) -> Timestamp {
        match self.to_fields(ts) {
            None => {
                trace!("setting {field} on invalid timestamp");
                Timestamp::INVALID
            }
            Some(fields) => self.to_timestamp(fields.with(field, value)),
        }
    }

    /// Like [`Calendar::set`], but accepts a floating point value.
    ///
    /// The value is truncated toward zero. Non-finite values produce
    /// [`Timestamp::INVALID`].
    #[inline]
    pub fn set_fractional(
        &self,
        ts: Timestamp,
        field: Field,
        value: f64,
    ) -> Timestamp {
        if !value.is_finite() {
            trace!("setting {field} to non-finite value {value}");
            return Timestamp::INVALID;
        }
        // Any finite `f64` beyond the range of `i64` saturates, and such
        // values are far outside the supported range regardless.
        self.set(ts, field, value as i64)
    }

    /// Returns the day of the week of the given timestamp in this calendar.
    #[inline]
    pub fn day_of_week(&self, ts: Timestamp) -> Option<Weekday> {
        let (epoch_day, _) = self.to_day_time(ts)?;
        Some(Weekday::from_epoch_day(epoch_day))
    }

    /// Returns the number of days in the Jalali month containing the given
    /// timestamp.
    #[inline]
    pub fn days_in_month(&self, ts: Timestamp) -> Option<i8> {
        let fields = self.to_fields(ts)?;
        Some(days_in_month(fields.year, fields.month))
    }

    /// Returns whether the Jalali year containing the given timestamp is a
    /// leap year.
    #[inline]
    pub fn in_leap_year(&self, ts: Timestamp) -> Option<bool> {
        let fields = self.to_fields(ts)?;
        Some(is_leap_year(fields.year))
    }

    /// Returns whether the given timestamp falls on the last day of its
    /// Jalali month.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp};
    ///
    /// let cal = Calendar::UTC;
    /// // 1400-08-30, the last day of Aban.
    /// let ts = Timestamp::from_gregorian(2021, 11, 21, 23, 0, 0, 0);
    /// assert_eq!(cal.is_last_day_of_month(ts), Some(true));
    /// // 1400-09-09.
    /// let ts = Timestamp::from_gregorian(2021, 11, 30, 0, 0, 0, 0);
    /// assert_eq!(cal.is_last_day_of_month(ts), Some(false));
    /// ```
    #[inline]
    pub fn is_last_day_of_month(&self, ts: Timestamp) -> Option<bool> {
        let fields = self.to_fields(ts)?;
        Some(fields.day == i64::from(days_in_month(fields.year, fields.month)))
    }

    /// Returns the timestamp at midnight at the start of the day containing
    /// the given timestamp, in this calendar's offset.
    #[inline]
    pub fn start_of_day(&self, ts: Timestamp) -> Timestamp {
        match self.to_day_time(ts) {
            None => Timestamp::INVALID,
            Some((epoch_day, _)) => self.from_day_time(epoch_day, ITime::ZERO),
        }
    }

    /// Splits a timestamp into a local epoch day and time of day.
    #[inline]
    pub(crate) fn to_day_time(
        &self,
        ts: Timestamp,
    ) -> Option<(IEpochDay, ITime)> {
        let millis = ts.as_millisecond()? + self.offset.milliseconds();
        Some(IMillis { millis }.to_day_time())
    }

    /// The inverse of `to_day_time`.
    #[inline]
    pub(crate) fn from_day_time(
        &self,
        epoch_day: IEpochDay,
        time: ITime,
    ) -> Timestamp {
        let local = itime::compose_millis(
            i128::from(epoch_day.epoch_day),
            0,
            0,
            0,
            i64::from(time.to_millisecond().millisecond),
        );
        Timestamp::from_millis_i128(
            local - i128::from(self.offset.milliseconds()),
        )
    }
}

/// Returns true if and only if the given Jalali year is a leap year.
///
/// Leap years follow the arithmetic 33-year cycle, in which years whose
/// remainder satisfies `(25 * year + 11) mod 33 < 8` have 366 days.
///
/// # Example
///
/// ```
/// use jalali::is_leap_year;
///
/// assert!(is_leap_year(1399));
/// assert!(!is_leap_year(1400));
/// assert!(is_leap_year(1403));
/// ```
#[inline]
pub fn is_leap_year(year: i64) -> bool {
    itime::is_leap_year(year)
}

/// Returns the number of days in the given 0-indexed Jalali month.
///
/// Months outside of `0..=11` carry into the year first, so month `12` of
/// year `1398` is Farvardin of `1399`.
///
/// # Example
///
/// ```
/// use jalali::days_in_month;
///
/// assert_eq!(days_in_month(1400, 0), 31);
/// assert_eq!(days_in_month(1400, 6), 30);
/// assert_eq!(days_in_month(1400, 11), 29);
/// assert_eq!(days_in_month(1399, 11), 30);
/// assert_eq!(days_in_month(1400, -1), 30);
/// ```
#[inline]
pub fn days_in_month(year: i64, month: i64) -> i8 {
    let year = year.saturating_add(month.div_euclid(12));
    // OK because the remainder is always in 0..=11.
    let month = month.rem_euclid(12) as i8;
    itime::days_in_month(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i64, m: i64, d: i64) -> Timestamp {
        Timestamp::from_gregorian(y, m, d, 0, 0, 0, 0)
    }

    #[test]
    fn fixtures_decompose() {
        let cal = Calendar::UTC;
        let date = |ts| {
            let f = cal.to_fields(ts).unwrap();
            (f.year, f.month + 1, f.day)
        };
        assert_eq!(date(greg(2012, 7, 2)), (1391, 4, 12));
        assert_eq!(date(greg(2011, 7, 2)), (1390, 4, 11));
        assert_eq!(date(greg(2020, 3, 19)), (1398, 12, 29));
        assert_eq!(date(greg(2021, 3, 20)), (1399, 12, 30));
        assert_eq!(date(greg(2021, 3, 21)), (1400, 1, 1));
        assert_eq!(date(greg(2021, 11, 30)), (1400, 9, 9));
        assert_eq!(date(greg(2021, 5, 21)), (1400, 2, 31));
        assert_eq!(date(greg(2020, 11, 20)), (1399, 8, 30));
        assert_eq!(date(greg(2005, 3, 19)), (1383, 12, 29));
        assert_eq!(date(greg(2004, 3, 20)), (1383, 1, 1));
    }

    #[test]
    fn invalid_propagates() {
        let cal = Calendar::UTC;
        let ts = Timestamp::INVALID;
        assert_eq!(cal.to_fields(ts), None);
        assert_eq!(cal.get(ts, Field::Year), None);
        assert!(!cal.set(ts, Field::Hour, 4).is_valid());
        assert!(!cal.start_of_day(ts).is_valid());
        assert_eq!(cal.day_of_week(ts), None);
        assert_eq!(cal.days_in_month(ts), None);
        assert_eq!(cal.in_leap_year(ts), None);
        assert_eq!(cal.is_last_day_of_month(ts), None);
    }

    #[test]
    fn set_fractional() {
        let cal = Calendar::UTC;
        let ts = Timestamp::from_gregorian(2014, 9, 1, 11, 30, 0, 0);
        let expected = Timestamp::from_gregorian(2014, 9, 1, 4, 30, 0, 0);
        assert_eq!(cal.set_fractional(ts, Field::Hour, 4.123), expected);
        assert!(!cal.set_fractional(ts, Field::Hour, f64::NAN).is_valid());
        assert!(
            !cal.set_fractional(ts, Field::Day, f64::INFINITY).is_valid()
        );
        assert!(!cal.set_fractional(ts, Field::Year, 1e300).is_valid());
    }

    #[test]
    fn set_out_of_range_is_invalid() {
        let cal = Calendar::UTC;
        let ts = Timestamp::UNIX_EPOCH;
        assert!(!cal.set(ts, Field::Year, 1_000_000).is_valid());
        assert!(!cal.set(ts, Field::Millisecond, i64::MAX).is_valid());
        assert!(cal.set(ts, Field::Year, -270_000).is_valid());
    }

    #[test]
    fn offset_shifts_fields() {
        // 2024-03-19T20:30Z is midnight of Nowruz 1403 in Tehran.
        let ts = Timestamp::from_gregorian(2024, 3, 19, 20, 30, 0, 0);
        let tehran =
            Calendar::fixed(Offset::from_seconds(3 * 3600 + 1800).unwrap());
        let local = tehran.to_fields(ts).unwrap();
        assert_eq!((local.year, local.month, local.day), (1403, 0, 1));
        assert_eq!(local.hour, 0);
        let utc = Calendar::UTC.to_fields(ts).unwrap();
        assert_eq!((utc.year, utc.month, utc.day), (1402, 11, 29));
        assert_eq!(tehran.start_of_day(ts), ts);
        assert_eq!(Calendar::UTC.start_of_day(ts), greg(2024, 3, 19));
        assert_eq!(tehran.day_of_week(ts), Some(Weekday::Wednesday));
        assert_eq!(Calendar::UTC.day_of_week(ts), Some(Weekday::Tuesday));
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip_utc(ts: Timestamp) -> bool {
            let cal = Calendar::UTC;
            cal.to_timestamp(cal.to_fields(ts).unwrap()) == ts
        }

        fn prop_roundtrip_offset(ts: Timestamp, seconds: i32) -> bool {
            let seconds = seconds.rem_euclid(2 * 50_400 + 1) - 50_400;
            let cal = Calendar::fixed(Offset::from_seconds(seconds).unwrap());
            match cal.to_fields(ts) {
                None => false,
                Some(fields) => cal.to_timestamp(fields) == ts,
            }
        }

        fn prop_fields_in_natural_ranges(ts: Timestamp) -> bool {
            let f = Calendar::UTC.to_fields(ts).unwrap();
            (0..12).contains(&f.month)
                && 1 <= f.day
                && f.day <= i64::from(days_in_month(f.year, f.month))
                && (0..24).contains(&f.hour)
                && (0..60).contains(&f.minute)
                && (0..60).contains(&f.second)
                && (0..1000).contains(&f.millisecond)
        }

        fn prop_start_of_day_is_midnight(ts: Timestamp) -> bool {
            let cal = Calendar::UTC;
            let start = cal.start_of_day(ts);
            let f = cal.to_fields(start).unwrap();
            let g = cal.to_fields(ts).unwrap();
            (f.hour, f.minute, f.second, f.millisecond) == (0, 0, 0, 0)
                && (f.year, f.month, f.day) == (g.year, g.month, g.day)
        }
    }
}
