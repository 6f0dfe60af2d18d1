/*!
This module defines the internal core calendar data types.

This includes a local millisecond count, days since the Unix epoch, Jalali
and Gregorian dates and clock times.

These types exist to provide a home for the core algorithms in this crate.
For example, converting from an epoch day to a Jalali calendar date. Every
public operation eventually bottoms out in one of these routines.

Decomposition routines (epoch day to date) assume their input is within the
supported timestamp range. Composition routines (date to epoch day) accept
arbitrary field values and carry out-of-range months and days into their
neighbors. They compute in `i128` so that no combination of `i64` inputs
can overflow. Callers are responsible for checking that the result is in
range.

# Naming

The types in this module are prefixed with letter `I` to make it clear that
they are internal types. Specifically, to distinguish them from this crate's
public types. For example, `JalaliFields` versus `IJalaliDate`.
*/

/// The number of milliseconds in a single civil day.
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// The largest magnitude, in milliseconds, of a valid timestamp.
///
/// This is the same range supported by ECMAScript's `Date`, which is the
/// interchange format this crate is designed to interoperate with.
pub(crate) const MAX_MILLIS: i64 = 8_640_000_000_000_000;

/// The Jalali day number (days since 1 Farvardin of year 1, starting at
/// zero) of the Unix epoch. That is, 1970-01-01 is 11 Dey 1348.
const UNIX_EPOCH_JALALI_DAY: i64 = 492_268;

/// The number of days before each Jalali month in a year, 0-indexed.
const DAYS_BEFORE_MONTH: [i16; 12] =
    [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// A count of milliseconds since the Unix epoch, already adjusted to some
/// local offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct IMillis {
    pub(crate) millis: i64,
}

impl IMillis {
    /// Splits this millisecond count into a day and a time within that day.
    #[inline(always)]
    pub(crate) const fn to_day_time(&self) -> (IEpochDay, ITime) {
        let epoch_day = self.millis.div_euclid(MILLIS_PER_DAY);
        let millisecond = self.millis.rem_euclid(MILLIS_PER_DAY) as i32;
        let time = ITimeMillisecond { millisecond }.to_time();
        (IEpochDay { epoch_day }, time)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct IEpochDay {
    pub(crate) epoch_day: i64,
}

impl IEpochDay {
    /// Converts days since the Unix epoch to a Jalali date.
    ///
    /// This estimates the year from the mean length of a year in the
    /// 33-year cycle and then corrects the estimate against the exact year
    /// start, which is at most one step away.
    #[inline(always)]
    pub(crate) const fn to_jalali(&self) -> IJalaliDate {
        let jday = self.epoch_day + UNIX_EPOCH_JALALI_DAY;
        let mut year = (33 * jday + 3).div_euclid(12_053) + 1;
        while year_start(year) > jday {
            year -= 1;
        }
        while year_start(year + 1) <= jday {
            year += 1;
        }
        let doy = jday - year_start(year);
        let (month, day) = if doy < 186 {
            (doy / 31, doy % 31 + 1)
        } else {
            let doy = doy - 186;
            (6 + doy / 30, doy % 30 + 1)
        };
        IJalaliDate { year, month: month as i8, day: day as i8 }
    }

    /// Converts days since the Unix epoch to a proleptic Gregorian date.
    ///
    /// Ref: <http://howardhinnant.github.io/date_algorithms.html#civil_from_days>
    #[inline(always)]
    pub(crate) const fn to_gregorian(&self) -> IGregorianDate {
        let z = self.epoch_day + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + (month <= 2) as i64;
        IGregorianDate { year, month: month as i8, day: day as i8 }
    }

    /// Returns the day of the week, where `0` is Sunday.
    ///
    /// The Unix epoch was a Thursday.
    #[inline(always)]
    pub(crate) const fn weekday(&self) -> i8 {
        (self.epoch_day + 4).rem_euclid(7) as i8
    }
}

/// A Jalali calendar date.
///
/// Unlike the public API, the month here is 0-indexed. Farvardin is `0`
/// and Esfand is `11`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct IJalaliDate {
    pub(crate) year: i64,
    pub(crate) month: i8,
    pub(crate) day: i8,
}

impl IJalaliDate {
    /// Converts a valid Jalali date to days since the Unix epoch.
    ///
    /// Production code composes through the carrying routines instead. This
    /// direct form is kept to check them against.
    #[cfg(test)]
    pub(crate) const fn to_epoch_day(&self) -> IEpochDay {
        let jday = year_start(self.year)
            + DAYS_BEFORE_MONTH[self.month as usize] as i64
            + (self.day as i64 - 1);
        IEpochDay { epoch_day: jday - UNIX_EPOCH_JALALI_DAY }
    }
}

/// A proleptic Gregorian calendar date with a 1-indexed month.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct IGregorianDate {
    pub(crate) year: i64,
    pub(crate) month: i8,
    pub(crate) day: i8,
}

/// Represents a clock time to millisecond precision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct ITime {
    pub(crate) hour: i8,
    pub(crate) minute: i8,
    pub(crate) second: i8,
    pub(crate) millisecond: i16,
}

impl ITime {
    pub(crate) const ZERO: ITime =
        ITime { hour: 0, minute: 0, second: 0, millisecond: 0 };

    #[inline(always)]
    pub(crate) const fn to_millisecond(&self) -> ITimeMillisecond {
        let mut millisecond: i32 = 0;
        millisecond += (self.hour as i32) * 3_600_000;
        millisecond += (self.minute as i32) * 60_000;
        millisecond += (self.second as i32) * 1_000;
        millisecond += self.millisecond as i32;
        ITimeMillisecond { millisecond }
    }
}

/// Represents a single point in the day, to millisecond precision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct ITimeMillisecond {
    pub(crate) millisecond: i32,
}

impl ITimeMillisecond {
    #[inline(always)]
    pub(crate) const fn to_time(&self) -> ITime {
        let mut millisecond = self.millisecond;
        let mut time = ITime::ZERO;
        if millisecond != 0 {
            time.hour = (millisecond / 3_600_000) as i8;
            millisecond %= 3_600_000;
            if millisecond != 0 {
                time.minute = (millisecond / 60_000) as i8;
                millisecond %= 60_000;
                if millisecond != 0 {
                    time.second = (millisecond / 1_000) as i8;
                    time.millisecond = (millisecond % 1_000) as i16;
                }
            }
        }
        time
    }
}

/// Returns the Jalali day number of 1 Farvardin of the given year.
///
/// The `(8y + 21) / 33` term counts the leap days before `year`. It agrees
/// with `is_leap_year` for every year.
#[inline(always)]
const fn year_start(year: i64) -> i64 {
    365 * (year - 1) + (8 * year + 21).div_euclid(33)
}

/// Converts possibly out-of-range Jalali fields to days since the Unix
/// epoch, carrying excess months into the year and excess days into the
/// month.
///
/// The month is 0-indexed. For example, month `12` of year `1400` is
/// Farvardin of `1401`, and day `0` of a month is the last day of the
/// previous month.
#[inline(always)]
pub(crate) const fn jalali_epoch_day(year: i64, month: i64, day: i64) -> i128 {
    let year = year as i128 + (month as i128).div_euclid(12);
    let month = (month as i128).rem_euclid(12);
    let year_start = 365 * (year - 1) + (8 * year + 21).div_euclid(33);
    let jday =
        year_start + DAYS_BEFORE_MONTH[month as usize] as i128 + day as i128
            - 1;
    jday - UNIX_EPOCH_JALALI_DAY as i128
}

/// Converts possibly out-of-range Gregorian fields to days since the Unix
/// epoch. The month is 1-indexed and carries like `jalali_epoch_day`.
///
/// Ref: <http://howardhinnant.github.io/date_algorithms.html#days_from_civil>
#[inline(always)]
pub(crate) const fn gregorian_epoch_day(
    year: i64,
    month: i64,
    day: i64,
) -> i128 {
    let month0 = month as i128 - 1;
    let mut year = year as i128 + month0.div_euclid(12);
    let month = month0.rem_euclid(12) + 1;
    if month <= 2 {
        year -= 1;
    }
    let era = year.div_euclid(400);
    let yoe = year.rem_euclid(400);
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + day as i128 - 1
}

/// Combines an epoch day and time fields into a millisecond count, carrying
/// out-of-range time fields into the day.
#[inline(always)]
pub(crate) const fn compose_millis(
    epoch_day: i128,
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
) -> i128 {
    epoch_day * (MILLIS_PER_DAY as i128)
        + (hour as i128) * 3_600_000
        + (minute as i128) * 60_000
        + (second as i128) * 1_000
        + millisecond as i128
}

/// Returns true if and only if the given Jalali year is a leap year.
///
/// This is the arithmetic 33-year cycle rule, in which 8 of every 33 years
/// are leap years.
#[inline]
pub(crate) const fn is_leap_year(year: i64) -> bool {
    (25 * (year as i128) + 11).rem_euclid(33) < 8
}

/// Return the number of days in the given 0-indexed Jalali month.
#[inline]
pub(crate) const fn days_in_month(year: i64, month: i8) -> i8 {
    if month < 6 {
        31
    } else if month < 11 {
        30
    } else if is_leap_year(year) {
        30
    } else {
        29
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_epochday_jalali() {
        for year in -3000..=3000 {
            for month in 0..12 {
                for day in 1..=days_in_month(year, month) {
                    let date = IJalaliDate { year, month, day };
                    let epoch_day = date.to_epoch_day();
                    let date_roundtrip = epoch_day.to_jalali();
                    assert_eq!(date, date_roundtrip);
                }
            }
        }
    }

    #[test]
    fn consecutive_days_are_consecutive_dates() {
        let mut prev = IEpochDay { epoch_day: -1_000_000 }.to_jalali();
        for epoch_day in -999_999..=1_000_000 {
            let next = IEpochDay { epoch_day }.to_jalali();
            if next.day == 1 {
                assert_eq!(prev.day, days_in_month(prev.year, prev.month));
                if next.month == 0 {
                    assert_eq!((prev.year + 1, prev.month), (next.year, 11));
                } else {
                    assert_eq!(
                        (prev.year, prev.month + 1),
                        (next.year, next.month)
                    );
                }
            } else {
                assert_eq!(
                    (prev.year, prev.month, prev.day + 1),
                    (next.year, next.month, next.day)
                );
            }
            prev = next;
        }
    }

    #[test]
    fn extreme_epoch_days() {
        let max = MAX_MILLIS / MILLIS_PER_DAY;
        for epoch_day in [-max, max] {
            let date = IEpochDay { epoch_day }.to_jalali();
            assert_eq!(epoch_day, date.to_epoch_day().epoch_day);
        }
    }

    #[test]
    fn unix_epoch() {
        let date = IEpochDay { epoch_day: 0 }.to_jalali();
        assert_eq!(date, IJalaliDate { year: 1348, month: 9, day: 11 });
        let date = IEpochDay { epoch_day: 0 }.to_gregorian();
        assert_eq!(date, IGregorianDate { year: 1970, month: 1, day: 1 });
        assert_eq!(IEpochDay { epoch_day: 0 }.weekday(), 4);
    }

    #[test]
    fn nowruz() {
        // 2005-03-21 is 1 Farvardin 1384.
        let epoch_day = gregorian_epoch_day(2005, 3, 21);
        assert_eq!(epoch_day, 12_863);
        assert_eq!(jalali_epoch_day(1384, 0, 1), 12_863);
        // 1398 is a common year and 1399 is a leap year.
        assert_eq!(
            jalali_epoch_day(1398, 11, 29) + 1,
            jalali_epoch_day(1399, 0, 1),
        );
        assert_eq!(
            jalali_epoch_day(1399, 11, 30) + 1,
            jalali_epoch_day(1400, 0, 1),
        );
    }

    #[test]
    fn composition_carries() {
        let base = jalali_epoch_day(1400, 0, 1);
        assert_eq!(jalali_epoch_day(1399, 12, 1), base);
        assert_eq!(jalali_epoch_day(1401, -12, 1), base);
        assert_eq!(jalali_epoch_day(1399, 11, 31), base);
        assert_eq!(jalali_epoch_day(1400, 1, -30), base);
        assert_eq!(gregorian_epoch_day(2020, 13, 1), 18_628);
        assert_eq!(gregorian_epoch_day(2021, 1, 1), 18_628);
        assert_eq!(gregorian_epoch_day(2021, 0, 32), 18_628);
    }

    #[test]
    fn roundtrip_epochday_gregorian() {
        for epoch_day in -800_000..=800_000 {
            let date = IEpochDay { epoch_day }.to_gregorian();
            let got = gregorian_epoch_day(
                date.year,
                i64::from(date.month),
                i64::from(date.day),
            );
            assert_eq!(i128::from(epoch_day), got);
        }
    }

    #[test]
    fn roundtrip_millisecond_time() {
        for second in 0..=86_399 {
            for millisecond in [0, 1, 250, 500, 999] {
                let millisecond = ITimeMillisecond {
                    millisecond: second * 1_000 + millisecond,
                };
                let time = millisecond.to_time();
                let millisecond_roundtrip = time.to_millisecond();
                assert_eq!(millisecond, millisecond_roundtrip);
            }
        }
    }

    #[test]
    fn leap_year() {
        // The 33 year cycle starting at 1399.
        let leaps: alloc::vec::Vec<i64> =
            (1399..1432).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, [1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428]);
        assert!(!is_leap_year(1398));
        assert!(is_leap_year(1399));
        assert!(!is_leap_year(1400));
        assert!(is_leap_year(1403));
    }

    #[test]
    fn leap_rule_agrees_with_year_start() {
        for year in -10_000..=10_000 {
            let length = year_start(year + 1) - year_start(year);
            let expected = if is_leap_year(year) { 366 } else { 365 };
            assert_eq!(length, expected, "year {year}");
        }
    }

    #[test]
    fn number_of_days_in_month() {
        for month in 0..6 {
            assert_eq!(days_in_month(1400, month), 31);
        }
        for month in 6..11 {
            assert_eq!(days_in_month(1400, month), 30);
        }
        assert_eq!(days_in_month(1398, 11), 29);
        assert_eq!(days_in_month(1399, 11), 30);
    }
}
