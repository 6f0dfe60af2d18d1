/// The calendar fields of a point in time in the Jalali calendar.
///
/// Values of this type are produced by
/// [`Calendar::to_fields`](crate::Calendar::to_fields) and consumed by
/// [`Calendar::to_timestamp`](crate::Calendar::to_timestamp).
///
/// Fields produced by a calendar are always in their natural ranges:
///
/// * `month` is 0-indexed, from `0` (Farvardin) to `11` (Esfand).
/// * `day` is from `1` to the length of the month, which is `31` for the
/// first six months, `30` for the next five and `29` for Esfand (or `30`
/// in a leap year).
/// * `hour`, `minute`, `second` and `millisecond` are in `0..=23`,
/// `0..=59`, `0..=59` and `0..=999` respectively.
/// * `year` may be any integer, including zero and negative years, since
/// the calendar is proleptic.
///
/// Fields given to a calendar may be outside of these ranges. In that case,
/// the excess carries into the neighboring fields the same way a native
/// date setter does. For example, day `32` of Farvardin is day `1` of
/// Ordibehesht, and month `-1` is Esfand of the previous year.
///
/// # Example
///
/// ```
/// use jalali::{Calendar, JalaliFields};
///
/// let cal = Calendar::UTC;
/// let ts = cal.to_timestamp(JalaliFields::date(1400, 0, 32));
/// assert_eq!(cal.to_fields(ts), Some(JalaliFields::date(1400, 1, 1)));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct JalaliFields {
    /// The Jalali year. Any value is accepted when composing.
    pub year: i64,
    /// The month, where Farvardin is `0` and Esfand is `11`.
    pub month: i64,
    /// The day of the month, starting at `1`.
    pub day: i64,
    /// The hour of the day, in `0..=23` when decomposed.
    pub hour: i64,
    /// The minute of the hour, in `0..=59` when decomposed.
    pub minute: i64,
    /// The second of the minute, in `0..=59` when decomposed.
    pub second: i64,
    /// The millisecond of the second, in `0..=999` when decomposed.
    pub millisecond: i64,
}

impl JalaliFields {
    /// Creates fields for the given date at midnight.
    #[inline]
    pub const fn date(year: i64, month: i64, day: i64) -> JalaliFields {
        JalaliFields {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    /// Returns these fields with the time of day replaced.
    #[inline]
    pub const fn with_time(
        self,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> JalaliFields {
        JalaliFields { hour, minute, second, millisecond, ..self }
    }

    /// Returns the value of a single field.
    #[inline]
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::Year => self.year,
            Field::Month => self.month,
            Field::Day => self.day,
            Field::Hour => self.hour,
            Field::Minute => self.minute,
            Field::Second => self.second,
            Field::Millisecond => self.millisecond,
        }
    }

    /// Returns these fields with a single field replaced.
    ///
    /// No normalization happens here. That occurs when the fields are
    /// composed into a timestamp.
    #[inline]
    pub fn with(self, field: Field, value: i64) -> JalaliFields {
        let mut fields = self;
        *match field {
            Field::Year => &mut fields.year,
            Field::Month => &mut fields.month,
            Field::Day => &mut fields.day,
            Field::Hour => &mut fields.hour,
            Field::Minute => &mut fields.minute,
            Field::Second => &mut fields.second,
            Field::Millisecond => &mut fields.millisecond,
        } = value;
        fields
    }
}

/// A single calendar field.
///
/// This is used with [`Calendar::get`](crate::Calendar::get) and
/// [`Calendar::set`](crate::Calendar::set).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Field {
    /// The Jalali year.
    Year,
    /// The 0-indexed month.
    Month,
    /// The day of the month, starting at `1`.
    Day,
    /// The hour of the day.
    Hour,
    /// The minute of the hour.
    Minute,
    /// The second of the minute.
    Second,
    /// The millisecond of the second.
    Millisecond,
}

impl Field {
    /// Returns the name of this field, as used in option objects and error
    /// messages.
    pub(crate) fn as_str(&self) -> &'static str {
        match *self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hours",
            Field::Minute => "minutes",
            Field::Second => "seconds",
            Field::Millisecond => "milliseconds",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
