use crate::util::itime::{self, IMillis, MAX_MILLIS};

/// An instant in time represented as the number of milliseconds since the
/// Unix epoch, or the distinguished [`Timestamp::INVALID`] value.
///
/// A timestamp is the calendar agnostic interchange representation used by
/// every operation in this crate. A [`Calendar`](crate::Calendar) decomposes
/// a timestamp into Jalali fields and composes fields back into a timestamp.
///
/// # Invalid timestamps
///
/// The range of a valid timestamp is `-8,640,000,000,000,000` to
/// `8,640,000,000,000,000` milliseconds, inclusive. (That is, 100,000,000
/// days on either side of the Unix epoch.) Any operation whose result would
/// fall outside this range, or which is given an invalid timestamp as input,
/// produces `Timestamp::INVALID` instead of an error. Invalid timestamps are
/// meant to flow through a chain of operations untouched, and callers that
/// care can check [`Timestamp::is_valid`] once at the end.
///
/// Because an invalid timestamp is not ordered with respect to any other
/// timestamp, `Timestamp` does not implement `PartialOrd`. Use
/// [`compare_asc`](crate::compare_asc) instead.
///
/// # Example
///
/// ```
/// use jalali::Timestamp;
///
/// let ts = Timestamp::from_millisecond(1_000);
/// assert!(ts.is_valid());
/// assert_eq!(ts.as_millisecond(), Some(1_000));
///
/// let ts = Timestamp::from_millisecond(i64::MAX);
/// assert!(!ts.is_valid());
/// assert_eq!(ts.as_millisecond(), None);
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Timestamp {
    /// When present, this is guaranteed to be in the range
    /// `-MAX_MILLIS..=MAX_MILLIS`.
    millis: Option<i64>,
}

impl Timestamp {
    /// The invalid timestamp.
    ///
    /// This is the analogue of a native date whose time value is `NaN`.
    pub const INVALID: Timestamp = Timestamp { millis: None };

    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const UNIX_EPOCH: Timestamp = Timestamp { millis: Some(0) };

    /// The minimum valid timestamp.
    pub const MIN: Timestamp = Timestamp { millis: Some(-MAX_MILLIS) };

    /// The maximum valid timestamp.
    pub const MAX: Timestamp = Timestamp { millis: Some(MAX_MILLIS) };

    /// Creates a timestamp from a number of milliseconds since the Unix
    /// epoch.
    ///
    /// If `millisecond` is outside the supported range, then this returns
    /// [`Timestamp::INVALID`].
    #[inline]
    pub const fn from_millisecond(millisecond: i64) -> Timestamp {
        if -MAX_MILLIS <= millisecond && millisecond <= MAX_MILLIS {
            Timestamp { millis: Some(millisecond) }
        } else {
            Timestamp::INVALID
        }
    }

    /// Creates a timestamp from a floating point number of milliseconds
    /// since the Unix epoch.
    ///
    /// Any fractional part is truncated toward zero. `NaN`, infinities and
    /// out of range values produce [`Timestamp::INVALID`].
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::Timestamp;
    ///
    /// assert_eq!(Timestamp::from_millisecond_f64(-1.9).as_millisecond(), Some(-1));
    /// assert!(!Timestamp::from_millisecond_f64(f64::NAN).is_valid());
    /// assert!(!Timestamp::from_millisecond_f64(8.64e15 + 1.0).is_valid());
    /// ```
    #[inline]
    pub fn from_millisecond_f64(millisecond: f64) -> Timestamp {
        #[cfg(not(feature = "std"))]
        use crate::util::libm::Float;

        if !millisecond.is_finite() || millisecond.abs() > MAX_MILLIS as f64
        {
            return Timestamp::INVALID;
        }
        // OK because we checked above that the value is in range.
        Timestamp::from_millisecond(millisecond as i64)
    }

    /// Creates a timestamp from proleptic Gregorian fields in UTC.
    ///
    /// Unlike Jalali fields, the `month` here is 1-indexed: January is `1`.
    /// All values carry into their neighbors when out of range, so for
    /// example, `month` `13` is January of the following year and `day` `0`
    /// is the last day of the previous month.
    ///
    /// This is mostly useful for interoperating with systems (and test
    /// fixtures) that describe instants with Gregorian dates.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::Timestamp;
    ///
    /// let ts = Timestamp::from_gregorian(2005, 3, 21, 0, 0, 0, 0);
    /// assert_eq!(ts.as_millisecond(), Some(1_111_363_200_000));
    /// assert_eq!(ts, Timestamp::from_gregorian(2005, 2, 49, 0, 0, 0, 0));
    /// ```
    #[inline]
    pub fn from_gregorian(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> Timestamp {
        let epoch_day = itime::gregorian_epoch_day(year, month, day);
        Timestamp::from_millis_i128(itime::compose_millis(
            epoch_day,
            hour,
            minute,
            second,
            millisecond,
        ))
    }

    /// Returns the number of milliseconds since the Unix epoch, or `None`
    /// when this timestamp is invalid.
    #[inline]
    pub const fn as_millisecond(self) -> Option<i64> {
        self.millis
    }

    /// Returns true if and only if this timestamp is not
    /// [`Timestamp::INVALID`].
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::Timestamp;
    ///
    /// assert!(Timestamp::UNIX_EPOCH.is_valid());
    /// assert!(!Timestamp::INVALID.is_valid());
    /// ```
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.millis.is_some()
    }

    /// Adds the given number of milliseconds to this timestamp.
    ///
    /// An invalid input or an out of range result gives an invalid
    /// timestamp.
    #[inline]
    pub(crate) fn add_milliseconds(self, delta: i128) -> Timestamp {
        match self.millis {
            None => Timestamp::INVALID,
            Some(millis) => {
                Timestamp::from_millis_i128(i128::from(millis) + delta)
            }
        }
    }

    #[inline]
    pub(crate) fn from_millis_i128(millis: i128) -> Timestamp {
        match i64::try_from(millis) {
            Ok(millis) => Timestamp::from_millisecond(millis),
            Err(_) => Timestamp::INVALID,
        }
    }
}

impl Default for Timestamp {
    fn default() -> Timestamp {
        Timestamp::UNIX_EPOCH
    }
}

impl core::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

/// Displays a timestamp as a Gregorian ISO 8601 datetime in UTC, to
/// millisecond precision, or as `Invalid Date`.
///
/// Years outside of `0000..=9999` are written with a sign and six digits.
///
/// # Example
///
/// ```
/// use jalali::Timestamp;
///
/// let ts = Timestamp::from_millisecond(1_111_363_200_123);
/// assert_eq!(ts.to_string(), "2005-03-21T00:00:00.123Z");
/// assert_eq!(Timestamp::MIN.to_string(), "-271821-04-20T00:00:00.000Z");
/// assert_eq!(Timestamp::INVALID.to_string(), "Invalid Date");
/// ```
impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let Some(millis) = self.millis else {
            return f.write_str("Invalid Date");
        };
        let (epoch_day, time) = IMillis { millis }.to_day_time();
        let date = epoch_day.to_gregorian();
        if (0..=9999).contains(&date.year) {
            write!(f, "{:04}", date.year)?;
        } else {
            let sign = if date.year < 0 { '-' } else { '+' };
            write!(f, "{sign}{:06}", date.year.unsigned_abs())?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            date.month,
            date.day,
            time.hour,
            time.minute,
            time.second,
            time.millisecond,
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Timestamp {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self.millis {
            None => serializer.serialize_none(),
            Some(millis) => serializer.serialize_some(&millis),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Timestamp {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Timestamp, D::Error> {
        use serde::de;

        struct TimestampVisitor;

        impl<'de> de::Visitor<'de> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str(
                    "an integer number of milliseconds from the Unix epoch \
                     or null",
                )
            }

            #[inline]
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
                Ok(Timestamp::from_millisecond(v))
            }

            #[inline]
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
                Ok(i64::try_from(v)
                    .map_or(Timestamp::INVALID, Timestamp::from_millisecond))
            }

            #[inline]
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
                Ok(Timestamp::from_millisecond_f64(v))
            }

            #[inline]
            fn visit_none<E: de::Error>(self) -> Result<Timestamp, E> {
                Ok(Timestamp::INVALID)
            }

            #[inline]
            fn visit_unit<E: de::Error>(self) -> Result<Timestamp, E> {
                Ok(Timestamp::INVALID)
            }

            #[inline]
            fn visit_some<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Timestamp, D::Error> {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_option(TimestampVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Timestamp {
    fn arbitrary(g: &mut quickcheck::Gen) -> Timestamp {
        let span = 2 * i128::from(MAX_MILLIS) + 1;
        let millis = i128::from(<i64 as quickcheck::Arbitrary>::arbitrary(g));
        Timestamp::from_millis_i128(
            millis.rem_euclid(span) - i128::from(MAX_MILLIS),
        )
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let Some(millis) = self.millis else {
            return quickcheck::empty_shrinker();
        };
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&millis)
                .map(Timestamp::from_millisecond),
        )
    }
}
