use crate::error::Error;

/// Represents a fixed offset from UTC.
///
/// An offset is the number of seconds that must be added to UTC to get the
/// "local" time that calendar fields are computed in. Every [`Calendar`]
/// carries exactly one offset. There are no time zone transitions: the
/// offset applies uniformly to every point in time.
///
/// # Example
///
/// Tehran has used a fixed offset of `+03:30` since 2022:
///
/// ```
/// use jalali::{Calendar, Offset, Timestamp};
///
/// let tehran = Calendar::fixed(Offset::from_seconds(3 * 3600 + 30 * 60)?);
/// // 2024-03-19T20:30Z is already 1403-01-01 in Tehran.
/// let ts = Timestamp::from_gregorian(2024, 3, 19, 20, 30, 0, 0);
/// let fields = tehran.to_fields(ts).unwrap();
/// assert_eq!((fields.year, fields.month, fields.day), (1403, 0, 1));
/// assert_eq!((fields.hour, fields.minute), (0, 0));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`Calendar`]: crate::Calendar
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Offset {
    seconds: i32,
}

impl Offset {
    /// The offset corresponding to UTC. That is, no offset at all.
    pub const UTC: Offset = Offset { seconds: 0 };

    /// The minimum possible offset, `-25:59:59`.
    pub const MIN: Offset = Offset { seconds: -93_599 };

    /// The maximum possible offset, `+25:59:59`.
    pub const MAX: Offset = Offset { seconds: 93_599 };

    /// Creates a new offset from a whole number of hours.
    ///
    /// This is a convenience constructor for use in constant contexts.
    ///
    /// # Panics
    ///
    /// This panics when `hours` is outside the range `-25..=25`. When
    /// used in a `const` context, this results in a compile time error.
    #[inline]
    pub const fn constant(hours: i8) -> Offset {
        if !(-25 <= hours && hours <= 25) {
            panic!("offset hours out of range");
        }
        Offset { seconds: hours as i32 * 3600 }
    }

    /// Creates a new offset from a number of seconds.
    ///
    /// # Errors
    ///
    /// This returns an error when `seconds` is outside the range
    /// `-93599..=93599`.
    #[inline]
    pub fn from_seconds(seconds: i32) -> Result<Offset, Error> {
        if !(Offset::MIN.seconds <= seconds && seconds <= Offset::MAX.seconds)
        {
            return Err(Error::range(
                "offset-seconds",
                seconds,
                Offset::MIN.seconds,
                Offset::MAX.seconds,
            ));
        }
        Ok(Offset { seconds })
    }

    /// Returns the number of seconds in this offset.
    #[inline]
    pub fn seconds(self) -> i32 {
        self.seconds
    }

    /// Returns true if and only if this offset is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.seconds < 0
    }

    #[inline]
    pub(crate) fn milliseconds(self) -> i64 {
        i64::from(self.seconds) * 1_000
    }
}

impl Default for Offset {
    fn default() -> Offset {
        Offset::UTC
    }
}

impl core::fmt::Debug for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Offset({self})")
    }
}

/// Displays an offset in the form `+HH:MM`, or `+HH:MM:SS` when the offset
/// isn't a whole number of minutes.
impl core::fmt::Display for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let sign = if self.is_negative() { '-' } else { '+' };
        let seconds = self.seconds.unsigned_abs();
        let (hours, minutes, seconds) =
            (seconds / 3600, (seconds / 60) % 60, seconds % 60);
        write!(f, "{sign}{hours:02}:{minutes:02}")?;
        if seconds != 0 {
            write!(f, ":{seconds:02}")?;
        }
        Ok(())
    }
}
