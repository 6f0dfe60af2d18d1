/*!
Jalali is a calendar arithmetic library for the Persian (Jalali) calendar.

Every value in this crate is ultimately a [`Timestamp`]: a number of
milliseconds since the Unix epoch. A [`Calendar`] interprets timestamps as
Jalali calendar fields (year, month, day, hour and so on) at a fixed
[`Offset`] from UTC, and provides operations in terms of those fields:
getting and setting them, week numbering, adding durations and measuring
the difference between two timestamps in calendar units.

# Overview

The primary types in this crate are:

* [`Timestamp`] is an instant in time, or the distinguished
[`Timestamp::INVALID`] value.
* [`Calendar`] decomposes timestamps into [`JalaliFields`] and composes them
back. All calendar aware operations are methods on this type.
* [`Duration`] is a compound amount of years, months, weeks, days, hours,
minutes and seconds that can be added to a timestamp.
* [`WeekOptions`] configures which day starts a week and which day must be
in the first week of a week-numbering year.
* [`dynamic::invoke`] is a loosely typed entry layer for embedding this crate
behind interfaces where arguments arrive untyped.

# Invalid timestamps are not errors

Any operation given an invalid timestamp, or whose result would fall outside
of the supported range, produces [`Timestamp::INVALID`] (or `None` for
integer results) instead of returning an error. This lets a chain of
operations run to completion, with the result checked once at the end. The
[`Error`] type is reserved for contract violations, like out of range
configuration values.

# Months are zero-indexed

In keeping with the Unix millisecond interchange format this crate is built
around, months are numbered `0` (Farvardin) through `11` (Esfand). Days of
the month start at `1`. Days of the week are numbered `0` (Sunday) through
`6` (Saturday), although the default week starts on Saturday.

# Example

This shows a few basic operations:

```
use jalali::{Calendar, Field, RoundingMethod, Timestamp, ToDuration};

let cal = Calendar::UTC;
// 1 Farvardin 1403.
let ts = Timestamp::from_gregorian(2024, 3, 20, 0, 0, 0, 0);
assert_eq!(cal.get(ts, Field::Year), Some(1403));
assert_eq!(cal.get(ts, Field::Month), Some(0));
assert_eq!(cal.get(ts, Field::Day), Some(1));

// Adding a month lands on 1 Ordibehesht.
let next = cal.add(ts, &1.months());
assert_eq!(cal.get(next, Field::Month), Some(1));
assert_eq!(cal.difference_in_days(next, ts), Some(31));
assert_eq!(
    cal.difference_in_weeks(next, ts, RoundingMethod::Round),
    Some(4),
);
```

# Crate features

* **std** (enabled by default) - When enabled, [`Error`] implements
`std::error::Error`.
* **logging** - When enabled, the `log` crate is used to emit messages about
how options were resolved and where invalid timestamps were produced.
* **serde** - When enabled, [`Timestamp`], [`Duration`], [`RoundingMethod`]
and [`Weekday`] implement `Serialize` and `Deserialize`.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
// Document ALL THE THINGS!
#![deny(missing_docs)]
// No clue why this thing is still unstable because it's pretty amazing. This
// adds Cargo feature annotations to items in the rustdoc output.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors allocate, as does the dynamic layer.
extern crate alloc;

pub use crate::{
    arith::compare_asc,
    calendar::{days_in_month, is_leap_year, Calendar},
    duration::{Duration, ToDuration},
    error::Error,
    fields::{Field, JalaliFields},
    offset::Offset,
    round::RoundingMethod,
    timestamp::Timestamp,
    week::{Locale, WeekConfig, WeekOptions, Weekday},
};

#[macro_use]
mod logging;

mod arith;
mod calendar;
mod duration;
pub mod dynamic;
mod error;
mod fields;
mod offset;
mod round;
mod timestamp;
mod util;
pub mod week;
