/*!
A dynamically typed entry layer over the typed calendar API.

This module exists for embedding this crate behind loosely typed interfaces,
like a scripting language binding or a JSON RPC endpoint, where callers pass
an arbitrary number of untyped arguments. It provides:

* [`Value`], a small dynamic value type.
* [`Function`], which enumerates every entry point along with its name and
the number of arguments it requires.
* [`invoke`], which checks the argument count, converts arguments,
resolves an optional trailing options object and then dispatches to the
typed methods on [`Calendar`].

# Conversions

Arguments are converted the same way regardless of the entry point:

* A *date* argument may be a [`Value::Timestamp`] or a [`Value::Number`] of
milliseconds since the Unix epoch. Anything else is an invalid date. A
string is also an invalid date, and a warning is logged, since strings are
never parsed.
* An *integer* argument is converted to a number and truncated toward zero.
Numeric strings are accepted. `null`, booleans, `undefined` and objects
become `NaN`. A `NaN` integer argument produces an invalid result rather
than an error.

# Options

The last argument of some entry points is an options object. The following
keys are recognized:

* `weekStartsOn` and `firstWeekContainsDate`, along with the same keys
nested under `locale.options`. These are resolved with the precedence
described on [`WeekOptions`].
* `roundingMethod`, one of `"trunc"`, `"round"`, `"ceil"` or `"floor"`.
* `nearestTo`, for [`Function::RoundToNearestMinutes`].

A missing key, or one set to `undefined` or `null`, is treated as absent.
Only the value chosen by precedence is converted, and if it doesn't convert
to a number, the result is an error for which
[`Error::is_range`](crate::Error::is_range) returns true. The first week
date is only read by the operations that number weeks.

`nearestTo` is the exception. When the key is present, its value is always
converted, and a value that isn't a number gives an invalid date.

# Example

```
use jalali::{
    dynamic::{self, Function, Object, Value},
    Calendar, Timestamp,
};

let cal = Calendar::UTC;
let a = Timestamp::from_gregorian(2012, 7, 2, 18, 0, 0, 0);
let b = Timestamp::from_gregorian(2011, 5, 2, 6, 0, 0, 0);
let options = Object::new().with("roundingMethod", "ceil");
let got = dynamic::invoke(
    &cal,
    Function::DifferenceInQuarters,
    &[a.into(), b.into(), options.into()],
)?;
assert_eq!(got, Value::Number(5.0));

// Entry points check their argument count before anything else.
let err = dynamic::invoke(&cal, Function::DifferenceInQuarters, &[a.into()])
    .unwrap_err();
assert!(err.is_missing_argument());
assert_eq!(
    err.to_string(),
    "`differenceInQuarters` requires 2 arguments, but only 1 present",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::{string::String, vec::Vec};

use crate::{
    arith::compare_asc,
    calendar::Calendar,
    duration::Duration,
    error::{args, options, Error, ErrorContext},
    fields::Field,
    round::RoundingMethod,
    timestamp::Timestamp,
    week::{Locale, WeekOptions, Weekday},
};

/// A dynamically typed value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A missing value.
    Undefined,
    /// An explicitly empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number, which may be `NaN` or infinite.
    Number(f64),
    /// A string. Strings are never parsed as dates.
    String(String),
    /// A timestamp, which may be invalid.
    Timestamp(Timestamp),
    /// A string keyed map of values.
    Object(Object),
}

impl Value {
    /// Returns true when this is `Undefined` or `Null`.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(*self, Value::Undefined | Value::Null)
    }

    /// Converts this value to a date.
    fn to_date(&self) -> Timestamp {
        match *self {
            Value::Timestamp(ts) => ts,
            Value::Number(n) => Timestamp::from_millisecond_f64(n),
            // Only read by the log message.
            #[allow(unused_variables)]
            Value::String(ref s) => {
                warn!(
                    "string {s:?} passed where a date was expected, \
                     strings are never parsed as dates",
                );
                Timestamp::INVALID
            }
            _ => Timestamp::INVALID,
        }
    }

    /// Converts this value to a number.
    fn to_number(&self) -> f64 {
        match *self {
            Value::Number(n) => n,
            Value::Timestamp(ts) => {
                ts.as_millisecond().map_or(f64::NAN, |ms| ms as f64)
            }
            Value::String(ref s) => parse_number(s),
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Object(_) => f64::NAN,
        }
    }

    /// Converts this value to a number truncated toward zero. This may
    /// return `NaN` or an infinity.
    fn to_integer(&self) -> f64 {
        #[cfg(not(feature = "std"))]
        use crate::util::libm::Float;

        self.to_number().trunc()
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Value {
        Value::Timestamp(ts)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Value {
        Value::String(String::from(s))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Value {
        Value::Object(object)
    }
}

/// A string keyed map of values that preserves insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    /// Creates an empty object.
    #[inline]
    pub fn new() -> Object {
        Object::default()
    }

    /// Returns this object with the given key set. Setting an existing key
    /// replaces its value in place.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Object {
        self.insert(key, value);
        self
    }

    /// Sets the given key, returning its previous value if there was one.
    pub fn insert(
        &mut self,
        key: &str,
        value: impl Into<Value>,
    ) -> Option<Value> {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((String::from(key), value));
                None
            }
        }
    }

    /// Returns the value of the given key, if it's set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the value of the given key, treating `undefined` and `null`
    /// as absent.
    fn get_present(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_nullish())
    }
}

/// An entry point reachable through [`invoke`].
///
/// Each entry point has a name, as used in error messages, and a number of
/// arguments it requires. Optional trailing arguments, like an options
/// object, aren't counted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Function {
    /// `getYear`, `getMonth`, `getDate`, `getHours` and so on.
    Get(Field),
    /// `setYear`, `setMonth`, `setDate`, `setHours` and so on.
    Set(Field),
    /// The day of the week, where `0` is Sunday.
    GetDay,
    /// `getDaysInMonth`, via [`Calendar::days_in_month`].
    GetDaysInMonth,
    /// `isLeapYear`, via [`Calendar::in_leap_year`].
    IsLeapYear,
    /// `isLastDayOfMonth`, via [`Calendar::is_last_day_of_month`].
    IsLastDayOfMonth,
    /// `isValid`, via [`Timestamp::is_valid`].
    IsValid,
    /// `startOfDay`, via [`Calendar::start_of_day`].
    StartOfDay,
    /// `startOfWeek`, via [`Calendar::start_of_week`].
    StartOfWeek,
    /// `startOfWeekYear`, via [`Calendar::start_of_week_year`].
    StartOfWeekYear,
    /// `getWeekYear`, via [`Calendar::week_year`].
    GetWeekYear,
    /// `getWeek`, via [`Calendar::week`].
    GetWeek,
    /// `setWeek`, via [`Calendar::set_week`].
    SetWeek,
    /// `setDay`, via [`Calendar::set_day_of_week`].
    SetDay,
    /// The most recent earlier day with the weekday given as an argument.
    PreviousDay,
    /// `previousSunday`, `previousMonday` and so on.
    Previous(Weekday),
    /// `add`, via [`Calendar::add`].
    Add,
    /// `sub`, via [`Calendar::sub`].
    Sub,
    /// `addMonths`, via [`Calendar::add_months`].
    AddMonths,
    /// `addDays`, via [`Calendar::add_days`].
    AddDays,
    /// `compareAsc`, via [`compare_asc`](crate::compare_asc).
    CompareAsc,
    /// `differenceInCalendarMonths`.
    DifferenceInCalendarMonths,
    /// `differenceInMonths`, via [`Calendar::difference_in_months`].
    DifferenceInMonths,
    /// `differenceInQuarters`.
    DifferenceInQuarters,
    /// `differenceInWeeks`.
    DifferenceInWeeks,
    /// `differenceInDays`.
    DifferenceInDays,
    /// `differenceInHours`.
    DifferenceInHours,
    /// `differenceInMinutes`.
    DifferenceInMinutes,
    /// `differenceInSeconds`.
    DifferenceInSeconds,
    /// `differenceInMilliseconds`.
    DifferenceInMilliseconds,
    /// `roundToNearestMinutes`, via [`Calendar::round_to_nearest_minutes`].
    RoundToNearestMinutes,
}

impl Function {
    /// Returns the name of this entry point.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{dynamic::Function, Field, Weekday};
    ///
    /// assert_eq!(Function::Set(Field::Hour).name(), "setHours");
    /// assert_eq!(Function::Get(Field::Day).name(), "getDate");
    /// assert_eq!(Function::Previous(Weekday::Friday).name(), "previousFriday");
    /// ```
    pub fn name(&self) -> &'static str {
        use self::Function::*;

        match *self {
            Get(field) => match field {
                Field::Year => "getYear",
                Field::Month => "getMonth",
                Field::Day => "getDate",
                Field::Hour => "getHours",
                Field::Minute => "getMinutes",
                Field::Second => "getSeconds",
                Field::Millisecond => "getMilliseconds",
            },
            Set(field) => match field {
                Field::Year => "setYear",
                Field::Month => "setMonth",
                Field::Day => "setDate",
                Field::Hour => "setHours",
                Field::Minute => "setMinutes",
                Field::Second => "setSeconds",
                Field::Millisecond => "setMilliseconds",
            },
            GetDay => "getDay",
            GetDaysInMonth => "getDaysInMonth",
            IsLeapYear => "isLeapYear",
            IsLastDayOfMonth => "isLastDayOfMonth",
            IsValid => "isValid",
            StartOfDay => "startOfDay",
            StartOfWeek => "startOfWeek",
            StartOfWeekYear => "startOfWeekYear",
            GetWeekYear => "getWeekYear",
            GetWeek => "getWeek",
            SetWeek => "setWeek",
            SetDay => "setDay",
            PreviousDay => "previousDay",
            Previous(weekday) => match weekday {
                Weekday::Sunday => "previousSunday",
                Weekday::Monday => "previousMonday",
                Weekday::Tuesday => "previousTuesday",
                Weekday::Wednesday => "previousWednesday",
                Weekday::Thursday => "previousThursday",
                Weekday::Friday => "previousFriday",
                Weekday::Saturday => "previousSaturday",
            },
            Add => "add",
            Sub => "sub",
            AddMonths => "addMonths",
            AddDays => "addDays",
            CompareAsc => "compareAsc",
            DifferenceInCalendarMonths => "differenceInCalendarMonths",
            DifferenceInMonths => "differenceInMonths",
            DifferenceInQuarters => "differenceInQuarters",
            DifferenceInWeeks => "differenceInWeeks",
            DifferenceInDays => "differenceInDays",
            DifferenceInHours => "differenceInHours",
            DifferenceInMinutes => "differenceInMinutes",
            DifferenceInSeconds => "differenceInSeconds",
            DifferenceInMilliseconds => "differenceInMilliseconds",
            RoundToNearestMinutes => "roundToNearestMinutes",
        }
    }

    /// Returns the number of arguments this entry point requires.
    pub fn required_arguments(&self) -> usize {
        use self::Function::*;

        match *self {
            Get(_) | GetDay | GetDaysInMonth | IsLeapYear
            | IsLastDayOfMonth | IsValid | StartOfDay | StartOfWeek
            | StartOfWeekYear | GetWeekYear | GetWeek | Previous(_)
            | RoundToNearestMinutes => 1,
            Set(_) | SetWeek | SetDay | PreviousDay | Add | Sub
            | AddMonths | AddDays | CompareAsc
            | DifferenceInCalendarMonths | DifferenceInMonths
            | DifferenceInQuarters | DifferenceInWeeks | DifferenceInDays
            | DifferenceInHours | DifferenceInMinutes
            | DifferenceInSeconds | DifferenceInMilliseconds => 2,
        }
    }

    /// Returns an iterator over every entry point.
    pub fn all() -> impl Iterator<Item = Function> {
        use self::Function::*;

        const FIELDS: [Field; 7] = [
            Field::Year,
            Field::Month,
            Field::Day,
            Field::Hour,
            Field::Minute,
            Field::Second,
            Field::Millisecond,
        ];
        const WEEKDAYS: [Weekday; 7] = [
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ];
        const OTHERS: [Function; 28] = [
            GetDay,
            GetDaysInMonth,
            IsLeapYear,
            IsLastDayOfMonth,
            IsValid,
            StartOfDay,
            StartOfWeek,
            StartOfWeekYear,
            GetWeekYear,
            GetWeek,
            SetWeek,
            SetDay,
            PreviousDay,
            Add,
            Sub,
            AddMonths,
            AddDays,
            CompareAsc,
            DifferenceInCalendarMonths,
            DifferenceInMonths,
            DifferenceInQuarters,
            DifferenceInWeeks,
            DifferenceInDays,
            DifferenceInHours,
            DifferenceInMinutes,
            DifferenceInSeconds,
            DifferenceInMilliseconds,
            RoundToNearestMinutes,
        ];
        FIELDS
            .into_iter()
            .map(Get)
            .chain(FIELDS.into_iter().map(Set))
            .chain(WEEKDAYS.into_iter().map(Previous))
            .chain(OTHERS)
    }
}

impl core::fmt::Display for Function {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Calls an entry point with the given arguments.
///
/// # Errors
///
/// This returns an error when fewer arguments than
/// [`Function::required_arguments`] are given, in which case
/// [`Error::is_missing_argument`](crate::Error::is_missing_argument) returns
/// true. This is checked before anything else.
///
/// It also returns an error when a recognized option in a trailing options
/// object is out of range or isn't a number.
///
/// Invalid dates never cause an error. An invalid date result is returned
/// as `Value::Timestamp(Timestamp::INVALID)` and an invalid numeric result
/// is returned as `Value::Number(f64::NAN)`.
///
/// # Example
///
/// ```
/// use jalali::{
///     dynamic::{self, Function, Object, Value},
///     Calendar, Timestamp,
/// };
///
/// let cal = Calendar::UTC;
/// let ts = Timestamp::from_gregorian(2014, 9, 1, 0, 0, 0, 0);
/// // Numeric strings are converted.
/// let got = dynamic::invoke(&cal, Function::SetDay, &[ts.into(), "5".into()])?;
/// assert_eq!(got, Value::Timestamp(Timestamp::from_gregorian(2014, 9, 5, 0, 0, 0, 0)));
///
/// // A `NaN` option is a range error.
/// let options = Object::new().with("weekStartsOn", f64::NAN);
/// let err = dynamic::invoke(
///     &cal,
///     Function::SetDay,
///     &[ts.into(), 0.into(), options.into()],
/// ).unwrap_err();
/// assert!(err.is_range());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn invoke(
    cal: &Calendar,
    function: Function,
    args: &[Value],
) -> Result<Value, Error> {
    let required = function.required_arguments();
    if args.len() < required {
        return Err(Error::from(args::Error::Missing {
            function: function.name(),
            required,
            given: args.len(),
        }));
    }
    Call { cal, args }
        .dispatch(function)
        .with_context(|| args::Error::Call { function: function.name() })
}

/// The arguments of a single call, after the arity check.
struct Call<'a> {
    cal: &'a Calendar,
    args: &'a [Value],
}

impl<'a> Call<'a> {
    fn dispatch(&self, function: Function) -> Result<Value, Error> {
        use self::Function::*;

        let cal = self.cal;
        let value = match function {
            Get(field) => number(cal.get(self.date(0), field)),
            Set(field) => {
                let value = self.integer(1);
                timestamp(cal.set_fractional(self.date(0), field, value))
            }
            GetDay => number(
                cal.day_of_week(self.date(0))
                    .map(|w| i64::from(w.to_sunday_zero_offset())),
            ),
            GetDaysInMonth => {
                number(cal.days_in_month(self.date(0)).map(i64::from))
            }
            IsLeapYear => {
                Value::Bool(cal.in_leap_year(self.date(0)) == Some(true))
            }
            IsLastDayOfMonth => Value::Bool(
                cal.is_last_day_of_month(self.date(0)) == Some(true),
            ),
            IsValid => Value::Bool(match self.args[0] {
                Value::Timestamp(ts) => ts.is_valid(),
                Value::Number(n) => {
                    Timestamp::from_millisecond_f64(n).is_valid()
                }
                _ => false,
            }),
            StartOfDay => timestamp(cal.start_of_day(self.date(0))),
            StartOfWeek => {
                let options = self.week_options(1, false)?;
                timestamp(cal.start_of_week(self.date(0), &options)?)
            }
            StartOfWeekYear => {
                let options = self.week_options(1, true)?;
                timestamp(cal.start_of_week_year(self.date(0), &options)?)
            }
            GetWeekYear => {
                let options = self.week_options(1, true)?;
                number(cal.week_year(self.date(0), &options)?)
            }
            GetWeek => {
                let options = self.week_options(1, true)?;
                number(cal.week(self.date(0), &options)?)
            }
            SetWeek => {
                let options = self.week_options(2, true)?;
                match finite(self.integer(1)) {
                    None => timestamp(Timestamp::INVALID),
                    Some(week) => {
                        timestamp(cal.set_week(self.date(0), week, &options)?)
                    }
                }
            }
            SetDay => {
                let options = self.week_options(2, false)?;
                match finite(self.integer(1)) {
                    None => timestamp(Timestamp::INVALID),
                    Some(day) => timestamp(cal.set_day_of_week(
                        self.date(0),
                        day,
                        &options,
                    )?),
                }
            }
            PreviousDay => match finite(self.integer(1)) {
                None => timestamp(Timestamp::INVALID),
                Some(day) => {
                    let weekday = Weekday::from_sunday_zero_offset(day)?;
                    timestamp(cal.previous_weekday(self.date(0), weekday))
                }
            },
            Previous(weekday) => {
                timestamp(cal.previous_weekday(self.date(0), weekday))
            }
            Add => match self.duration(1) {
                None => timestamp(Timestamp::INVALID),
                Some(duration) => timestamp(cal.add(self.date(0), &duration)),
            },
            Sub => match self.duration(1) {
                None => timestamp(Timestamp::INVALID),
                Some(duration) => timestamp(cal.sub(self.date(0), &duration)),
            },
            AddMonths => match finite(self.integer(1)) {
                None => timestamp(Timestamp::INVALID),
                Some(months) => {
                    timestamp(cal.add_months(self.date(0), months))
                }
            },
            AddDays => match finite(self.integer(1)) {
                None => timestamp(Timestamp::INVALID),
                Some(days) => timestamp(cal.add_days(self.date(0), days)),
            },
            CompareAsc => number(
                compare_asc(self.date(0), self.date(1))
                    .map(|ordering| ordering as i64),
            ),
            DifferenceInCalendarMonths => number(
                cal.difference_in_calendar_months(self.date(0), self.date(1)),
            ),
            DifferenceInMonths => {
                number(cal.difference_in_months(self.date(0), self.date(1)))
            }
            DifferenceInQuarters => {
                let method = self.rounding_method(2)?;
                number(cal.difference_in_quarters(
                    self.date(0),
                    self.date(1),
                    method,
                ))
            }
            DifferenceInWeeks => {
                let method = self.rounding_method(2)?;
                number(cal.difference_in_weeks(
                    self.date(0),
                    self.date(1),
                    method,
                ))
            }
            DifferenceInDays => {
                number(cal.difference_in_days(self.date(0), self.date(1)))
            }
            DifferenceInHours => {
                let method = self.rounding_method(2)?;
                number(cal.difference_in_hours(
                    self.date(0),
                    self.date(1),
                    method,
                ))
            }
            DifferenceInMinutes => {
                let method = self.rounding_method(2)?;
                number(cal.difference_in_minutes(
                    self.date(0),
                    self.date(1),
                    method,
                ))
            }
            DifferenceInSeconds => {
                let method = self.rounding_method(2)?;
                number(cal.difference_in_seconds(
                    self.date(0),
                    self.date(1),
                    method,
                ))
            }
            DifferenceInMilliseconds => number(
                cal.difference_in_milliseconds(self.date(0), self.date(1)),
            ),
            RoundToNearestMinutes => {
                // Unlike other options, a `nearestTo` that is present but
                // `undefined` or `null` isn't absent. It converts to `NaN`.
                let nearest_to = self
                    .options(1)
                    .and_then(|options| options.get("nearestTo"))
                    .map_or(1.0, Value::to_integer);
                if nearest_to.is_nan() {
                    timestamp(Timestamp::INVALID)
                } else {
                    // Infinities saturate, which puts them out of range.
                    timestamp(cal.round_to_nearest_minutes(
                        self.date(0),
                        nearest_to as i64,
                    )?)
                }
            }
        };
        Ok(value)
    }

    fn date(&self, index: usize) -> Timestamp {
        self.args.get(index).map_or(Timestamp::INVALID, Value::to_date)
    }

    fn integer(&self, index: usize) -> f64 {
        self.args.get(index).map_or(f64::NAN, Value::to_integer)
    }

    /// Returns the options object at the given position, if there is one.
    fn options(&self, index: usize) -> Option<&'a Object> {
        match self.args.get(index)? {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Builds week options from the options object at the given position.
    ///
    /// Each key is looked up explicitly first and then under
    /// `locale.options`, and only the value chosen is converted. So a bad
    /// locale value is never seen when an explicit one is given. The first
    /// week date is only read when `first_week` is true, which is the case
    /// for operations that number weeks.
    fn week_options(
        &self,
        index: usize,
        first_week: bool,
    ) -> Result<WeekOptions, Error> {
        let mut week_options = WeekOptions::new();
        let Some(options) = self.options(index) else {
            return Ok(week_options);
        };
        let locale_options = match options.get_present("locale") {
            Some(Value::Object(locale)) => match locale.get_present("options")
            {
                Some(Value::Object(locale_options)) => Some(locale_options),
                _ => None,
            },
            _ => None,
        };
        let from_locale =
            |key| locale_options.and_then(|o| o.get_present(key));

        let mut locale = Locale::new();
        let key = "weekStartsOn";
        if let Some(value) = options.get_present(key) {
            week_options = week_options.week_starts_on(option(key, value)?);
        } else if let Some(value) = from_locale(key) {
            locale = locale.week_starts_on(option(key, value)?);
        }
        if first_week {
            let key = "firstWeekContainsDate";
            if let Some(value) = options.get_present(key) {
                week_options =
                    week_options.first_week_contains_date(option(key, value)?);
            } else if let Some(value) = from_locale(key) {
                locale = locale.first_week_contains_date(option(key, value)?);
            }
        }
        if locale_options.is_some() {
            week_options = week_options.locale(locale);
        }
        Ok(week_options)
    }

    fn rounding_method(&self, index: usize) -> Result<RoundingMethod, Error> {
        let Some(object) = self.options(index) else {
            return Ok(RoundingMethod::default());
        };
        match object.get_present("roundingMethod") {
            None => Ok(RoundingMethod::default()),
            Some(Value::String(name)) => name.parse(),
            Some(_) => Err(options::Error::UnknownRoundingMethod.into()),
        }
    }

    /// Converts the duration object at the given position.
    ///
    /// Units that are missing or not numbers count as zero. `None` is
    /// returned when the argument isn't an object at all.
    fn duration(&self, index: usize) -> Option<Duration> {
        let Some(object) = self.options(index) else {
            trace!("duration argument is not an object");
            return None;
        };
        let unit = |key| {
            object.get(key).map_or(0, |v| {
                let n = v.to_integer();
                if n.is_nan() {
                    0
                } else {
                    // Saturating. Durations this large give an invalid
                    // result anyway.
                    n as i64
                }
            })
        };
        Some(
            Duration::new()
                .years(unit("years"))
                .months(unit("months"))
                .weeks(unit("weeks"))
                .days(unit("days"))
                .hours(unit("hours"))
                .minutes(unit("minutes"))
                .seconds(unit("seconds")),
        )
    }
}

/// Converts the value of an option to an integer.
fn option(key: &'static str, value: &Value) -> Result<i64, Error> {
    let n = value.to_integer();
    if n.is_nan() {
        return Err(options::Error::NotANumber { what: key }.into());
    }
    // Infinities saturate, which puts them out of range for every option.
    Ok(n as i64)
}

/// Converts a finite integral float to an integer. `NaN` and infinities
/// give `None`.
fn finite(n: f64) -> Option<i64> {
    if n.is_finite() {
        Some(n as i64)
    } else {
        None
    }
}

fn timestamp(ts: Timestamp) -> Value {
    Value::Timestamp(ts)
}

fn number(n: Option<i64>) -> Value {
    Value::Number(n.map_or(f64::NAN, |n| n as f64))
}

/// Parses a string as a number the way implicit numeric conversion does.
///
/// Surrounding whitespace is ignored and an empty string is zero. Only the
/// exact spelling `Infinity` (optionally signed) is accepted for infinity.
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if s.bytes().any(|b| {
            b.is_ascii_alphabetic() && b != b'e' && b != b'E'
        }) =>
        {
            f64::NAN
        }
        _ => s.parse().unwrap_or(f64::NAN),
    }
}
