use alloc::sync::Arc;

pub(crate) mod args;
pub(crate) mod options;

/// An error that can occur in this crate.
///
/// Errors in this crate are reserved for *contract violations*. That is,
/// problems with how an operation was called rather than with the data it
/// was given:
///
/// * Calling an entry point in the [`dynamic`](crate::dynamic) layer with
/// fewer arguments than it requires. See [`Error::is_missing_argument`].
/// * Configuration values that resolve outside of their valid range, for
/// example, a `weekStartsOn` of `7` or a `NaN` `firstWeekContainsDate`.
/// See [`Error::is_range`].
///
/// Notably, an invalid or unrepresentable *date* is never an error. Such
/// values are represented by [`Timestamp::INVALID`](crate::Timestamp::INVALID)
/// (or `None` for integer results) and propagate through arithmetic without
/// interrupting it.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type currently provides
/// very limited introspection capabilities. Simple predicates like
/// `Error::is_range` are provided, but the predicates are not
/// exhaustive. That is, there exist some errors that do not return
/// `true` for any of the `Error::is_*` predicates.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Finer grained
/// error types are hard to compose, and every operation in this crate can
/// fail in at most a couple of ways anyway.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make clones cheap and to keep the size of an
    /// error equal to one word.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// Callers should generally use their own error types. But in some
    /// circumstances, it can be convenient to manufacture an error value
    /// from this crate specifically.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated as a result of a
    /// configuration value being outside of its valid domain.
    ///
    /// This includes values that are not numbers at all, like a `NaN`
    /// `weekStartsOn`, and unrecognized rounding method names.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{Calendar, Timestamp, WeekOptions};
    ///
    /// let ts = Timestamp::from_gregorian(2007, 12, 31, 0, 0, 0, 0);
    /// let options = WeekOptions::new().week_starts_on(7);
    /// let err = Calendar::UTC.start_of_week(ts, &options).unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::ErrorKind::*;
        matches!(*self.root().kind(), Range(_) | Options(_))
    }

    /// Returns true when this error originated as a result of calling an
    /// entry point with fewer arguments than it requires.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali::{dynamic::{self, Function, Value}, Calendar};
    ///
    /// let err = dynamic::invoke(
    ///     &Calendar::UTC,
    ///     Function::DifferenceInMonths,
    ///     &[Value::Number(0.0)],
    /// ).unwrap_err();
    /// assert!(err.is_missing_argument());
    /// ```
    pub fn is_missing_argument(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Args(_))
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "weekStartsOn")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        if let Some(inner) = err.inner.as_mut().and_then(Arc::get_mut) {
            debug_assert!(
                inner.cause.is_none(),
                "cause of consequence must be `None`"
            );
            inner.cause = Some(self);
            return err;
        }
        // The consequent is shared, so we can't attach a cause to it. Keep
        // the root cause instead, since that's what the predicates inspect.
        self
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) =
            err.inner.as_ref().and_then(|inner| inner.cause.as_ref())
        {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Args(self::args::Error),
    Options(self::options::Error),
    Range(RangeError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Args(ref err) => err.fmt(f),
            Options(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown jalali error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This exists to support the `Error::from_args` public API, which permits
/// users of this crate to manifest their own `Error` values from an
/// arbitrary message.
struct AdhocError {
    message: alloc::boxed::Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the consequent error built by the given closure with
    /// this (`self`) error as the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an API
    // guarantee, but if the size increases, we really want to make sure we
    // decide to do that intentionally.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn range_message() {
        insta::assert_snapshot!(
            Error::range("weekStartsOn", 7, 0, 6),
            @"parameter 'weekStartsOn' with value 7 is not in the required range of 0..=6",
        );
    }

    #[test]
    fn context_keeps_root_predicates() {
        let err = Err::<(), _>(Error::range("nearestTo", 31, 1, 30))
            .with_context(|| Error::from_args(format_args!("rounding failed")))
            .unwrap_err();
        assert!(err.is_range());
        assert!(!err.is_missing_argument());
        insta::assert_snapshot!(
            err,
            @"rounding failed: parameter 'nearestTo' with value 31 is not in the required range of 1..=30",
        );
    }
}
