use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    NotANumber { what: &'static str },
    UnknownRoundingMethod,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Options(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            NotANumber { what } => write!(
                f,
                "parameter '{what}' is not a number and \
                 cannot be converted to an integer",
            ),
            UnknownRoundingMethod => f.write_str(
                "unrecognized rounding method, \
                 expected one of 'trunc', 'round', 'ceil' or 'floor'",
            ),
        }
    }
}
