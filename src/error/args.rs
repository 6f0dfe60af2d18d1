use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Call { function: &'static str },
    Missing { function: &'static str, required: usize, given: usize },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Args(err).into()
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
            Call { function } => write!(f, "failed to call `{function}`"),
            Missing { function, required, given } => write!(
                f,
                "`{function}` requires {required} argument{s}, \
                 but only {given} present",
                s = if required == 1 { "" } else { "s" },
            ),
        }
    }
}
