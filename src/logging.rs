// Not every level is used in every module. Just squash the warnings.
#![allow(unused_macros)]

// These expand to nothing unless the `logging` feature is enabled, in which
// case they forward to the `log` crate. Arguments are not evaluated when the
// feature is disabled, so formatting a timestamp in a trace message costs
// nothing in the default configuration.

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}
