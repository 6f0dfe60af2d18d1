pub(crate) mod itime;
#[cfg(not(feature = "std"))]
pub(crate) mod libm;
