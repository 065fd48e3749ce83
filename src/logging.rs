#![allow(unused_macros)]

//! Log shims. With the `logging` feature off these expand to nothing, so the
//! arguments are never evaluated.

#[allow(dead_code)]
pub(crate) const TARGET: &str = "ptrarray";

macro_rules! debug {
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::debug!(target: crate::logging::TARGET, $($arg)+);
    )
}

macro_rules! trace {
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::trace!(target: crate::logging::TARGET, $($arg)+);
    )
}
