/* src/log.rs */

//! Internal logging macros.
//!
//! With the `tracing` feature these forward to the `tracing` crate. Without
//! it they expand to nothing, so the cursor carries no logging cost at all.

#[cfg(feature = "tracing")]
macro_rules! debug {
	($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
	($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace {
	($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
	($($arg:tt)*) => {};
}

pub(crate) use {debug, trace};
