//! Error types for calends.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Argument checks go
//! through the [`ensure!`](crate::ensure) macro and hard failures through
//! [`fail!`](crate::fail), so call sites stay one line long.

use thiserror::Error;

/// The top-level error type used throughout calends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// A caller-side precondition was violated (e.g. start after current).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A calendar conversion or date arithmetic step failed.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A custom weekly mask selects no weekday, so no occurrence exists.
    #[error("no matching weekday in mask {mask:#010b}")]
    NoMatchingWeekday {
        /// The mask that was scanned.
        mask: u8,
    },
}

/// Shorthand `Result` type used throughout calends.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use calends_core::{ensure, errors::Error};
/// fn positive(x: i32) -> calends_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use calends_core::{fail, errors::Error};
/// fn always_err() -> calends_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
