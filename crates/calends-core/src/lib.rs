//! # calends-core
//!
//! Core types shared by every crate in the calends workspace: the error
//! hierarchy with its `ensure!` / `fail!` macros, and the [`Clock`]
//! abstraction that supplies "now".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Current-time source (`Clock`, `SystemClock`, `FixedClock`).
pub mod clock;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
