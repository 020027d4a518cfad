//! Shared result alias.
//!
//! Errors are plain domain enums (`StoreError`, `ApiError`, ...) defined next
//! to the code that produces them. They become a [`Report`] with `?` at the
//! point of failure, and callers read the typed context back with
//! `Report::current_context`.

use rootcause::Report;

/// `Result` carrying a rootcause [`Report`] typed by its context `C`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
