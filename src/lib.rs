//! The `jalali_rs` crate is a Jalali (Persian) calendar date/time
//! library backed by ordinary civil timestamps with time zones.
//!
//! ```rust
//! use jalali_rs::Jalali;
//!
//! // Parse a Jalali date/time in a named zone.
//! let date = Jalali::parse("1395-04-03 11:13:01", "Asia/Tehran").unwrap();
//! assert_eq!(date.timestamp(), 1466664181);
//! assert_eq!(date.format("l j F Y"), "پنجشنبه 3 تیر 1395");
//!
//! // The underlying instant stays Gregorian.
//! assert_eq!(date.to_gregorian().to_string(), "2016/06/23 11:13:01");
//! ```
//!
//! A [`Jalali`] owns one absolute instant (a [`jiff::Zoned`]) together
//! with a cached Jalali `(year, month, day)` projection of it. Field
//! access, textual rendering, and the parse grammar speak Jalali;
//! ordering, equality, and unit arithmetic operate on the instant.
//! The pure Gregorian↔Jalali day-counting conversions live in
//! [`convert`] and are usable on their own.
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

pub mod convert;
pub mod error;

mod datetime;
mod format;
mod gregorian;
mod parse;
mod tz;

#[doc(inline)]
pub use error::{ErrorKind, JalaliError};

pub use convert::{GregorianDate, JalaliFields};
pub use datetime::Jalali;
pub use format::Locale;
pub use gregorian::Gregorian;
pub use tz::TimeZoneSpec;

/// The crate result type.
pub type JalaliResult<T> = Result<T, JalaliError>;

// Unit sizes used by the truncating difference operations.
/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds per hour.
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
/// Seconds per 365-day year, the divisor behind
/// [`Jalali::diff_in_years`].
pub const SECONDS_PER_YEAR: i64 = 365 * 24 * SECONDS_PER_HOUR;
