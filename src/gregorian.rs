//! A plain Gregorian wrapper over the civil instant.
//!
//! [`Gregorian`] adds no calendar logic of its own; it exists so that
//! [`Jalali::to_gregorian`](crate::Jalali::to_gregorian) has a value
//! to hand back, and as the matching entry point for going the other
//! way. Everything here is thin delegation to [`jiff::Zoned`].

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use jiff::{Timestamp, Zoned};

use crate::datetime::Jalali;
use crate::tz::TimeZoneSpec;
use crate::JalaliResult;

/// A Gregorian date/time with time zone.
#[derive(Debug, Clone)]
pub struct Gregorian {
    zoned: Zoned,
}

impl Gregorian {
    /// Wraps an already-resolved civil instant.
    #[inline]
    #[must_use]
    pub fn from_zoned(zoned: Zoned) -> Self {
        Self { zoned }
    }

    /// The current instant in the host's time zone.
    pub fn now() -> JalaliResult<Self> {
        Self::now_in(TimeZoneSpec::System)
    }

    /// The current instant in the given time zone.
    pub fn now_in(tz: impl Into<TimeZoneSpec>) -> JalaliResult<Self> {
        let tz = tz.into().resolve()?;
        Ok(Self::from_zoned(Timestamp::now().to_zoned(tz)))
    }

    /// Creates a value from epoch seconds.
    pub fn from_timestamp(seconds: i64, tz: impl Into<TimeZoneSpec>) -> JalaliResult<Self> {
        let tz = tz.into().resolve()?;
        let instant = Timestamp::from_second(seconds)?;
        Ok(Self::from_zoned(instant.to_zoned(tz)))
    }

    /// The Gregorian year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i16 {
        self.zoned.year()
    }

    /// The Gregorian month, `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> i8 {
        self.zoned.month()
    }

    /// The Gregorian day of the month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> i8 {
        self.zoned.day()
    }

    /// The number of days in the current Gregorian month.
    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> i8 {
        self.zoned.date().days_in_month()
    }

    /// Seconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.zoned.timestamp().as_second()
    }

    /// The underlying civil instant.
    #[inline]
    #[must_use]
    pub fn zoned(&self) -> &Zoned {
        &self.zoned
    }

    /// Shifts forward `n` days.
    pub fn add_days(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.zoned = self.zoned.checked_add(jiff::Span::new().try_days(n)?)?;
        Ok(self)
    }

    /// Shifts back `n` days.
    pub fn sub_days(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.zoned = self.zoned.checked_sub(jiff::Span::new().try_days(n)?)?;
        Ok(self)
    }

    /// Projects this instant onto the Jalali calendar, preserving the
    /// zone.
    #[must_use]
    pub fn to_jalali(&self) -> Jalali {
        Jalali::from_zoned(self.zoned.clone())
    }
}

impl FromStr for Gregorian {
    type Err = crate::JalaliError;

    /// Accepts a bare digit run as epoch seconds; anything else is
    /// handed to the civil-time parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(seconds) = trimmed.parse::<i64>() {
                return Self::from_timestamp(seconds, TimeZoneSpec::System);
            }
        }
        let zoned = trimmed.parse::<Zoned>()?;
        Ok(Self::from_zoned(zoned))
    }
}

impl PartialEq for Gregorian {
    fn eq(&self, other: &Self) -> bool {
        self.zoned.timestamp() == other.zoned.timestamp()
    }
}

impl Eq for Gregorian {}

impl PartialOrd for Gregorian {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Gregorian {
    fn cmp(&self, other: &Self) -> Ordering {
        self.zoned.timestamp().cmp(&other.zoned.timestamp())
    }
}

impl fmt::Display for Gregorian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.zoned.year(),
            self.zoned.month(),
            self.zoned.day(),
            self.zoned.hour(),
            self.zoned.minute(),
            self.zoned.second(),
        )
    }
}
