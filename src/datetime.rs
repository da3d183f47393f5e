//! This module implements [`Jalali`], the calendar-aware date/time
//! value.
//!
//! A `Jalali` owns one civil instant (a [`jiff::Zoned`]) and a cached
//! Jalali `(year, month, day)` projection of it. The instant is the
//! system of record for *when*; the projection is the source of truth
//! for the calendar fields between mutations. Every mutator that moves
//! the instant re-derives the projection before returning, so any
//! observable read sees the two in agreement.
//!
//! One deliberate quirk carried over from the original design: the
//! unit arithmetic (`add_months`, `add_years`, ...) shifts the
//! underlying *Gregorian* calendar field, not the Jalali one, and the
//! Jalali projection is then recomputed from the result.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use jiff::civil;
use jiff::{Span, Timestamp, Zoned};

use crate::convert::{self, JalaliFields};
use crate::format::Locale;
use crate::gregorian::Gregorian;
use crate::parse::{decode, DecodedInput};
use crate::tz::TimeZoneSpec;
use crate::{JalaliResult, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR};

/// A date/time value expressed in the Jalali (Persian) calendar.
///
/// ```
/// use jalali_rs::Jalali;
///
/// let date = Jalali::from_timestamp(1466664181, "Asia/Tehran").unwrap();
/// assert_eq!(date.format("Y-m-d H:i:s"), "1395-04-03 11:13:01");
/// ```
#[derive(Debug, Clone)]
pub struct Jalali {
    zoned: Zoned,
    fields: JalaliFields,
}

// ==== Construction ====

impl Jalali {
    #[inline]
    fn project(zoned: &Zoned) -> JalaliFields {
        convert::gregorian_to_jalali(
            i32::from(zoned.year()),
            i32::from(zoned.month()),
            i32::from(zoned.day()),
        )
    }

    /// Creates a value from an already-resolved civil instant.
    #[must_use]
    pub fn from_zoned(zoned: Zoned) -> Self {
        let fields = Self::project(&zoned);
        Self { zoned, fields }
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

    /// Decodes a free-form date/time string.
    ///
    /// Unrecognized text is not an error: the value falls back to the
    /// current instant. A time-only input keeps the current date and
    /// overrides the time of day; a date-only input keeps the current
    /// time of day. Only an unresolvable time zone fails.
    pub fn parse(text: &str, tz: impl Into<TimeZoneSpec>) -> JalaliResult<Self> {
        let tz = tz.into().resolve()?;
        let decoded = decode(text);

        if let DecodedInput::Timestamp(seconds) = decoded {
            if let Ok(instant) = Timestamp::from_second(seconds) {
                return Ok(Self::from_zoned(instant.to_zoned(tz)));
            }
            // An epoch count past the representable range is treated
            // like any other unusable input.
        }

        let fallback = Self::from_zoned(Timestamp::now().to_zoned(tz));
        let mut value = fallback.clone();
        match value.apply_decoded(decoded) {
            Ok(()) => Ok(value),
            Err(_) => {
                #[cfg(feature = "log")]
                log::debug!("date/time input {text:?} is out of range, using current instant");
                Ok(fallback)
            }
        }
    }

    fn apply_decoded(&mut self, decoded: DecodedInput) -> JalaliResult<()> {
        match decoded {
            DecodedInput::DateTime { ymd, hms } => {
                self.set_date(ymd.0, ymd.1, ymd.2)?;
                self.set_time_carrying(hms.0, hms.1, hms.2)?;
            }
            DecodedInput::Date { ymd } => {
                self.set_date(ymd.0, ymd.1, ymd.2)?;
            }
            DecodedInput::Time { hms } => {
                self.set_time_carrying(hms.0, hms.1, hms.2)?;
            }
            _ => {
                #[cfg(feature = "log")]
                log::debug!("unrecognized date/time input, using current instant");
            }
        }
        Ok(())
    }

    /// Creates a value from explicit Jalali fields.
    pub fn create(
        year: i32,
        month: i32,
        day: i32,
        hour: i8,
        minute: i8,
        second: i8,
        tz: impl Into<TimeZoneSpec>,
    ) -> JalaliResult<Self> {
        let tz = tz.into().resolve()?;
        let g = convert::jalali_to_gregorian(year, month, day);
        let datetime = civil::DateTime::new(
            g.year as i16,
            g.month as i8,
            g.day as i8,
            hour,
            minute,
            second,
            0,
        )?;
        let zoned = datetime.to_zoned(tz)?;
        Ok(Self {
            zoned,
            fields: JalaliFields::new_unchecked(year, month as u8, day as u8),
        })
    }

    /// Creates a value from a Jalali date, keeping the current time of
    /// day.
    pub fn create_date(
        year: i32,
        month: i32,
        day: i32,
        tz: impl Into<TimeZoneSpec>,
    ) -> JalaliResult<Self> {
        let mut value = Self::now_in(tz)?;
        value.set_date(year, month, day)?;
        Ok(value)
    }

    /// Creates a value from a time of day on the current Jalali date.
    pub fn create_time(
        hour: i8,
        minute: i8,
        second: i8,
        tz: impl Into<TimeZoneSpec>,
    ) -> JalaliResult<Self> {
        let mut value = Self::now_in(tz)?;
        value.set_time(hour, minute, second)?;
        Ok(value)
    }

    /// Creates a value from epoch seconds.
    pub fn from_timestamp(seconds: i64, tz: impl Into<TimeZoneSpec>) -> JalaliResult<Self> {
        let tz = tz.into().resolve()?;
        let instant = Timestamp::from_second(seconds)?;
        Ok(Self::from_zoned(instant.to_zoned(tz)))
    }

    /// The current instant shifted back one day.
    pub fn yesterday() -> JalaliResult<Self> {
        let mut value = Self::now()?;
        value.sub_days(1)?;
        Ok(value)
    }

    /// The current instant shifted forward one day.
    pub fn tomorrow() -> JalaliResult<Self> {
        let mut value = Self::now()?;
        value.add_days(1)?;
        Ok(value)
    }
}

impl FromStr for Jalali {
    type Err = crate::JalaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, TimeZoneSpec::System)
    }
}

// ==== Mutation ====

impl Jalali {
    /// Overwrites the Jalali date, keeping the time of day.
    ///
    /// The three fields are stored verbatim; no range validation is
    /// performed, and reads between this call and the next unit
    /// arithmetic reflect the stored fields exactly. The converted
    /// Gregorian date is unspecified for an invalid calendar date.
    pub fn set_date(&mut self, year: i32, month: i32, day: i32) -> JalaliResult<&mut Self> {
        self.fields = JalaliFields::new_unchecked(year, month as u8, day as u8);

        let g = convert::jalali_to_gregorian(year, month, day);
        let date = civil::Date::new(g.year as i16, g.month as i8, g.day as i8)?;
        self.zoned = self.zoned.with().date(date).build()?;
        Ok(self)
    }

    /// Overwrites the time of day, leaving the Jalali fields alone.
    pub fn set_time(&mut self, hour: i8, minute: i8, second: i8) -> JalaliResult<&mut Self> {
        let time = civil::Time::new(hour, minute, second, 0)?;
        self.zoned = self.zoned.with().time(time).build()?;
        Ok(self)
    }

    /// Overwrites the time of day, carrying out-of-range components
    /// into the next larger unit the way civil time setters normalize
    /// (70 minutes becomes one hour ten, possibly rolling the date).
    fn set_time_carrying(&mut self, hour: i8, minute: i8, second: i8) -> JalaliResult<&mut Self> {
        if let Ok(time) = civil::Time::new(hour, minute, second, 0) {
            self.zoned = self.zoned.with().time(time).build()?;
            return Ok(self);
        }
        let total =
            i64::from(hour) * SECONDS_PER_HOUR + i64::from(minute) * SECONDS_PER_MINUTE
                + i64::from(second);
        self.set_time(0, 0, 0)?;
        self.add_seconds(total)
    }

    /// Sets the time of day to `00:00:00`.
    pub fn start_of_day(&mut self) -> JalaliResult<&mut Self> {
        self.set_time(0, 0, 0)
    }

    /// Sets the time of day to `23:59:59`.
    pub fn end_of_day(&mut self) -> JalaliResult<&mut Self> {
        self.set_time(23, 59, 59)
    }

    fn add_span(&mut self, span: Span) -> JalaliResult<&mut Self> {
        self.zoned = self.zoned.checked_add(span)?;
        self.fields = Self::project(&self.zoned);
        Ok(self)
    }

    fn sub_span(&mut self, span: Span) -> JalaliResult<&mut Self> {
        self.zoned = self.zoned.checked_sub(span)?;
        self.fields = Self::project(&self.zoned);
        Ok(self)
    }

    /// Adds `n` Gregorian calendar years.
    pub fn add_years(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.add_span(Span::new().try_years(n)?)
    }

    /// Subtracts `n` Gregorian calendar years.
    pub fn sub_years(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.sub_span(Span::new().try_years(n)?)
    }

    /// Adds `n` Gregorian calendar months.
    pub fn add_months(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.add_span(Span::new().try_months(n)?)
    }

    /// Subtracts `n` Gregorian calendar months.
    pub fn sub_months(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.sub_span(Span::new().try_months(n)?)
    }

    /// Adds `n` weeks.
    pub fn add_weeks(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.add_span(Span::new().try_weeks(n)?)
    }

    /// Subtracts `n` weeks.
    pub fn sub_weeks(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.sub_span(Span::new().try_weeks(n)?)
    }

    /// Adds `n` days.
    pub fn add_days(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.add_span(Span::new().try_days(n)?)
    }

    /// Subtracts `n` days.
    pub fn sub_days(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.sub_span(Span::new().try_days(n)?)
    }

    /// Adds `n` hours.
    pub fn add_hours(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.add_span(Span::new().try_hours(n)?)
    }

    /// Subtracts `n` hours.
    pub fn sub_hours(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.sub_span(Span::new().try_hours(n)?)
    }

    /// Adds `n` minutes.
    pub fn add_minutes(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.add_span(Span::new().try_minutes(n)?)
    }

    /// Subtracts `n` minutes.
    pub fn sub_minutes(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.sub_span(Span::new().try_minutes(n)?)
    }

    /// Adds `n` seconds.
    pub fn add_seconds(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.add_span(Span::new().try_seconds(n)?)
    }

    /// Subtracts `n` seconds.
    pub fn sub_seconds(&mut self, n: i64) -> JalaliResult<&mut Self> {
        self.sub_span(Span::new().try_seconds(n)?)
    }
}

// ==== Field access ====

impl Jalali {
    /// The Jalali year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.fields.year
    }

    /// The Jalali month, `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.fields.month
    }

    /// The Jalali day of the month, `1..=31`.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.fields.day
    }

    /// The hour of the civil instant.
    #[inline]
    #[must_use]
    pub fn hour(&self) -> i8 {
        self.zoned.hour()
    }

    /// The minute of the civil instant.
    #[inline]
    #[must_use]
    pub fn minute(&self) -> i8 {
        self.zoned.minute()
    }

    /// The second of the civil instant.
    #[inline]
    #[must_use]
    pub fn second(&self) -> i8 {
        self.zoned.second()
    }

    /// The weekday of the civil instant.
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> civil::Weekday {
        self.zoned.weekday()
    }

    /// The number of days in the current Jalali month.
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        convert::days_in_month(
            self.fields.month,
            convert::is_leap_jalali(self.fields.year),
        )
    }

    /// One-based day of the Jalali year.
    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        convert::day_of_year(self.fields.month, self.fields.day)
    }

    /// One-based week of the Jalali year.
    #[inline]
    #[must_use]
    pub fn week_of_year(&self) -> u16 {
        convert::week_of_year(self.day_of_year())
    }

    /// Whether the current Jalali year is a leap year.
    #[inline]
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        convert::is_leap_jalali(self.fields.year)
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
}

// ==== Formatting, conversion, differences ====

impl Jalali {
    /// Renders the value through the Jalali token formatter.
    #[must_use]
    pub fn format(&self, pattern: &str) -> String {
        crate::format::render(self.fields, &self.zoned, pattern, Locale::English)
    }

    /// Like [`Jalali::format`], with a digit locale.
    #[must_use]
    pub fn format_with(&self, pattern: &str, locale: Locale) -> String {
        crate::format::render(self.fields, &self.zoned, pattern, locale)
    }

    /// Converts to the plain Gregorian wrapper, preserving the zone.
    #[must_use]
    pub fn to_gregorian(&self) -> Gregorian {
        Gregorian::from_zoned(self.zoned.clone())
    }

    #[inline]
    fn diff_seconds_signed(&self, other: &Self) -> i64 {
        other.timestamp() - self.timestamp()
    }

    #[inline]
    fn diff_in(&self, other: &Self, unit_seconds: i64, abs: bool) -> i64 {
        let value = self.diff_seconds_signed(other) / unit_seconds;
        if abs {
            value.abs()
        } else {
            value
        }
    }

    /// Seconds between `other` and `self` (`other - self`).
    #[must_use]
    pub fn diff_in_seconds(&self, other: &Self, abs: bool) -> i64 {
        self.diff_in(other, 1, abs)
    }

    /// Whole minutes between `other` and `self`, truncated.
    #[must_use]
    pub fn diff_in_minutes(&self, other: &Self, abs: bool) -> i64 {
        self.diff_in(other, SECONDS_PER_MINUTE, abs)
    }

    /// Whole hours between `other` and `self`, truncated.
    #[must_use]
    pub fn diff_in_hours(&self, other: &Self, abs: bool) -> i64 {
        self.diff_in(other, SECONDS_PER_HOUR, abs)
    }

    /// Whole years between `other` and `self`, truncated.
    ///
    /// Divides the epoch-second difference by [`SECONDS_PER_YEAR`]
    /// (365 days); not calendar-aware, so the result can be off by one
    /// around leap boundaries.
    #[must_use]
    pub fn diff_in_years(&self, other: &Self, abs: bool) -> i64 {
        self.diff_in(other, SECONDS_PER_YEAR, abs)
    }
}

// Comparison is by the underlying instant; two values in different
// zones representing the same moment are equal.

impl PartialEq for Jalali {
    fn eq(&self, other: &Self) -> bool {
        self.zoned.timestamp() == other.zoned.timestamp()
    }
}

impl Eq for Jalali {}

impl PartialOrd for Jalali {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Jalali {
    fn cmp(&self, other: &Self) -> Ordering {
        self.zoned.timestamp().cmp(&other.zoned.timestamp())
    }
}

impl fmt::Display for Jalali {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("Y/m/d H:i:s"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const TEHRAN: &str = "Asia/Tehran";

    #[test]
    fn timestamp_construction() {
        let date = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        assert_eq!(date.format("Y-m-d H:i:s"), "1395-04-03 11:13:01");
        assert_eq!(date.timestamp(), 1466664181);
    }

    #[test]
    fn timestamp_text_construction() {
        let date = Jalali::parse("1466664181", TEHRAN).unwrap();
        assert_eq!(date.format("Y-m-d H:i:s"), "1395-04-03 11:13:01");
        assert_eq!(date.format("U"), "1466664181");
    }

    #[test]
    fn date_construction_and_fields() {
        let date = Jalali::parse("1395-04-03", TEHRAN).unwrap();
        assert_eq!(date.format("Y-m-d"), "1395-04-03");
        assert_eq!(date.format("j"), "3");
        assert_eq!((date.year(), date.month(), date.day()), (1395, 4, 3));
    }

    #[test]
    fn datetime_construction() {
        let date = Jalali::parse("1395/04/03 11:13:01", TEHRAN).unwrap();
        assert_eq!(date.timestamp(), 1466664181);
        assert_eq!(date.to_string(), "1395/04/03 11:13:01");
    }

    #[test]
    fn time_only_overrides_time_of_day() {
        let date = Jalali::parse("23:54:10", TEHRAN).unwrap();
        let today = Jalali::now_in(TEHRAN).unwrap();
        assert_eq!((date.year(), date.month()), (today.year(), today.month()));
        assert_eq!((date.hour(), date.minute(), date.second()), (23, 54, 10));
    }

    #[test]
    fn out_of_range_time_text_normalizes() {
        // The grammar accepts "23:70"; the civil layer cannot, so the
        // excess minutes carry instead of failing construction.
        let date = Jalali::parse("23:70", "UTC").unwrap();
        assert_eq!((date.hour(), date.minute(), date.second()), (0, 10, 0));
    }

    #[test]
    fn out_of_range_datetime_text_carries_into_date() {
        let date = Jalali::parse("1395-04-03 23:70", TEHRAN).unwrap();
        assert_eq!(date.format("Y-m-d H:i:s"), "1395-04-04 00:10:00");
    }

    #[test]
    fn oversized_timestamp_falls_back_to_now() {
        // Within i64 but past the representable instant range.
        let date = Jalali::parse("999999999999999", "UTC").unwrap();
        let now = Jalali::now_in("UTC").unwrap();
        assert_eq!(now.diff_in_hours(&date, true), 0);
    }

    #[test]
    fn unparseable_falls_back_to_now() {
        let date = Jalali::parse("garbage input", TEHRAN).unwrap();
        let now = Jalali::now_in(TEHRAN).unwrap();
        assert!(now.diff_in_hours(&date, true) == 0);
    }

    #[test]
    fn invalid_zone_is_fatal() {
        let err = Jalali::parse("1395-04-03", "Not/AZone").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTimeZone);
    }

    #[test]
    fn explicit_create_matches_parse() {
        let a = Jalali::create(1395, 4, 3, 11, 13, 1, TEHRAN).unwrap();
        let b = Jalali::parse("1395-04-03 11:13:01", TEHRAN).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.timestamp(), 1466664181);
    }

    #[test]
    fn equality_across_representations() {
        let text = Jalali::parse("1395-04-03 11:13:01", TEHRAN).unwrap();
        let stamp = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        assert_eq!(text, stamp);
    }

    #[test]
    fn equality_ignores_zone() {
        let tehran = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        let utc = Jalali::from_timestamp(1466664181, "UTC").unwrap();
        assert_eq!(tehran, utc);
        assert_ne!(tehran.hour(), utc.hour());
    }

    #[test]
    fn ordering_follows_instant() {
        let earlier = Jalali::from_timestamp(1466664181, "UTC").unwrap();
        let later = Jalali::from_timestamp(1466664492, TEHRAN).unwrap();
        assert!(earlier < later);
        assert!(later > earlier);
    }

    #[test]
    fn add_then_sub_days_restores_value() {
        for n in [-400i64, -1, 0, 1, 45, 800] {
            let mut date = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
            let original = date.clone();
            date.add_days(n).unwrap();
            date.sub_days(n).unwrap();
            assert_eq!(date, original);
            assert_eq!(
                (date.year(), date.month(), date.day()),
                (original.year(), original.month(), original.day()),
                "projection did not return after shifting by {n} days"
            );
        }
    }

    #[test]
    fn arithmetic_uses_gregorian_months() {
        // 1395-04-03 is 2016-06-23; one Gregorian month later is
        // 2016-07-23, which is 1395-05-02.
        let mut date = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        date.add_months(1).unwrap();
        assert_eq!(date.format("Y-m-d"), "1395-05-02");
    }

    #[test]
    fn hour_arithmetic_crosses_midnight() {
        let mut date = Jalali::create(1395, 4, 3, 23, 0, 0, TEHRAN).unwrap();
        date.add_hours(2).unwrap();
        assert_eq!(date.format("Y-m-d H:i"), "1395-04-04 01:00");
        date.sub_minutes(61).unwrap();
        assert_eq!(date.format("Y-m-d H:i"), "1395-04-03 23:59");
    }

    #[test]
    fn set_date_is_verbatim_until_next_arithmetic() {
        // Esfand 1394 has 29 days; the stored fields still read back
        // as written.
        let mut date = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        date.set_date(1394, 12, 31).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1394, 12, 31));
        assert_eq!(date.format("Y-m-d"), "1394-12-31");
    }

    #[test]
    fn set_date_with_garbage_month_stays_observable() {
        // Verbatim storage means a month of zero is readable and
        // formattable without panicking.
        let mut date = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        date.set_date(1395, 0, 5).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1395, 0, 5));
        assert_eq!(date.format("z"), "0");
        assert_eq!(date.format("W"), "0");
        assert_eq!(date.day_of_year(), 0);
    }

    #[test]
    fn set_date_keeps_time_of_day() {
        let mut date = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        date.set_date(1390, 1, 1).unwrap();
        assert_eq!(date.format("H:i:s"), "11:13:01");
    }

    #[test]
    fn start_and_end_of_day() {
        let mut date = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        date.start_of_day().unwrap();
        assert_eq!(date.format("H:i:s"), "00:00:00");
        date.end_of_day().unwrap();
        assert_eq!(date.format("H:i:s"), "23:59:59");
        assert_eq!(date.format("Y-m-d"), "1395-04-03");
    }

    #[test]
    fn diff_in_years_fixture() {
        let date1 = Jalali::parse("1390-05-06", TEHRAN).unwrap();
        let date2 = Jalali::parse("1395-12-07", TEHRAN).unwrap();
        assert_eq!(date2.diff_in_years(&date1, true), 5);
        assert_eq!(date2.diff_in_years(&date1, false), -5);
    }

    #[test]
    fn diff_in_small_units() {
        let a = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        let b = Jalali::from_timestamp(1466664481, TEHRAN).unwrap();
        assert_eq!(a.diff_in_seconds(&b, true), 300);
        assert_eq!(a.diff_in_seconds(&b, false), 300);
        assert_eq!(b.diff_in_seconds(&a, false), -300);
        assert_eq!(a.diff_in_minutes(&b, true), 5);
        assert_eq!(a.diff_in_hours(&b, true), 0);
    }

    #[test]
    fn month_boundary_projection() {
        // Last day of Shahrivar (31 days) to first of Mehr.
        let mut date = Jalali::create(1395, 6, 31, 12, 0, 0, TEHRAN).unwrap();
        date.add_days(1).unwrap();
        assert_eq!(date.format("Y-m-d"), "1395-07-01");
        date.sub_days(1).unwrap();
        assert_eq!(date.format("Y-m-d"), "1395-06-31");
    }

    #[test]
    fn leap_year_accessors() {
        let leap = Jalali::create(1395, 12, 30, 0, 0, 0, TEHRAN).unwrap();
        assert!(leap.is_leap_year());
        assert_eq!(leap.days_in_month(), 30);
        let common = Jalali::create(1396, 12, 29, 0, 0, 0, TEHRAN).unwrap();
        assert!(!common.is_leap_year());
        assert_eq!(common.days_in_month(), 29);
    }

    #[test]
    fn to_gregorian_preserves_zone_and_instant() {
        let date = Jalali::from_timestamp(1466664181, TEHRAN).unwrap();
        let gregorian = date.to_gregorian();
        assert_eq!(gregorian.timestamp(), 1466664181);
        assert_eq!(gregorian.zoned().time_zone().iana_name(), Some(TEHRAN));
        assert_eq!(gregorian.to_string(), "2016/06/23 11:13:01");
    }

    #[test]
    fn from_str_uses_system_zone() {
        let date: Jalali = "1395-04-03 11:13:01".parse().unwrap();
        assert_eq!(date.format("Y-m-d H:i:s"), "1395-04-03 11:13:01");
    }
}
