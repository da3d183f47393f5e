//! Time-zone argument resolution.
//!
//! Construction accepts a time zone in four shapes: nothing (host
//! default), an already-opened zone, a zone name, or a bare numeric
//! hour offset. The offset shape is resolved to a *named* zone by
//! searching the bundled tz database for a zone currently at that
//! offset; an unresolvable name or offset is a fatal
//! [`InvalidTimeZone`](crate::ErrorKind::InvalidTimeZone) error.

use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::{JalaliError, JalaliResult};

/// The accepted shapes of a time-zone argument.
#[derive(Debug, Default, Clone)]
pub enum TimeZoneSpec {
    /// Use the host's configured time zone.
    #[default]
    System,
    /// Use an already-resolved zone as-is.
    Zone(TimeZone),
    /// Open a zone by IANA name, e.g. `"Asia/Tehran"`.
    Named(String),
    /// A whole-hour UTC offset, resolved to a named zone.
    Offset(i8),
}

impl TimeZoneSpec {
    /// Resolves this spec to a usable [`TimeZone`].
    pub fn resolve(&self) -> JalaliResult<TimeZone> {
        match self {
            Self::System => Ok(TimeZone::system()),
            Self::Zone(tz) => Ok(tz.clone()),
            Self::Named(name) => TimeZone::get(name).map_err(|_| {
                JalaliError::invalid_time_zone()
                    .with_message(format!("Unknown or bad timezone ({name})"))
            }),
            Self::Offset(hours) => named_zone_for_offset(*hours),
        }
    }
}

impl From<TimeZone> for TimeZoneSpec {
    fn from(tz: TimeZone) -> Self {
        Self::Zone(tz)
    }
}

impl From<&str> for TimeZoneSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for TimeZoneSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<i8> for TimeZoneSpec {
    fn from(hours: i8) -> Self {
        Self::Offset(hours)
    }
}

impl From<Option<TimeZoneSpec>> for TimeZoneSpec {
    fn from(spec: Option<TimeZoneSpec>) -> Self {
        spec.unwrap_or_default()
    }
}

/// Finds a named zone whose offset at the current instant matches the
/// requested whole-hour offset. First match wins.
fn named_zone_for_offset(hours: i8) -> JalaliResult<TimeZone> {
    let target_seconds = i32::from(hours) * 3600;
    let now = Timestamp::now();
    for name in jiff::tz::db().available() {
        let Ok(tz) = jiff::tz::db().get(name.as_str()) else {
            continue;
        };
        if tz.to_offset(now).seconds() == target_seconds {
            #[cfg(feature = "log")]
            log::debug!("resolved offset {hours} to zone {name}");
            return Ok(tz);
        }
    }
    Err(JalaliError::invalid_time_zone()
        .with_message(format!("Unknown or bad timezone ({hours})")))
}
