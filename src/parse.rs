//! Free-form input decoding.
//!
//! Input text is matched against a fixed set of shapes in strict
//! priority order, each anchored at the start of the trimmed input;
//! the first shape that matches consumes it. Decoding never fails:
//! anything unrecognized is tagged
//! [`DecodedInput::Unrecognized`] and the caller falls back to the
//! current instant.

/// `(year, month, day)` captured from a date shape.
pub(crate) type Ymd = (i32, i32, i32);

/// `(hour, minute, second)` captured from a time shape.
pub(crate) type Hms = (i8, i8, i8);

/// The tagged result of decoding one input string.
///
/// Priority order, first match wins:
/// date+time+seconds, date+time, date only, time+seconds, time only,
/// bare epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodedInput {
    /// `Y[/-]m[/-]d H:i` with optional `:s` (zero when absent).
    DateTime { ymd: Ymd, hms: Hms },
    /// `Y[/-]m[/-]d`
    Date { ymd: Ymd },
    /// `H:i` with optional `:s` (zero when absent).
    Time { hms: Hms },
    /// A bare run of digits, taken as epoch seconds.
    Timestamp(i64),
    /// Nothing matched.
    Unrecognized,
}

/// Decodes `input` into its highest-priority shape.
pub(crate) fn decode(input: &str) -> DecodedInput {
    let bytes = input.trim().as_bytes();

    if let Some((ymd, rest)) = scan_date(bytes) {
        let rest = skip_spaces(rest);
        if let Some((hms, _)) = scan_time(rest) {
            return DecodedInput::DateTime { ymd, hms };
        }
        return DecodedInput::Date { ymd };
    }

    if let Some((hms, _)) = scan_time(bytes) {
        return DecodedInput::Time { hms };
    }

    if let Some(seconds) = scan_timestamp(bytes) {
        return DecodedInput::Timestamp(seconds);
    }

    DecodedInput::Unrecognized
}

// ==== Scanners ====

/// Scans `Y[/-]m[/-]d` with a 1-4 digit year and 1-2 digit month/day.
fn scan_date(bytes: &[u8]) -> Option<(Ymd, &[u8])> {
    let (year, rest) = scan_number(bytes, 4)?;
    let rest = scan_separator(rest, b"/-")?;
    let (month, rest) = scan_number(rest, 2)?;
    let rest = scan_separator(rest, b"/-")?;
    let (day, rest) = scan_number(rest, 2)?;
    Some(((year as i32, month as i32, day as i32), rest))
}

/// Scans `H:i` or `H:i:s` with 1-2 digit components.
fn scan_time(bytes: &[u8]) -> Option<(Hms, &[u8])> {
    let (hour, rest) = scan_number(bytes, 2)?;
    let rest = scan_separator(rest, b":")?;
    let (minute, rest) = scan_number(rest, 2)?;
    let Some(after_colon) = scan_separator(rest, b":") else {
        return Some(((hour as i8, minute as i8, 0), rest));
    };
    match scan_number(after_colon, 2) {
        Some((second, rest)) => Some(((hour as i8, minute as i8, second as i8), rest)),
        None => Some(((hour as i8, minute as i8, 0), rest)),
    }
}

/// Accepts only an unbroken run of digits as an epoch-second count.
fn scan_timestamp(bytes: &[u8]) -> Option<i64> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

/// Scans up to `max_digits` leading ASCII digits.
fn scan_number(bytes: &[u8], max_digits: usize) -> Option<(i64, &[u8])> {
    let count = bytes
        .iter()
        .take(max_digits)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if count == 0 {
        return None;
    }
    let mut value = 0i64;
    for digit in &bytes[..count] {
        value = value * 10 + i64::from(digit - b'0');
    }
    Some((value, &bytes[count..]))
}

fn scan_separator<'a>(bytes: &'a [u8], allowed: &[u8]) -> Option<&'a [u8]> {
    match bytes.first() {
        Some(b) if allowed.contains(b) => Some(&bytes[1..]),
        _ => None,
    }
}

fn skip_spaces(bytes: &[u8]) -> &[u8] {
    let mut rest = bytes;
    while let Some((b' ' | b'\t', tail)) = rest.split_first() {
        rest = tail;
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_datetime_with_seconds() {
        assert_eq!(
            decode("1395-01-04 23:54:10"),
            DecodedInput::DateTime {
                ymd: (1395, 1, 4),
                hms: (23, 54, 10)
            }
        );
    }

    #[test]
    fn datetime_without_seconds_defaults_to_zero() {
        assert_eq!(
            decode("1395/01/04 23:54"),
            DecodedInput::DateTime {
                ymd: (1395, 1, 4),
                hms: (23, 54, 0)
            }
        );
    }

    #[test]
    fn date_only_with_either_separator() {
        assert_eq!(
            decode("1395/05/04"),
            DecodedInput::Date { ymd: (1395, 5, 4) }
        );
        assert_eq!(decode("1395-5-04"), DecodedInput::Date { ymd: (1395, 5, 4) });
    }

    #[test]
    fn short_year_and_single_digit_fields() {
        assert_eq!(decode("95-1-4"), DecodedInput::Date { ymd: (95, 1, 4) });
    }

    #[test]
    fn time_shapes() {
        assert_eq!(
            decode("23:54:10"),
            DecodedInput::Time { hms: (23, 54, 10) }
        );
        assert_eq!(decode("23:54"), DecodedInput::Time { hms: (23, 54, 0) });
    }

    #[test]
    fn bare_timestamp() {
        assert_eq!(decode("1466664181"), DecodedInput::Timestamp(1466664181));
    }

    #[test]
    fn date_beats_timestamp_and_time() {
        // A digit run with separators is a date, not epoch seconds.
        assert_eq!(
            decode("1395-04-03"),
            DecodedInput::Date { ymd: (1395, 4, 3) }
        );
    }

    #[test]
    fn unrecognized_inputs() {
        assert_eq!(decode(""), DecodedInput::Unrecognized);
        assert_eq!(decode("not a date"), DecodedInput::Unrecognized);
        assert_eq!(decode("12:"), DecodedInput::Unrecognized);
        // Shapes are anchored: leading text defeats an interior date.
        assert_eq!(decode("x 1395-01-04"), DecodedInput::Unrecognized);
    }
}
