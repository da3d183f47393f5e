//! Pattern-driven rendering of Jalali date/time values.
//!
//! The formatter makes a single left-to-right scan over the pattern.
//! A character from the token alphabet is treated as a directive only
//! when the character after it is a separator, a digit, another token
//! character, or the end of the pattern; anything else is copied
//! through literally, so literal text can be embedded in a pattern
//! without escaping.
//!
//! Jalali tokens read the cached `(year, month, day)` projection;
//! calendar-agnostic tokens (hour, minute, offset, ...) fall through
//! to the underlying civil instant.

use jiff::Zoned;

use crate::convert::{self, JalaliFields};

/// Digit rendering applied after the pattern is resolved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// ASCII digits.
    #[default]
    English,
    /// Persian digit glyphs, substituted over the rendered output.
    Persian,
}

/// Full Persian month names, Farvardin first.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Abbreviated Persian month names.
pub(crate) const MONTH_NAMES_SHORT: [&str; 12] = [
    "فرو", "ارد", "خرد", "تیر", "مرد", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
];

/// Persian weekday names, Saturday first.
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Single-letter Persian weekday abbreviations, Saturday first.
pub(crate) const WEEKDAY_NAMES_SHORT: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

const ANTE_MERIDIEM_SHORT: &str = "ق.ظ";
const POST_MERIDIEM_SHORT: &str = "ب.ظ";
const ANTE_MERIDIEM: &str = "قبل از ظهر";
const POST_MERIDIEM: &str = "بعد از ظهر";

/// Every character the scanner may treat as a directive.
const TOKEN_ALPHABET: &str = "YymndjDlFMtLozWaAHisGghuUNweIOPTcr";

/// Renders `pattern` against a Jalali projection and its civil instant.
pub(crate) fn render(fields: JalaliFields, zoned: &Zoned, pattern: &str, locale: Locale) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(symbol) = chars.next() {
        if is_token(symbol) && boundary_follows(chars.peek().copied()) {
            resolve_token(symbol, fields, zoned, &mut out);
        } else {
            out.push(symbol);
        }
    }

    match locale {
        Locale::English => out,
        Locale::Persian => persian_digits(&out),
    }
}

#[inline]
fn is_token(symbol: char) -> bool {
    TOKEN_ALPHABET.contains(symbol)
}

/// A token must be delimited by a separator, digit, another token
/// character, or the end of the pattern.
#[inline]
fn boundary_follows(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => {
            c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | ':' | '/') || is_token(c)
        }
    }
}

fn resolve_token(symbol: char, fields: JalaliFields, zoned: &Zoned, out: &mut String) {
    use std::fmt::Write;

    // Infallible for String targets.
    let _ = match symbol {
        // ==== Jalali field tokens ====
        'Y' => write!(out, "{:04}", fields.year),
        'y' => write!(out, "{:02}", fields.year.rem_euclid(100)),
        'o' => write!(out, "{}", fields.year),
        'm' => write!(out, "{:02}", fields.month),
        'n' => write!(out, "{}", fields.month),
        'd' => write!(out, "{:02}", fields.day),
        'j' => write!(out, "{}", fields.day),
        'F' => {
            out.push_str(month_name(fields.month, &MONTH_NAMES));
            Ok(())
        }
        'M' => {
            out.push_str(month_name(fields.month, &MONTH_NAMES_SHORT));
            Ok(())
        }
        'D' => {
            out.push_str(WEEKDAY_NAMES_SHORT[weekday_index(zoned)]);
            Ok(())
        }
        'l' => {
            out.push_str(WEEKDAY_NAMES[weekday_index(zoned)]);
            Ok(())
        }
        't' => write!(
            out,
            "{}",
            convert::days_in_month(fields.month, convert::is_leap_jalali(fields.year))
        ),
        'L' => write!(out, "{}", i32::from(convert::is_leap_jalali(fields.year))),
        'z' => write!(out, "{}", convert::day_of_year(fields.month, fields.day)),
        'W' => write!(
            out,
            "{}",
            convert::week_of_year(convert::day_of_year(fields.month, fields.day))
        ),
        'a' => {
            out.push_str(meridiem(zoned, ANTE_MERIDIEM_SHORT, POST_MERIDIEM_SHORT));
            Ok(())
        }
        'A' => {
            out.push_str(meridiem(zoned, ANTE_MERIDIEM, POST_MERIDIEM));
            Ok(())
        }

        // ==== Civil fall-through tokens ====
        'H' => write!(out, "{:02}", zoned.hour()),
        'G' => write!(out, "{}", zoned.hour()),
        'h' => write!(out, "{:02}", hour12(zoned)),
        'g' => write!(out, "{}", hour12(zoned)),
        'i' => write!(out, "{:02}", zoned.minute()),
        's' => write!(out, "{:02}", zoned.second()),
        'u' => write!(out, "{:06}", zoned.subsec_nanosecond() / 1_000),
        'U' => write!(out, "{}", zoned.timestamp().as_second()),
        'N' => write!(out, "{}", zoned.weekday().to_monday_one_offset()),
        'w' => write!(out, "{}", zoned.weekday().to_sunday_zero_offset()),
        'e' => {
            out.push_str(zoned.time_zone().iana_name().unwrap_or_default());
            Ok(())
        }
        'I' => {
            let info = zoned.time_zone().to_offset_info(zoned.timestamp());
            write!(out, "{}", i32::from(info.dst().is_dst()))
        }
        'T' => {
            let info = zoned.time_zone().to_offset_info(zoned.timestamp());
            out.push_str(info.abbreviation());
            Ok(())
        }
        'O' => {
            let (sign, hours, minutes) = offset_parts(zoned);
            write!(out, "{sign}{hours:02}{minutes:02}")
        }
        'P' => {
            let (sign, hours, minutes) = offset_parts(zoned);
            write!(out, "{sign}{hours:02}:{minutes:02}")
        }
        'c' => {
            let (sign, hours, minutes) = offset_parts(zoned);
            write!(
                out,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{sign}{hours:02}:{minutes:02}",
                zoned.year(),
                zoned.month(),
                zoned.day(),
                zoned.hour(),
                zoned.minute(),
                zoned.second(),
            )
        }
        'r' => {
            // Empty substitution when the instant cannot be rendered.
            out.push_str(&jiff::fmt::rfc2822::to_string(zoned).unwrap_or_default());
            Ok(())
        }
        _ => Ok(()),
    };
}

#[inline]
fn month_name(month: u8, table: &'static [&'static str; 12]) -> &'static str {
    table
        .get(usize::from(month).wrapping_sub(1))
        .copied()
        .unwrap_or_default()
}

/// Saturday-first weekday index of the civil instant.
#[inline]
fn weekday_index(zoned: &Zoned) -> usize {
    (zoned.weekday().to_sunday_zero_offset() as usize + 1) % 7
}

#[inline]
fn hour12(zoned: &Zoned) -> i8 {
    match zoned.hour() % 12 {
        0 => 12,
        h => h,
    }
}

#[inline]
fn meridiem(zoned: &Zoned, ante: &'static str, post: &'static str) -> &'static str {
    if zoned.hour() < 12 {
        ante
    } else {
        post
    }
}

fn offset_parts(zoned: &Zoned) -> (char, i32, i32) {
    let seconds = zoned.offset().seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let magnitude = seconds.abs();
    (sign, magnitude / 3600, magnitude % 3600 / 60)
}

/// Maps ASCII digits to Persian digit glyphs over an entire string.
pub(crate) fn persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                // U+06F0 is EXTENDED ARABIC-INDIC DIGIT ZERO.
                char::from_u32(0x06F0 + (c as u32 - '0' as u32)).unwrap_or(c)
            }
            other => other,
        })
        .collect()
}
