//! Day-counting conversions between the Gregorian and Jalali calendars.
//!
//! Both transforms route a calendar date through a single integer day
//! count anchored near the two epochs (Gregorian 1600-03-21 and Jalali
//! year 979), then redistribute the count over fixed month tables. The
//! Jalali year is located with the 33-year sub-cycle rule.
//!
//! The functions here are total for any integer triple: out-of-range
//! month/day inputs never panic or error, but the result for an
//! invalid calendar date is unspecified.

/// Gregorian month lengths, non-leap.
pub(crate) const GREGORIAN_MONTH_LENGTHS: [i64; 12] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Jalali month lengths, non-leap.
pub(crate) const JALALI_MONTH_LENGTHS: [i64; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// A Jalali `(year, month, day)` triple.
///
/// `month` and `day` are one-based.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JalaliFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl JalaliFields {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// A Gregorian `(year, month, day)` triple plus the leap classification
/// of the Gregorian year.
///
/// The `leap` flag is produced as an incidental output of
/// [`jalali_to_gregorian`] so that callers needing a month-length query
/// do not have to run a second conversion. It is a property of this
/// conversion result, not of any date/time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub leap: bool,
}

// ==== Begin conversion equations ====

/// Converts a Gregorian civil date to its Jalali equivalent.
#[must_use]
pub fn gregorian_to_jalali(g_year: i32, g_month: i32, g_day: i32) -> JalaliFields {
    let gy = i64::from(g_year) - 1600;
    let gm = i64::from(g_month) - 1;
    let gd = i64::from(g_day) - 1;

    let mut g_day_no = 365 * gy + (gy + 3) / 4 - (gy + 99) / 100 + (gy + 399) / 400;
    for len in GREGORIAN_MONTH_LENGTHS.iter().take(gm.max(0) as usize) {
        g_day_no += len;
    }
    if gm > 1 && is_leap_gregorian(gy) {
        g_day_no += 1;
    }
    g_day_no += gd;

    let mut j_day_no = g_day_no - 79;
    let cycles = j_day_no.div_euclid(12053);
    j_day_no = j_day_no.rem_euclid(12053);
    let mut j_year = 979 + 33 * cycles + 4 * (j_day_no / 1461);
    j_day_no %= 1461;

    if j_day_no >= 366 {
        j_year += (j_day_no - 1) / 365;
        j_day_no = (j_day_no - 1) % 365;
    }

    let mut month_index = 0;
    while month_index < 11 && j_day_no >= JALALI_MONTH_LENGTHS[month_index] {
        j_day_no -= JALALI_MONTH_LENGTHS[month_index];
        month_index += 1;
    }

    JalaliFields::new_unchecked(j_year as i32, month_index as u8 + 1, j_day_no as u8 + 1)
}

/// Converts a Jalali date to its Gregorian equivalent.
///
/// The returned [`GregorianDate::leap`] reports whether the resulting
/// Gregorian year has 366 days.
#[must_use]
pub fn jalali_to_gregorian(j_year: i32, j_month: i32, j_day: i32) -> GregorianDate {
    let jy = i64::from(j_year) - 979;
    let jm = i64::from(j_month) - 1;
    let jd = i64::from(j_day) - 1;

    let mut j_day_no = 365 * jy + (jy / 33) * 8 + (jy % 33 + 3) / 4;
    for len in JALALI_MONTH_LENGTHS.iter().take(jm.max(0) as usize) {
        j_day_no += len;
    }
    j_day_no += jd;

    let mut g_day_no = j_day_no + 79;

    let mut g_year = 1600 + 400 * (g_day_no / 146097);
    g_day_no %= 146097;

    let mut leap = true;
    if g_day_no >= 36525 {
        g_day_no -= 1;
        g_year += 100 * (g_day_no / 36524);
        g_day_no %= 36524;
        if g_day_no >= 365 {
            g_day_no += 1;
        } else {
            leap = false;
        }
    }

    g_year += 4 * (g_day_no / 1461);
    g_day_no %= 1461;

    if g_day_no >= 366 {
        leap = false;
        g_day_no -= 1;
        g_year += g_day_no / 365;
        g_day_no %= 365;
    }

    let mut month_index = 0;
    loop {
        let len = GREGORIAN_MONTH_LENGTHS[month_index] + i64::from(month_index == 1 && leap);
        if month_index >= 11 || g_day_no < len {
            break;
        }
        g_day_no -= len;
        month_index += 1;
    }

    GregorianDate {
        year: g_year as i32,
        month: month_index as u8 + 1,
        day: g_day_no as u8 + 1,
        leap,
    }
}

/// Day count from the Jalali epoch anchor to the first day of `j_year`.
#[inline]
fn days_to_jalali_year(j_year: i64) -> i64 {
    let y = j_year - 979;
    365 * y + (y / 33) * 8 + (y % 33 + 3) / 4
}

/// Returns whether `j_year` is a Jalali leap year under the 33-year
/// cycle rule.
#[inline]
#[must_use]
pub fn is_leap_jalali(j_year: i32) -> bool {
    let y = i64::from(j_year);
    days_to_jalali_year(y + 1) - days_to_jalali_year(y) == 366
}

#[inline]
fn is_leap_gregorian(gy_since_1600: i64) -> bool {
    (gy_since_1600 % 4 == 0 && gy_since_1600 % 100 != 0) || gy_since_1600 % 400 == 0
}

// ==== End conversion equations ====

// ==== Begin month/week equations ====

/// Days in the given Jalali month: 31 for months 1-6, 30 for 7-11, and
/// for month 12 either 30 (`leap`) or 29.
#[inline]
#[must_use]
pub fn days_in_month(j_month: u8, leap: bool) -> u8 {
    match j_month {
        1..=6 => 31,
        12 => {
            if leap {
                30
            } else {
                29
            }
        }
        _ => 30,
    }
}

/// One-based day of the Jalali year.
///
/// Total like the conversions: a month outside `1..=12` produces a
/// nonsense-but-safe value rather than wrapping.
#[inline]
#[must_use]
pub fn day_of_year(j_month: u8, j_day: u8) -> u16 {
    let month = i32::from(j_month);
    let day = i32::from(j_day);
    let count = if month <= 6 {
        (month - 1) * 31 + day
    } else {
        186 + (month - 7) * 30 + day
    };
    count.clamp(0, i32::from(u16::MAX)) as u16
}

/// One-based week of the Jalali year, `ceil(day_of_year / 7)`.
#[inline]
#[must_use]
pub fn week_of_year(day_of_year: u16) -> u16 {
    day_of_year.div_ceil(7)
}

// ==== End month/week equations ====
