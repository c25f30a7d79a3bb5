/// Date text parsing and formatting.
///
/// Display text is `DD/MM/YY`. Commit accepts `DD/MM/YY`, `DD/MM` and
/// `DD/MM/YYYY`, tried in that order. Canonical strings are ISO `YYYY-MM-DD`.
use crate::config::TTHH_TWO_DIGIT_YEAR_LOOKAHEAD;
use crate::exceptions::DateParseError;
use crate::filter::sanitize;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static DAY_MONTH_SHORT_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2})$").expect("DD/MM/YY pattern is valid")
});
static DAY_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})$").expect("DD/MM pattern is valid"));
static DAY_MONTH_LONG_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("DD/MM/YYYY pattern is valid")
});

const DISPLAY_FORMAT: &str = "%d/%m/%y";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Accepted shapes of typed date text, in matching priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    DayMonthShortYear,
    DayMonth,
    DayMonthLongYear,
}

impl DatePattern {
    pub const PRIORITY: [DatePattern; 3] = [
        DatePattern::DayMonthShortYear,
        DatePattern::DayMonth,
        DatePattern::DayMonthLongYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DayMonthShortYear => "DD/MM/YY",
            Self::DayMonth => "DD/MM",
            Self::DayMonthLongYear => "DD/MM/YYYY",
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            Self::DayMonthShortYear => &*DAY_MONTH_SHORT_YEAR,
            Self::DayMonth => &*DAY_MONTH,
            Self::DayMonthLongYear => &*DAY_MONTH_LONG_YEAR,
        }
    }

    /// Match `text` against this pattern and build the date if it exists
    /// on the calendar
    pub fn apply(&self, text: &str, reference_year: i32) -> Option<NaiveDate> {
        let caps = self.regex().captures(text)?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year = match self {
            Self::DayMonth => reference_year,
            Self::DayMonthShortYear => {
                expand_two_digit_year(caps[3].parse().ok()?, reference_year)?
            }
            Self::DayMonthLongYear => caps[3].parse().ok()?,
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Place a two-digit year in the hundred-year window that ends
/// `TTHH_TWO_DIGIT_YEAR_LOOKAHEAD` years after `reference_year`.
/// `None` when the window falls outside the `i32` range.
pub fn expand_two_digit_year(two_digit: i32, reference_year: i32) -> Option<i32> {
    let range_end = reference_year.checked_add(TTHH_TWO_DIGIT_YEAR_LOOKAHEAD)?;
    let century = range_end.div_euclid(100).checked_mul(100)?;
    if two_digit >= range_end.rem_euclid(100) {
        century.checked_sub(100)?.checked_add(two_digit)
    } else {
        century.checked_add(two_digit)
    }
}

/// Parse typed date text, completing `DD/MM` with the current local year
pub fn parse_date_text(text: &str) -> Result<NaiveDate, DateParseError> {
    parse_date_text_with_year(text, Local::now().year())
}

/// Parse typed date text against an explicit reference year.
///
/// Everything but digits and slashes is dropped and trailing slashes are
/// trimmed before the patterns are tried. No best guess is ever returned.
pub fn parse_date_text_with_year(
    text: &str,
    reference_year: i32,
) -> Result<NaiveDate, DateParseError> {
    match_date_text(text, reference_year).map(|(_, date)| date)
}

/// Like `parse_date_text_with_year`, also reporting which pattern matched
pub fn match_date_text(
    text: &str,
    reference_year: i32,
) -> Result<(DatePattern, NaiveDate), DateParseError> {
    if text.trim().is_empty() {
        return Err(DateParseError::Empty);
    }

    let cleaned = sanitize(text);
    let candidate = cleaned.trim_end_matches('/');

    DatePattern::PRIORITY
        .iter()
        .find_map(|pattern| {
            pattern
                .apply(candidate, reference_year)
                .map(|date| (*pattern, date))
        })
        .ok_or_else(|| DateParseError::Unrecognized(text.to_string()))
}

/// Render a date as display text, `DD/MM/YY`
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Render a date as a canonical ISO string, `YYYY-MM-DD`
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Read a canonical ISO date. A `T...` time suffix is ignored.
pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    let date_part = text.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, ISO_FORMAT).ok()
}
