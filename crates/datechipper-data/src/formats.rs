//! # Display Date Formats
//!
//! The human-readable renderings of a calendar date, for a single
//! `en_US` locale. The named variants mirror the locale's standard
//! short/medium/long/full styles; the rest are literal day/month/year
//! arrangements.

use chrono::NaiveDate;

/// A human-readable date rendering style.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum DisplayFormat {
    /// Numeric short style, e.g. "5/9/98".
    Short,

    /// Abbreviated-month style, e.g. "may 9, 1998".
    Medium,

    /// Full-month style, e.g. "may 9, 1998".
    Long,

    /// Weekday style, e.g. "saturday, may 9, 1998".
    Full,

    /// "9 may 1998"
    DayMonAbbrevYear,

    /// "9 may 1998" (full month name)
    DayMonthYear,

    /// "09 may 1998"
    PaddedDayMonAbbrevYear,

    /// "9 may, 1998"
    DayMonAbbrevCommaYear,

    /// "9 may, 1998" (full month name)
    DayMonthCommaYear,

    /// "09, may 1998"
    PaddedDayCommaMonAbbrevYear,

    /// "9 05 98"
    DayNumericMonthShortYear,

    /// "may 9 1998" (full month name)
    MonthDayYear,

    /// "may 9, 1998" (full month name)
    MonthDayCommaYear,

    /// "09.05.98"
    DottedNumeric,
}

use DisplayFormat::*;

/// Weighted format choice table.
///
/// Repetition encodes the sampling weights: the weekday style dominates
/// generated corpora, and the full-month day-first arrangement appears
/// twice.
pub static FORMAT_CHOICES: &[DisplayFormat] = &[
    Short,
    Medium,
    Long,
    Full,
    Full,
    Full,
    Full,
    Full,
    Full,
    Full,
    Full,
    Full,
    Full,
    DayMonAbbrevYear,
    DayMonthYear,
    PaddedDayMonAbbrevYear,
    DayMonAbbrevCommaYear,
    DayMonthCommaYear,
    PaddedDayCommaMonAbbrevYear,
    DayNumericMonthShortYear,
    DayMonthYear,
    MonthDayYear,
    MonthDayCommaYear,
    DottedNumeric,
];

impl DisplayFormat {
    /// The strftime pattern rendering this format.
    pub fn pattern(&self) -> &'static str {
        match self {
            Short => "%-m/%-d/%y",
            Medium => "%b %-d, %Y",
            Long => "%B %-d, %Y",
            Full => "%A, %B %-d, %Y",
            DayMonAbbrevYear => "%-d %b %Y",
            DayMonthYear => "%-d %B %Y",
            PaddedDayMonAbbrevYear => "%d %b %Y",
            DayMonAbbrevCommaYear => "%-d %b, %Y",
            DayMonthCommaYear => "%-d %B, %Y",
            PaddedDayCommaMonAbbrevYear => "%d, %b %Y",
            DayNumericMonthShortYear => "%-d %m %y",
            MonthDayYear => "%B %-d %Y",
            MonthDayCommaYear => "%B %-d, %Y",
            DottedNumeric => "%d.%m.%y",
        }
    }

    /// Render a date in this format.
    ///
    /// ## Returns
    /// The raw (un-normalized) display string, or `None` when the
    /// format/date combination has no valid rendering.
    pub fn render(
        &self,
        date: NaiveDate,
    ) -> Option<String> {
        use core::fmt::Write;

        let mut out = String::new();
        write!(out, "{}", date.format(self.pattern())).ok()?;
        Some(out)
    }
}
