//! Calendar date with Japanese weekday labels and abbreviated-date parsing
//!
//! `JaDate` is an immutable year/month/day value. Abbreviated tokens such as
//! `0804` or `803` are resolved against an explicit reference date (normally
//! today) so that the result is never before the reference.

use crate::error::{Result, SchError};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Weekday labels indexed by days from Monday.
pub const WEEKDAYS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Template used when writing dates to the schedule file.
pub const RECORD_TEMPLATE: &str = "{year:04}{month:02}{day:02}";

/// Abbreviated dates resolve to at most this many days after the reference.
pub const LOOKAHEAD_DAYS: i64 = 366;

/// Template used when showing dates to a human.
pub const DISPLAY_TEMPLATE: &str = "{year}/{month:02}/{day:02}({weekday})";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JaDate(NaiveDate);

impl JaDate {
    /// Build a date, failing with `InvalidDate` if it is not on the calendar.
    ///
    /// Years are limited to 1..=9999 so that every date has an 8-digit form.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(SchError::InvalidDate { year, month, day });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(JaDate)
            .ok_or(SchError::InvalidDate { year, month, day })
    }

    /// Get the current date in the local timezone
    pub fn today() -> Self {
        JaDate(Local::now().date_naive())
    }

    /// Parse `YYYYMMDD`, `MMDD` or `MDD` relative to `reference`.
    ///
    /// For the abbreviated forms the year is the reference year if the
    /// resulting date is on or after `reference`, otherwise the next year.
    ///
    /// # Examples
    /// ```
    /// use sch::JaDate;
    /// let today = JaDate::new(2014, 8, 3).unwrap();
    /// assert_eq!(JaDate::parse_flexible("0802", today).unwrap(), JaDate::new(2015, 8, 2).unwrap());
    /// ```
    pub fn parse_flexible(token: &str, reference: JaDate) -> Result<Self> {
        let bad_format = || SchError::InvalidDateFormat {
            token: token.to_string(),
        };
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad_format());
        }
        // all ASCII digits, so byte slicing is on char boundaries
        let num = |s: &str| s.parse::<u32>().map_err(|_| bad_format());

        match token.len() {
            8 => {
                let year = token[..4].parse::<i32>().map_err(|_| bad_format())?;
                JaDate::new(year, num(&token[4..6])?, num(&token[6..])?)
            }
            4 => Self::from_month_and_day(num(&token[..2])?, num(&token[2..])?, reference),
            3 => {
                let month = num(&token[..1])?;
                if month == 0 {
                    return Err(bad_format());
                }
                Self::from_month_and_day(month, num(&token[1..])?, reference)
            }
            _ => Err(bad_format()),
        }
    }

    // Result is never before `reference` and at most LOOKAHEAD_DAYS after it.
    fn from_month_and_day(month: u32, day: u32, reference: JaDate) -> Result<Self> {
        let this_year = JaDate::new(reference.year(), month, day);
        let next_year = JaDate::new(reference.year() + 1, month, day);
        match (this_year, next_year) {
            (Ok(date), _) if date >= reference => Ok(date),
            (Ok(_), Ok(date)) => Ok(date),
            // Feb 29 outside a leap year: only take next year's if it is close enough
            (Err(e), Ok(date)) => {
                if date.delta(&reference) <= LOOKAHEAD_DAYS {
                    Ok(date)
                } else {
                    Err(e)
                }
            }
            (Err(e), Err(_)) | (Ok(_), Err(e)) => Err(e),
        }
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday counted from Monday (0) to Sunday (6)
    pub fn weekday(&self) -> usize {
        self.0.weekday().num_days_from_monday() as usize
    }

    pub fn ja_weekday(&self) -> &'static str {
        WEEKDAYS[self.weekday()]
    }

    /// Signed number of days from `other` to `self` (`self - other`).
    pub fn delta(&self, other: &JaDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// Substitute `{year}`, `{month}`, `{day}` and `{weekday}` in `template`.
    ///
    /// Numeric fields accept a width, e.g. `{month:02}` (zero padded) or
    /// `{day:2}` (space padded). Unknown placeholders are kept verbatim.
    pub fn format(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 8);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let spec = &after[..close];
            match self.placeholder(spec) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push('{');
                    out.push_str(spec);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }

    fn placeholder(&self, spec: &str) -> Option<String> {
        let (name, width) = match spec.split_once(':') {
            Some((name, width)) => (name, Some(width)),
            None => (spec, None),
        };
        let value = match name {
            "weekday" => return width.is_none().then(|| self.ja_weekday().to_string()),
            "year" => i64::from(self.year()),
            "month" => i64::from(self.month()),
            "day" => i64::from(self.day()),
            _ => return None,
        };
        match width {
            None => Some(value.to_string()),
            Some(w) => match w.strip_prefix('0') {
                Some(w) => {
                    let width: usize = w.parse().ok()?;
                    Some(format!("{:0width$}", value, width = width))
                }
                None => {
                    let width: usize = w.parse().ok()?;
                    Some(format!("{:>width$}", value, width = width))
                }
            },
        }
    }
}

impl fmt::Display for JaDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<JaDate> for NaiveDate {
    fn from(date: JaDate) -> Self {
        date.0
    }
}
