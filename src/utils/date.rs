/// Pure date-resolution logic for user-supplied date expressions
use chrono::{Datelike, Local, NaiveDate};

/// Reference year used to validate literal month/day input.
/// Deliberately a non-leap year, so 2月29日 is rejected.
const REFERENCE_YEAR: i32 = 2001;

/// A calendar-validated month/day pair resolved from user input.
///
/// Lookup keys are always two-digit zero-padded; display form is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateQuery {
    month: u32,
    day: u32,
}

impl DateQuery {
    /// Build a query from literal month/day input, rejecting
    /// calendar-impossible combinations like 2月30日.
    pub fn new(month: u32, day: u32) -> Result<Self, DateParseError> {
        if NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).is_none() {
            return Err(DateParseError::InvalidDate);
        }
        Ok(Self { month, day })
    }

    /// Build a query from a real calendar date (already valid)
    pub fn from_calendar_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Zero-padded month key, e.g. "03"
    pub fn month_key(&self) -> String {
        format!("{:02}", self.month)
    }

    /// Zero-padded month+day key, e.g. "0305"
    pub fn day_key(&self) -> String {
        format!("{:02}{:02}", self.month, self.day)
    }

    /// Human-readable form without zero padding, e.g. "3月5日"
    pub fn display(&self) -> String {
        format!("{}月{}日", self.month, self.day)
    }

    /// File name of the cached rendered image, e.g. "03月05日.png"
    pub fn image_file_name(&self) -> String {
        format!("{:02}月{:02}日.png", self.month, self.day)
    }
}

/// Errors for unresolvable date expressions (user-facing, never logged)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateParseError {
    InvalidFormat,
    InvalidDate,
}

impl std::fmt::Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateParseError::InvalidFormat => {
                write!(f, "无法识别的日期，请使用 今天/昨天/明天、M月D日 或 M.D 格式")
            }
            DateParseError::InvalidDate => {
                write!(f, "这个日期在日历上不存在，请检查月份和日期")
            }
        }
    }
}

impl std::error::Error for DateParseError {}

/// Resolve a date expression against the local wall-clock date
pub fn resolve_date(input: &str) -> Result<DateQuery, DateParseError> {
    resolve_date_at(input, Local::now().date_naive())
}

/// Resolve a date expression against an explicit "today".
///
/// Recognizes the relative keywords 今天/昨天/明天 and the literal
/// patterns "M月D日", "M月D号" and "M.D". Anything else is a format error.
pub fn resolve_date_at(input: &str, today: NaiveDate) -> Result<DateQuery, DateParseError> {
    let text = input.trim();

    match text {
        "" | "今天" => return Ok(DateQuery::from_calendar_date(today)),
        "昨天" => {
            let date = today.pred_opt().ok_or(DateParseError::InvalidDate)?;
            return Ok(DateQuery::from_calendar_date(date));
        }
        "明天" => {
            let date = today.succ_opt().ok_or(DateParseError::InvalidDate)?;
            return Ok(DateQuery::from_calendar_date(date));
        }
        _ => {}
    }

    let (month, day) = split_literal(text).ok_or(DateParseError::InvalidFormat)?;
    DateQuery::new(month, day)
}

/// Split "M月D日" / "M月D号" / "M.D" into numeric month and day
fn split_literal(text: &str) -> Option<(u32, u32)> {
    if let Some(rest) = text.strip_suffix('日').or_else(|| text.strip_suffix('号')) {
        let (month, day) = rest.split_once('月')?;
        return Some((month.trim().parse().ok()?, day.trim().parse().ok()?));
    }

    let (month, day) = text.split_once('.')?;
    Some((month.trim().parse().ok()?, day.trim().parse().ok()?))
}
