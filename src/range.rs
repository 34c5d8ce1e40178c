use crate::errors::JournalError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of calendar months shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum MonthSpan {
    One,
    Two,
    #[default]
    Three,
    Six,
}

impl MonthSpan {
    pub const ALL: [MonthSpan; 4] = [
        MonthSpan::One,
        MonthSpan::Two,
        MonthSpan::Three,
        MonthSpan::Six,
    ];

    pub fn months(self) -> u32 {
        match self {
            MonthSpan::One => 1,
            MonthSpan::Two => 2,
            MonthSpan::Three => 3,
            MonthSpan::Six => 6,
        }
    }
}

impl TryFrom<u32> for MonthSpan {
    type Error = JournalError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MonthSpan::One),
            2 => Ok(MonthSpan::Two),
            3 => Ok(MonthSpan::Three),
            6 => Ok(MonthSpan::Six),
            other => Err(JournalError::InvalidMonthSpan(other)),
        }
    }
}

impl From<MonthSpan> for u32 {
    fn from(span: MonthSpan) -> Self {
        span.months()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub key: String,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            key: date_key(date),
            date,
        }
    }
}

/// Days from `start` up to, but excluding, the first day whose calendar month
/// is `span` months after the start month.
pub fn compute_days(start: NaiveDate, span: MonthSpan) -> Vec<Day> {
    let months = span.months();
    let ceiling = i64::from(months) * 31;

    let mut days = Vec::with_capacity(ceiling as usize);
    for offset in 0..=ceiling {
        let Some(date) = start.checked_add_signed(Duration::days(offset)) else {
            break;
        };
        if months_between(start, date) >= i64::from(months) {
            break;
        }
        days.push(Day::new(date));
    }
    days
}

/// Month-number difference, ignoring the day of month.
pub fn months_between(start: NaiveDate, date: NaiveDate) -> i64 {
    let years = i64::from(date.year()) - i64::from(start.year());
    years * 12 + i64::from(date.month()) - i64::from(start.month())
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a canonical, zero-padded `YYYY-MM-DD` key.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, JournalError> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .ok()
        .filter(|date| date_key(*date) == key)
        .ok_or_else(|| JournalError::InvalidDateKey(key.to_string()))
}
