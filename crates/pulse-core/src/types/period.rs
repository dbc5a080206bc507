//! Calendar month periods.
//!
//! A `Period` is the (year, month) resolution metrics are reported at.
//! Ordering is chronological and the canonical key is `YYYY-MM`.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{MAX_PERIOD_YEAR, MIN_PERIOD_YEAR};
use crate::errors::PeriodError;

/// A (year, month) reporting period. `month` is always in `1..=12` and
/// constructed years lie in `MIN_PERIOD_YEAR..=MAX_PERIOD_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, rejecting months outside `1..=12` and years outside
    /// the four-digit range.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(MIN_PERIOD_YEAR..=MAX_PERIOD_YEAR).contains(&year) {
            return Err(PeriodError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(PeriodError::MonthOutOfRange { year, month });
        }
        Ok(Self { year, month })
    }

    /// The period a calendar date falls in.
    pub fn from_date<D: Datelike>(date: &D) -> Result<Self, PeriodError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Canonical `YYYY-MM` key.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// The previous calendar month, rolling January back into December.
    pub fn pred(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next calendar month, rolling December into January.
    pub fn succ(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Signed number of months from `self` to `other` (0 when equal).
    pub fn months_until(self, other: Period) -> i64 {
        (i64::from(other.year) - i64::from(self.year)) * 12 + i64::from(other.month)
            - i64::from(self.month)
    }

    /// Every month from `from` to `to`, inclusive, in chronological order.
    /// Empty when `from` is after `to`.
    pub fn range_inclusive(from: Period, to: Period) -> Vec<Period> {
        let mut periods = Vec::new();
        if from > to {
            return periods;
        }
        let mut current = from;
        loop {
            periods.push(current);
            if current == to {
                return periods;
            }
            current = current.succ();
        }
    }

    /// The `count` months ending at `end` (inclusive), oldest first.
    pub fn last_n_ending(end: Period, count: usize) -> Vec<Period> {
        let mut periods = Vec::with_capacity(count);
        let mut current = end;
        for _ in 0..count {
            periods.push(current);
            current = current.pred();
        }
        periods.reverse();
        periods
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    /// Strict `YYYY-MM` parsing: four-digit year, two-digit month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PeriodError::Malformed(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !all_digits(year, 4) || !all_digits(month, 2) {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
