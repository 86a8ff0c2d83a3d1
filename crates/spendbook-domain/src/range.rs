//! Inclusive date ranges used for filtered listings and summaries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive `[from, to]` window over expense dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting reversed bounds. `from == to` is a valid
    /// one-day range.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DateRangeError> {
        if from > to {
            return Err(DateRangeError::Reversed);
        }
        Ok(Self { from, to })
    }

    /// Parses ISO `YYYY-MM-DD` bounds and validates their ordering.
    pub fn parse(from: &str, to: &str) -> Result<Self, DateRangeError> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    /// Resolves optional textual bounds into an optional range.
    ///
    /// Either both bounds are given or neither; a single bound is rejected
    /// rather than silently dropping the filter.
    pub fn from_bounds(
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Option<Self>, DateRangeError> {
        match (from, to) {
            (None, None) => Ok(None),
            (Some(from), Some(to)) => Self::parse(from, to).map(Some),
            _ => Err(DateRangeError::MissingBound),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, DateRangeError> {
    raw.trim()
        .parse()
        .map_err(|_| DateRangeError::Unparseable(raw.to_string()))
}

/// Errors that can occur when constructing [`DateRange`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    Reversed,
    MissingBound,
    Unparseable(String),
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::Reversed => f.write_str("range start must not be after its end"),
            DateRangeError::MissingBound => {
                f.write_str("both range bounds are required when one is given")
            }
            DateRangeError::Unparseable(raw) => write!(f, "unparseable date `{raw}`"),
        }
    }
}

impl std::error::Error for DateRangeError {}
