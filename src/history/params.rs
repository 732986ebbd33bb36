use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::YfError;
use crate::core::dates::date_to_unix;

/// A relative lookback window understood by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Range {
    /// The wire value, e.g. `1mo`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
            Self::Y10 => "10y",
            Self::Ytd => "ytd",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Range {
    type Err = YfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1d" => Self::D1,
            "5d" => Self::D5,
            "1mo" => Self::M1,
            "3mo" => Self::M3,
            "6mo" => Self::M6,
            "1y" => Self::Y1,
            "2y" => Self::Y2,
            "5y" => Self::Y5,
            "10y" => Self::Y10,
            "ytd" => Self::Ytd,
            "max" => Self::Max,
            other => return Err(YfError::InvalidParams(format!("unknown range '{other}'"))),
        })
    }
}

/// Bar size of a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    /// The wire value, e.g. `1wk`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I2m => "2m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I30m => "30m",
            Self::I60m => "60m",
            Self::I90m => "90m",
            Self::I1h => "1h",
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
        }
    }

    /// Bars shorter than a day are keyed with a time of day.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(
            self,
            Self::I1m
                | Self::I2m
                | Self::I5m
                | Self::I15m
                | Self::I30m
                | Self::I60m
                | Self::I90m
                | Self::I1h
        )
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = YfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1m" => Self::I1m,
            "2m" => Self::I2m,
            "5m" => Self::I5m,
            "15m" => Self::I15m,
            "30m" => Self::I30m,
            "60m" => Self::I60m,
            "90m" => Self::I90m,
            "1h" => Self::I1h,
            "1d" => Self::D1,
            "5d" => Self::D5,
            "1wk" => Self::W1,
            "1mo" => Self::M1,
            "3mo" => Self::M3,
            other => {
                return Err(YfError::InvalidParams(format!("unknown interval '{other}'")));
            }
        })
    }
}

/// Parameters of a price history request.
///
/// With no `start`, the request uses `range` (default `1mo`). With a `start`,
/// the request covers `[start, end)` at midnight UTC, `end` defaulting to now,
/// and `range` is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub range: Option<Range>,
    pub interval: Option<Interval>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// The time window actually sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Window {
    Range(Range),
    Period(i64, i64),
}

impl HistoryQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// First day of the window (inclusive).
    #[must_use]
    pub const fn start(mut self, date: NaiveDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Last day of the window (exclusive).
    #[must_use]
    pub const fn end(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    pub(crate) fn effective_interval(&self) -> Interval {
        self.interval.unwrap_or(Interval::D1)
    }

    pub(crate) fn window(&self, now: DateTime<Utc>) -> Result<Window, YfError> {
        let Some(start) = self.start else {
            if self.end.is_some() {
                tracing::warn!("history end date ignored without a start date");
            }
            return Ok(Window::Range(self.range.unwrap_or(Range::M1)));
        };

        if self.range.is_some() {
            tracing::warn!("history range ignored because a start date is set");
        }
        let period1 = date_to_unix(start);
        let period2 = self.end.map_or_else(|| now.timestamp(), date_to_unix);
        if period1 >= period2 {
            return Err(YfError::InvalidDates);
        }
        Ok(Window::Period(period1, period2))
    }
}
