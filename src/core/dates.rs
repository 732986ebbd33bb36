//! Unix timestamp <-> calendar conversions shared by history and options.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

/// Key format for daily, weekly and monthly bars.
pub(crate) const DAY_KEY: &str = "%Y-%m-%d";
/// Key format for intraday bars.
pub(crate) const INTRADAY_KEY: &str = "%Y-%m-%d %H:%M:%S";

/// The clock a chart's timestamps are rendered in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ExchangeZone {
    Named(Tz),
    Fixed(FixedOffset),
    Utc,
}

impl ExchangeZone {
    /// Prefer the IANA zone name, then the raw GMT offset in seconds, then UTC.
    pub(crate) fn resolve(name: Option<&str>, gmtoffset: Option<i64>) -> Self {
        if let Some(tz) = name.and_then(|n| n.parse::<Tz>().ok()) {
            return Self::Named(tz);
        }
        if let Some(offset) = gmtoffset
            .and_then(|s| i32::try_from(s).ok())
            .and_then(FixedOffset::east_opt)
        {
            return Self::Fixed(offset);
        }
        Self::Utc
    }

    pub(crate) fn format(self, ts: i64, fmt: &str) -> Option<String> {
        let utc = DateTime::<Utc>::from_timestamp(ts, 0)?;
        Some(match self {
            Self::Named(tz) => utc.with_timezone(&tz).format(fmt).to_string(),
            Self::Fixed(offset) => utc.with_timezone(&offset).format(fmt).to_string(),
            Self::Utc => utc.format(fmt).to_string(),
        })
    }
}

/// Calendar date (UTC) of a Unix timestamp.
pub(crate) fn unix_to_date(ts: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(ts, 0).map(|dt| dt.date_naive())
}

/// Midnight UTC of `date` as a Unix timestamp.
pub(crate) fn date_to_unix(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
