use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceData {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Instrument metadata returned alongside a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub full_exchange_name: Option<String>,
    pub instrument_type: Option<String>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    /// Unix seconds.
    pub first_trade_date: Option<i64>,
    /// Unix seconds.
    pub regular_market_time: Option<i64>,
    pub has_pre_post_market_data: Option<bool>,
    /// Offset from GMT in seconds.
    pub gmtoffset: Option<i64>,
    /// Short zone label such as `EST`.
    pub timezone: Option<String>,
    /// IANA zone name such as `America/New_York`.
    pub exchange_timezone_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub previous_close: Option<f64>,
    pub data_granularity: Option<String>,
    pub range: Option<String>,
    pub valid_ranges: Vec<String>,
}

/// Bars keyed by date (`YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS` for intraday
/// intervals) in the exchange's local time, plus the chart metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceHistory {
    pub meta: ChartMeta,
    pub bars: BTreeMap<String, PriceData>,
}

impl PriceHistory {
    /// The most recent bar and its key.
    #[must_use]
    pub fn latest(&self) -> Option<(&str, &PriceData)> {
        self.bars.last_key_value().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
