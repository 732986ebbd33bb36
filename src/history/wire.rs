use serde::Deserialize;

use super::model::ChartMeta;
use crate::core::wire::{ApiErrorNode, de_u64_column, de_u64_from_any_number};

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ApiErrorNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) meta: Option<MetaNode>,
    #[serde(default)]
    pub(crate) timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub(crate) indicators: Indicators,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct MetaNode {
    pub(crate) currency: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) exchange_name: Option<String>,
    pub(crate) full_exchange_name: Option<String>,
    pub(crate) instrument_type: Option<String>,
    pub(crate) first_trade_date: Option<i64>,
    pub(crate) regular_market_time: Option<i64>,
    pub(crate) has_pre_post_market_data: Option<bool>,
    pub(crate) gmtoffset: Option<i64>,
    pub(crate) timezone: Option<String>,
    pub(crate) exchange_timezone_name: Option<String>,
    pub(crate) regular_market_price: Option<f64>,
    pub(crate) fifty_two_week_high: Option<f64>,
    pub(crate) fifty_two_week_low: Option<f64>,
    pub(crate) regular_market_day_high: Option<f64>,
    pub(crate) regular_market_day_low: Option<f64>,
    #[serde(deserialize_with = "de_u64_from_any_number")]
    pub(crate) regular_market_volume: Option<u64>,
    pub(crate) long_name: Option<String>,
    pub(crate) short_name: Option<String>,
    pub(crate) chart_previous_close: Option<f64>,
    pub(crate) previous_close: Option<f64>,
    pub(crate) data_granularity: Option<String>,
    pub(crate) range: Option<String>,
    pub(crate) valid_ranges: Option<Vec<String>>,
}

impl From<MetaNode> for ChartMeta {
    fn from(m: MetaNode) -> Self {
        Self {
            symbol: m.symbol,
            currency: m.currency,
            exchange_name: m.exchange_name,
            full_exchange_name: m.full_exchange_name,
            instrument_type: m.instrument_type,
            long_name: m.long_name,
            short_name: m.short_name,
            first_trade_date: m.first_trade_date,
            regular_market_time: m.regular_market_time,
            has_pre_post_market_data: m.has_pre_post_market_data,
            gmtoffset: m.gmtoffset,
            timezone: m.timezone,
            exchange_timezone_name: m.exchange_timezone_name,
            regular_market_price: m.regular_market_price,
            regular_market_day_high: m.regular_market_day_high,
            regular_market_day_low: m.regular_market_day_low,
            regular_market_volume: m.regular_market_volume,
            fifty_two_week_high: m.fifty_two_week_high,
            fifty_two_week_low: m.fifty_two_week_low,
            chart_previous_close: m.chart_previous_close,
            previous_close: m.previous_close,
            data_granularity: m.data_granularity,
            range: m.range,
            valid_ranges: m.valid_ranges.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, Default)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub(crate) quote: Vec<QuoteBlock>,
}

#[derive(Deserialize, Default)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub(crate) open: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) high: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) low: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "de_u64_column")]
    pub(crate) volume: Vec<Option<u64>>,
}
