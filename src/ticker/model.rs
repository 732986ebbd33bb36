use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A number as Yahoo sends it: the raw value plus its display strings.
///
/// Any part may be absent; Yahoo sends `{}` for values it does not have.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceValue {
    pub raw: Option<f64>,
    pub fmt: Option<String>,
    pub long_fmt: Option<String>,
}

/// The `price` module of the quoteSummary endpoint.
///
/// Read straight from the wire; every field is optional because Yahoo omits
/// whatever does not apply to the instrument (a crypto pair has no pre-market,
/// an equity has no circulating supply).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickerInfo {
    pub max_age: Option<i64>,

    pub pre_market_change: Option<PriceValue>,
    pub pre_market_price: Option<PriceValue>,
    pub pre_market_source: Option<String>,

    pub post_market_change_percent: Option<PriceValue>,
    pub post_market_change: Option<PriceValue>,
    /// Unix seconds.
    pub post_market_time: Option<i64>,
    pub post_market_price: Option<PriceValue>,
    pub post_market_source: Option<String>,

    pub regular_market_change_percent: Option<PriceValue>,
    pub regular_market_change: Option<PriceValue>,
    /// Unix seconds.
    pub regular_market_time: Option<i64>,
    pub price_hint: Option<PriceValue>,
    pub regular_market_price: Option<PriceValue>,
    pub regular_market_day_high: Option<PriceValue>,
    pub regular_market_day_low: Option<PriceValue>,
    pub regular_market_volume: Option<PriceValue>,
    #[serde(rename = "averageDailyVolume10Day")]
    pub average_daily_volume_10_day: Option<PriceValue>,
    #[serde(rename = "averageDailyVolume3Month")]
    pub average_daily_volume_3_month: Option<PriceValue>,
    pub regular_market_previous_close: Option<PriceValue>,
    pub regular_market_source: Option<String>,
    pub regular_market_open: Option<PriceValue>,

    pub strike_price: Option<PriceValue>,
    pub open_interest: Option<PriceValue>,

    pub exchange: Option<String>,
    pub exchange_name: Option<String>,
    /// Minutes.
    pub exchange_data_delayed_by: Option<i64>,
    pub market_state: Option<String>,
    pub quote_type: Option<String>,
    pub symbol: Option<String>,
    pub underlying_symbol: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub currency: Option<String>,
    pub quote_source_name: Option<String>,
    pub currency_symbol: Option<String>,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub last_market: Option<String>,

    #[serde(rename = "volume24Hr")]
    pub volume_24_hr: Option<PriceValue>,
    pub volume_all_currencies: Option<PriceValue>,
    pub circulating_supply: Option<PriceValue>,
    pub market_cap: Option<PriceValue>,
}

impl TickerInfo {
    /// `regularMarketPrice.raw`, the figure most callers want.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.regular_market_price.as_ref().and_then(|p| p.raw)
    }
}

/// One option contract, flattened from the v7 options payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionDetail {
    pub contract_symbol: String,
    pub strike: f64,
    pub currency: Option<String>,
    pub last_price: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub volume: Option<u64>,
    pub open_interest: Option<u64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    /// `REGULAR` or `MINI`.
    pub contract_size: Option<String>,
    pub expiration: Option<NaiveDate>,
    pub last_trade_date: Option<NaiveDate>,
    pub implied_volatility: Option<f64>,
    pub in_the_money: bool,
}

/// Calls and puts for a single expiration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionData {
    pub underlying_symbol: Option<String>,
    /// `None` when Yahoo returned no expiration block.
    pub expiration_date: Option<NaiveDate>,
    pub has_mini_options: bool,
    pub calls: Vec<OptionDetail>,
    pub puts: Vec<OptionDetail>,
}
