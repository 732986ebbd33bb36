use chrono::NaiveDate;
use serde::Deserialize;

use super::model::{OptionData, OptionDetail};
use crate::core::dates::{date_to_unix, unix_to_date};
use crate::core::wire::{ApiErrorNode, de_u64_from_any_number};
use crate::core::{YfClient, YfError};

/* ---------------- Public: expirations + chain ---------------- */

pub(super) async fn expiration_dates(
    client: &YfClient,
    symbol: &str,
) -> Result<Vec<NaiveDate>, YfError> {
    let first = fetch_options_raw(client, symbol, None).await?;
    Ok(first
        .expiration_dates
        .unwrap_or_default()
        .into_iter()
        .filter_map(unix_to_date)
        .collect())
}

pub(super) async fn option_chain(
    client: &YfClient,
    symbol: &str,
    date: Option<NaiveDate>,
) -> Result<OptionData, YfError> {
    let first = fetch_options_raw(client, symbol, date).await?;
    Ok(flatten(first))
}

/* ---------------- Internal ---------------- */

async fn fetch_options_raw(
    client: &YfClient,
    symbol: &str,
    date: Option<NaiveDate>,
) -> Result<OptResultNode, YfError> {
    let date = date.map(date_to_unix);

    let mut url = YfClient::symbol_url(client.base_options(), symbol)?;
    if let Some(d) = date {
        url.query_pairs_mut().append_pair("date", &d.to_string());
    }

    let fixture_key = date.map_or_else(|| symbol.to_string(), |d| format!("{symbol}_{d}"));
    let body = client.fetch_body(url, "options_v7", &fixture_key).await?;
    decode_options(&body, symbol)
}

fn decode_options(body: &str, symbol: &str) -> Result<OptResultNode, YfError> {
    let env: OptEnvelope = serde_json::from_str(body)?;
    let chain = env
        .option_chain
        .ok_or_else(|| YfError::Data("missing optionChain".into()))?;

    if let Some(err) = chain.error {
        return Err(err.into());
    }

    chain
        .result
        .and_then(|v| v.into_iter().next())
        .ok_or_else(|| YfError::MissingData(format!("no option data found for symbol: {symbol}")))
}

/// Flatten the first expiration block. A result with no block yields an
/// empty chain rather than an error.
fn flatten(first: OptResultNode) -> OptionData {
    let underlying_symbol = first.underlying_symbol;
    let Some(od) = first.options.and_then(|v| v.into_iter().next()) else {
        return OptionData {
            underlying_symbol,
            has_mini_options: first.has_mini_options.unwrap_or(false),
            ..OptionData::default()
        };
    };

    let map_side = |side: Option<Vec<OptContractNode>>| -> Vec<OptionDetail> {
        side.unwrap_or_default()
            .into_iter()
            .map(|c| OptionDetail {
                contract_symbol: c.contract_symbol.unwrap_or_default(),
                strike: c.strike.unwrap_or(0.0),
                currency: c.currency,
                last_price: c.last_price,
                change: c.change,
                percent_change: c.percent_change,
                volume: c.volume,
                open_interest: c.open_interest,
                bid: c.bid,
                ask: c.ask,
                contract_size: c.contract_size,
                expiration: c.expiration.and_then(unix_to_date),
                last_trade_date: c.last_trade_date.and_then(unix_to_date),
                implied_volatility: c.implied_volatility,
                in_the_money: c.in_the_money.unwrap_or(false),
            })
            .collect()
    };

    OptionData {
        underlying_symbol,
        expiration_date: od.expiration_date.and_then(unix_to_date),
        has_mini_options: first.has_mini_options.or(od.has_mini_options).unwrap_or(false),
        calls: map_side(od.calls),
        puts: map_side(od.puts),
    }
}

/* ---------------- Minimal serde mapping for v7 options ---------------- */

#[derive(Deserialize)]
struct OptEnvelope {
    #[serde(rename = "optionChain")]
    option_chain: Option<OptChainNode>,
}

#[derive(Deserialize)]
struct OptChainNode {
    result: Option<Vec<OptResultNode>>,
    error: Option<ApiErrorNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptResultNode {
    underlying_symbol: Option<String>,
    expiration_dates: Option<Vec<i64>>,
    has_mini_options: Option<bool>,
    options: Option<Vec<OptByDateNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptByDateNode {
    expiration_date: Option<i64>,
    has_mini_options: Option<bool>,
    calls: Option<Vec<OptContractNode>>,
    puts: Option<Vec<OptContractNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptContractNode {
    contract_symbol: Option<String>,
    strike: Option<f64>,
    currency: Option<String>,
    last_price: Option<f64>,
    change: Option<f64>,
    percent_change: Option<f64>,
    #[serde(default, deserialize_with = "de_u64_from_any_number")]
    volume: Option<u64>,
    #[serde(default, deserialize_with = "de_u64_from_any_number")]
    open_interest: Option<u64>,
    bid: Option<f64>,
    ask: Option<f64>,
    contract_size: Option<String>,
    expiration: Option<i64>,
    last_trade_date: Option<i64>,
    implied_volatility: Option<f64>,
    in_the_money: Option<bool>,
}
