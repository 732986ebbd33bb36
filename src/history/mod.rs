//! Price history from the v8 chart endpoint.

mod model;
mod params;
mod wire;

pub use model::{ChartMeta, PriceData, PriceHistory};
pub use params::{HistoryQuery, Interval, Range};

use std::collections::BTreeMap;

use chrono::Utc;
use params::Window;
use wire::{ChartEnvelope, ChartResult, QuoteBlock};

use crate::core::dates::{DAY_KEY, ExchangeZone, INTRADAY_KEY};
use crate::core::{YfClient, YfError};

/// Fetch the price history of `symbol` and key the bars by date.
///
/// # Errors
///
/// Returns an error if the date window is invalid, the request fails, Yahoo
/// reports an error, or the chart carries no result.
pub async fn fetch_history(
    client: &YfClient,
    symbol: &str,
    query: &HistoryQuery,
) -> Result<PriceHistory, YfError> {
    let interval = query.effective_interval();
    let mut url = YfClient::symbol_url(client.base_chart(), symbol)?;
    {
        let mut qp = url.query_pairs_mut();
        match query.window(Utc::now())? {
            Window::Range(r) => {
                qp.append_pair("range", r.as_str());
            }
            Window::Period(p1, p2) => {
                qp.append_pair("period1", &p1.to_string());
                qp.append_pair("period2", &p2.to_string());
            }
        }
        qp.append_pair("interval", interval.as_str());
    }

    let body = client.fetch_body(url, "history_chart", symbol).await?;
    let result = decode_chart(&body, symbol)?;
    Ok(transform(result, interval))
}

fn decode_chart(body: &str, symbol: &str) -> Result<ChartResult, YfError> {
    let env: ChartEnvelope = serde_json::from_str(body)?;
    let chart = env
        .chart
        .ok_or_else(|| YfError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(err.into());
    }

    chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| YfError::MissingData(format!("no data found for symbol: {symbol}")))
}

/// Reindex the parallel timestamp/OHLCV arrays into a date-keyed map.
///
/// Columns are cut at the shortest one. Bars missing any of open/high/low/close
/// are dropped; a null volume is 0. When two timestamps render to the same key
/// the later one wins.
fn transform(result: ChartResult, interval: Interval) -> PriceHistory {
    let meta_node = result.meta.unwrap_or_default();
    let zone = ExchangeZone::resolve(
        meta_node.exchange_timezone_name.as_deref(),
        meta_node.gmtoffset,
    );
    let meta = ChartMeta::from(meta_node);
    let fmt = if interval.is_intraday() {
        INTRADAY_KEY
    } else {
        DAY_KEY
    };

    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or_default();

    let rows = usable_rows(timestamps.len(), &quote);
    let mut bars = BTreeMap::new();
    let mut dropped = timestamps.len() - rows;
    for (i, &ts) in timestamps.iter().take(rows).enumerate() {
        let Some(bar) = bar_at(&quote, i) else {
            dropped += 1;
            continue;
        };
        let Some(key) = zone.format(ts, fmt) else {
            dropped += 1;
            continue;
        };
        bars.insert(key, bar);
    }
    if dropped > 0 {
        tracing::warn!(dropped, "skipped bars with missing prices or timestamps");
    }

    PriceHistory { meta, bars }
}

/// Rows covered by every column. An absent volume column counts as all-null
/// rather than as zero length.
fn usable_rows(timestamps: usize, q: &QuoteBlock) -> usize {
    let prices = [&q.open, &q.high, &q.low, &q.close]
        .iter()
        .map(|col| col.len())
        .fold(timestamps, usize::min);
    if q.volume.is_empty() {
        prices
    } else {
        prices.min(q.volume.len())
    }
}

fn bar_at(q: &QuoteBlock, i: usize) -> Option<PriceData> {
    let cell = |col: &[Option<f64>]| col.get(i).copied().flatten();
    Some(PriceData {
        open: cell(&q.open)?,
        high: cell(&q.high)?,
        low: cell(&q.low)?,
        close: cell(&q.close)?,
        volume: q.volume.get(i).copied().flatten().unwrap_or(0),
    })
}
