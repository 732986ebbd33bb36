use serde::Deserialize;

use super::model::TickerInfo;
use crate::core::wire::ApiErrorNode;
use crate::core::{YfClient, YfError};

pub(super) async fn fetch_info(client: &YfClient, symbol: &str) -> Result<TickerInfo, YfError> {
    let mut url = YfClient::symbol_url(client.base_quote_summary(), symbol)?;
    url.query_pairs_mut().append_pair("modules", "price");

    let body = client.fetch_body(url, "info_price", symbol).await?;
    decode_info(&body, symbol)
}

fn decode_info(body: &str, symbol: &str) -> Result<TickerInfo, YfError> {
    let env: QsEnvelope = serde_json::from_str(body)?;
    let qs = env
        .quote_summary
        .ok_or_else(|| YfError::Data("missing quoteSummary".into()))?;

    if let Some(err) = qs.error {
        return Err(err.into());
    }

    qs.result
        .and_then(|v| v.into_iter().next())
        .and_then(|r| r.price)
        .ok_or_else(|| YfError::MissingData(format!("no info found for symbol: {symbol}")))
}

/* ---------------- serde mapping for quoteSummary?modules=price ---------------- */

#[derive(Deserialize)]
struct QsEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: Option<QsNode>,
}

#[derive(Deserialize)]
struct QsNode {
    result: Option<Vec<QsResult>>,
    error: Option<ApiErrorNode>,
}

#[derive(Deserialize)]
struct QsResult {
    price: Option<TickerInfo>,
}
