use crate::history::{self, HistoryQuery, PriceData};
use crate::{YfClient, YfError};

/// Latest bar of the default (one month, daily) history.
pub(super) async fn fetch_quote(client: &YfClient, symbol: &str) -> Result<PriceData, YfError> {
    let hist = history::fetch_history(client, symbol, &HistoryQuery::default()).await?;
    hist.latest()
        .map(|(_, bar)| *bar)
        .ok_or_else(|| YfError::MissingData(format!("no price bars for symbol: {symbol}")))
}
