mod info;
mod model;
mod options;
mod quote;

pub use model::{OptionData, OptionDetail, PriceValue, TickerInfo};

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::history::{self, HistoryQuery, PriceData, PriceHistory};
use crate::search::{self, SearchData, SearchParams};
use crate::{YfClient, YfError};

/// A high-level interface for a single ticker symbol.
///
/// A `Ticker` is created with a [`YfClient`] and a symbol. It shares the
/// client's session, so building many tickers from one client costs a single
/// cookie/crumb handshake.
///
/// # Example
///
/// ```no_run
/// # use yahoofinance_api::{HistoryQuery, Range, Ticker, YfClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YfClient::default();
/// let ticker = Ticker::new(&client, "TSLA");
///
/// let last = ticker.quote().await?;
/// println!("Tesla's last close: {}", last.close);
///
/// let bars = ticker.history(HistoryQuery::new().range(Range::Y1)).await?;
/// println!("Fetched {} days of history.", bars.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: YfClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /* ---------------- Prices ---------------- */

    /// The most recent daily bar from the last month of history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response cannot be parsed,
    /// or the history holds no complete bar.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn quote(&self) -> Result<PriceData, YfError> {
        quote::fetch_quote(&self.client, &self.symbol).await
    }

    /// Price bars keyed by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date window is invalid, the request fails or
    /// the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn history(
        &self,
        query: HistoryQuery,
    ) -> Result<BTreeMap<String, PriceData>, YfError> {
        Ok(self.history_full(query).await?.bars)
    }

    /// Like [`Ticker::history`] but keeps the chart metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the date window is invalid, the request fails or
    /// the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn history_full(&self, query: HistoryQuery) -> Result<PriceHistory, YfError> {
        history::fetch_history(&self.client, &self.symbol, &query).await
    }

    /* ---------------- Info ---------------- */

    /// The quoteSummary `price` module.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response cannot be parsed,
    /// or Yahoo has no info for the symbol.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn info(&self) -> Result<TickerInfo, YfError> {
        info::fetch_info(&self.client, &self.symbol).await
    }

    /* ---------------- Options ---------------- */

    /// Calls and puts for the nearest expiration.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn option_chain(&self) -> Result<OptionData, YfError> {
        options::option_chain(&self.client, &self.symbol, None).await
    }

    /// Calls and puts expiring on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn option_chain_by_expiration(
        &self,
        date: NaiveDate,
    ) -> Result<OptionData, YfError> {
        options::option_chain(&self.client, &self.symbol, Some(date)).await
    }

    /// Every listed expiration date, ascending as Yahoo returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn expiration_dates(&self) -> Result<Vec<NaiveDate>, YfError> {
        options::expiration_dates(&self.client, &self.symbol).await
    }

    /* ---------------- Search ---------------- */

    /// Symbol lookup with the default parameters. Not tied to this ticker's
    /// symbol; it only reuses the client.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank query, a failed request or an unparseable
    /// response.
    #[tracing::instrument(skip(self), err)]
    pub async fn search(&self, query: &str, limit: i32) -> Result<SearchData, YfError> {
        search::search(&self.client, &SearchParams::new(query, limit)).await
    }

    /// Symbol lookup with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank query, a failed request or an unparseable
    /// response.
    #[tracing::instrument(skip(self, params), err, fields(query = %params.query))]
    pub async fn search_with_options(
        &self,
        params: &SearchParams,
    ) -> Result<SearchData, YfError> {
        search::search(&self.client, params).await
    }
}
