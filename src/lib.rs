//! yahoofinance-api: a small async client for the unofficial Yahoo Finance API.
//!
//! Covers price history (chart v8), the quoteSummary `price` module, option
//! chains (options v7) and symbol search (search v1). Requests go through a
//! [`YfClient`], which bootstraps the cookie + crumb session on first use and
//! shares it across clones.
//!
//! ```no_run
//! # use yahoofinance_api::{Ticker, YfClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), yahoofinance_api::YfError> {
//! let client = YfClient::default();
//! let aapl = Ticker::new(&client, "AAPL");
//! let info = aapl.info().await?;
//! println!("{:?} trades at {:?}", info.short_name, info.price());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod history;
pub mod search;
pub mod ticker;

pub use crate::core::{
    HttpRequest, HttpResponse, ReqwestTransport, Session, Transport, TransportFuture, YfClient,
    YfClientBuilder, YfError,
};
pub use history::{ChartMeta, HistoryQuery, Interval, PriceData, PriceHistory, Range};
pub use search::{SearchData, SearchParams, SearchResult, build_search_url};
pub use ticker::{OptionData, OptionDetail, PriceValue, Ticker, TickerInfo};
