//! Public client surface + builder.
//! Internals are split into `auth` (cookie/crumb) and `constants` (UA + defaults).

mod auth;
mod constants;

pub use auth::Session;

use std::sync::Arc;
use std::time::Duration;

use constants::{
    DEFAULT_BASE_CHART, DEFAULT_BASE_OPTIONS, DEFAULT_BASE_QUOTE_SUMMARY, DEFAULT_BASE_SEARCH,
    DEFAULT_COOKIE_URL, DEFAULT_CRUMB_URL, USER_AGENTS,
};
use rand::Rng;
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::core::net;
use crate::core::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::core::YfError;

/// Handle to the Yahoo Finance API.
///
/// Holds the transport, the endpoint configuration and the session
/// (cookie + crumb). Cloning is cheap and clones share the session, so the
/// handshake runs once no matter how many [`Ticker`](crate::Ticker)s use it.
#[derive(Debug, Clone)]
pub struct YfClient {
    transport: Arc<dyn Transport>,
    base_chart: Url,
    base_quote_summary: Url,
    base_options: Url,
    base_search: Url,
    cookie_url: Url,
    crumb_url: Url,
    user_agent: Option<String>,

    state: Arc<RwLock<Option<Session>>>,
    credential_fetch_lock: Arc<Mutex<()>>,
}

impl Default for YfClient {
    /// # Panics
    ///
    /// Panics if the default HTTP transport cannot be initialized.
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YfClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_quote_summary(&self) -> &Url {
        &self.base_quote_summary
    }
    pub(crate) fn base_options(&self) -> &Url {
        &self.base_options
    }
    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }

    /// `base` with `symbol` appended as one percent-encoded path segment.
    pub(crate) fn symbol_url(base: &Url, symbol: &str) -> Result<Url, YfError> {
        if symbol.trim().is_empty() {
            return Err(YfError::InvalidParams("symbol cannot be empty".into()));
        }
        // `push` silently skips dot segments.
        if matches!(symbol, "." | "..") {
            return Err(YfError::InvalidParams(format!("invalid symbol '{symbol}'")));
        }
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| YfError::InvalidParams(format!("cannot append a symbol to {base}")))?
            .pop_if_empty()
            .push(symbol);
        Ok(url)
    }

    fn pick_user_agent(&self) -> String {
        if let Some(ua) = &self.user_agent {
            return ua.clone();
        }
        let idx = rand::rng().random_range(0..USER_AGENTS.len());
        USER_AGENTS[idx].to_string()
    }

    /// Send one GET through the transport.
    pub(crate) async fn send(
        &self,
        url: Url,
        cookie: Option<String>,
    ) -> Result<HttpResponse, YfError> {
        tracing::debug!(url = %url, "GET");
        let request = HttpRequest {
            url,
            user_agent: self.pick_user_agent(),
            cookie,
        };
        self.transport.get(request).await
    }

    /// Authenticated GET for a data endpoint.
    ///
    /// Bootstraps the session if needed, appends the crumb, attaches the
    /// cookie and returns the body of a 2xx response.
    pub(crate) async fn fetch_body(
        &self,
        mut url: Url,
        endpoint: &str,
        key: &str,
    ) -> Result<String, YfError> {
        let session = self.ensure_session().await?;
        url.query_pairs_mut().append_pair("crumb", &session.crumb);

        let resp = self.send(url.clone(), Some(session.cookie)).await?;
        if !resp.is_success() {
            tracing::debug!(status = resp.status, endpoint, "non-success response");
            return Err(YfError::from_status(resp.status, &url));
        }

        net::record(endpoint, key, "json", &resp.body);
        Ok(resp.body)
    }
}

/* ----------------------- Builder ----------------------- */

/// Configuration for a [`YfClient`].
#[derive(Debug, Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_quote_summary: Option<Url>,
    base_options: Option<Url>,
    base_search: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,

    transport: Option<Arc<dyn Transport>>,
    preauth: Option<Session>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YfClientBuilder {
    /// Use a fixed User-Agent instead of rotating through the built-in list.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query2.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the quoteSummary API base (e.g., `https://query2.finance.yahoo.com/v10/finance/quoteSummary/`).
    #[must_use]
    pub fn base_quote_summary(mut self, url: Url) -> Self {
        self.base_quote_summary = Some(url);
        self
    }

    /// Override the options API base (e.g., `https://query2.finance.yahoo.com/v7/finance/options/`).
    #[must_use]
    pub fn base_options(mut self, url: Url) -> Self {
        self.base_options = Some(url);
        self
    }

    /// Override the search API URL (e.g., `https://query2.finance.yahoo.com/v1/finance/search`).
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL.
    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Replace the HTTP layer. Timeouts set on the builder are ignored when a
    /// custom transport is given.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Start with a known cookie + crumb pair and skip the handshake.
    #[must_use]
    pub fn preauth(mut self, cookie: impl Into<String>, crumb: impl Into<String>) -> Self {
        self.preauth = Some(Session {
            cookie: cookie.into(),
            crumb: crumb.into(),
        });
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the default
    /// `reqwest` client cannot be built.
    pub fn build(self) -> Result<YfClient, YfError> {
        let base_chart = parse_or(self.base_chart, DEFAULT_BASE_CHART)?;
        let base_quote_summary = parse_or(self.base_quote_summary, DEFAULT_BASE_QUOTE_SUMMARY)?;
        let base_options = parse_or(self.base_options, DEFAULT_BASE_OPTIONS)?;
        let base_search = parse_or(self.base_search, DEFAULT_BASE_SEARCH)?;
        let cookie_url = parse_or(self.cookie_url, DEFAULT_COOKIE_URL)?;
        let crumb_url = parse_or(self.crumb_url, DEFAULT_CRUMB_URL)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => {
                if self.timeout.is_some() || self.connect_timeout.is_some() {
                    tracing::warn!("timeouts are ignored when a custom transport is set");
                }
                t
            }
            None => Arc::new(ReqwestTransport::with_timeouts(
                self.timeout,
                self.connect_timeout,
            )?),
        };

        Ok(YfClient {
            transport,
            base_chart,
            base_quote_summary,
            base_options,
            base_search,
            cookie_url,
            crumb_url,
            user_agent: self.user_agent,
            state: Arc::new(RwLock::new(self.preauth)),
            credential_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}

fn parse_or(url: Option<Url>, default: &str) -> Result<Url, YfError> {
    match url {
        Some(u) => Ok(u),
        None => Ok(Url::parse(default)?),
    }
}
