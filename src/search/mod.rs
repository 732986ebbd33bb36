//! Symbol lookup via `/v1/finance/search`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{YfClient, YfError};

const DEFAULT_QUOTES_COUNT: i32 = 10;
const MAX_QUOTES_COUNT: i32 = 20;

/* ---------------- Types returned by this module ---------------- */

/// One matching instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub symbol: String,
    /// Short name when Yahoo has one, otherwise the long name.
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    /// Yahoo `quoteType`, e.g. `EQUITY`, `ETF`, `CRYPTOCURRENCY`.
    pub kind: Option<String>,
    pub exchange: Option<String>,
    pub exchange_display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchData {
    pub results: Vec<SearchResult>,
}

/// Every knob the search endpoint accepts.
///
/// [`SearchParams::new`] gives the settings Yahoo's own site uses for symbol
/// lookup: no news, no lists, exact (non-fuzzy) matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    /// Clamped to `1..=20`; zero or negative means 10.
    pub quotes_count: i32,
    pub news_count: i32,
    pub lists_count: i32,

    pub enable_fuzzy_query: bool,
    pub enable_enhanced_trivial_query: bool,
    pub enable_ccc_boost: bool,
    pub enable_private_company: bool,

    pub enable_research_reports: bool,
    pub enable_cultural_assets: bool,
    pub enable_logo_url: bool,
    pub enable_nav_links: bool,
    pub enable_cb: bool,
    pub enable_lists: bool,

    pub quotes_query_id: String,
    pub multi_quote_query_id: String,
    /// Omitted from the request when empty.
    pub news_query_id: String,

    pub recommend_count: i32,
    pub lang: String,
}

impl SearchParams {
    #[must_use]
    pub fn new(query: impl Into<String>, quotes_count: i32) -> Self {
        Self {
            query: query.into(),
            quotes_count,
            news_count: 0,
            lists_count: 0,
            enable_fuzzy_query: false,
            enable_enhanced_trivial_query: true,
            enable_ccc_boost: true,
            enable_private_company: true,
            enable_research_reports: true,
            enable_cultural_assets: true,
            enable_logo_url: true,
            enable_nav_links: true,
            enable_cb: false,
            enable_lists: false,
            quotes_query_id: "tss_match_phrase_query".into(),
            multi_quote_query_id: "multi_quote_single_token_query".into(),
            news_query_id: "news_cie_vespa".into(),
            recommend_count: 5,
            lang: "en-US".into(),
        }
    }

    /// Sets the number of news results to return.
    #[must_use]
    pub const fn news_count(mut self, n: i32) -> Self {
        self.news_count = n;
        self
    }

    /// Sets the number of screener list results to return.
    #[must_use]
    pub const fn lists_count(mut self, n: i32) -> Self {
        self.lists_count = n;
        self
    }

    #[must_use]
    pub const fn fuzzy(mut self, on: bool) -> Self {
        self.enable_fuzzy_query = on;
        self
    }

    /// Sets the language for the search results.
    #[must_use]
    pub fn lang(mut self, s: impl Into<String>) -> Self {
        self.lang = s.into();
        self
    }

    /// Trimmed query and clamped quotes count, or an error for a blank query.
    pub(crate) fn normalized(&self) -> Result<Self, YfError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(YfError::InvalidParams("query cannot be empty".into()));
        }
        let quotes_count = if self.quotes_count <= 0 {
            DEFAULT_QUOTES_COUNT
        } else {
            self.quotes_count.min(MAX_QUOTES_COUNT)
        };
        Ok(Self {
            query: query.to_string(),
            quotes_count,
            ..self.clone()
        })
    }
}

/* ---------------- Public API ---------------- */

/// Append every search parameter to `base`.
#[must_use]
pub fn build_search_url(base: &Url, params: &SearchParams) -> Url {
    let mut url = base.clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", &params.query);
        qp.append_pair("lang", &params.lang);
        qp.append_pair("quotesCount", &params.quotes_count.to_string());
        qp.append_pair("newsCount", &params.news_count.to_string());
        qp.append_pair("listsCount", &params.lists_count.to_string());
        qp.append_pair("enableFuzzyQuery", bool_str(params.enable_fuzzy_query));
        qp.append_pair("quotesQueryId", &params.quotes_query_id);
        qp.append_pair("multiQuoteQueryId", &params.multi_quote_query_id);
        qp.append_pair("enableCb", bool_str(params.enable_cb));
        qp.append_pair("enableNavLinks", bool_str(params.enable_nav_links));
        qp.append_pair(
            "enableEnhancedTrivialQuery",
            bool_str(params.enable_enhanced_trivial_query),
        );
        qp.append_pair("enableResearchReports", bool_str(params.enable_research_reports));
        qp.append_pair("enableCulturalAssets", bool_str(params.enable_cultural_assets));
        qp.append_pair("enableLogoUrl", bool_str(params.enable_logo_url));
        qp.append_pair("enableLists", bool_str(params.enable_lists));
        qp.append_pair("recommendCount", &params.recommend_count.to_string());
        qp.append_pair("enableCccBoost", bool_str(params.enable_ccc_boost));
        qp.append_pair("enablePrivateCompany", bool_str(params.enable_private_company));
        if !params.news_query_id.is_empty() {
            qp.append_pair("newsQueryId", &params.news_query_id);
        }
    }
    url
}

const fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Searches for symbols matching `params.query`.
///
/// # Errors
///
/// Returns `YfError::InvalidParams` for a blank query, otherwise any error of
/// the request or of decoding the response.
pub async fn search(client: &YfClient, params: &SearchParams) -> Result<SearchData, YfError> {
    let params = params.normalized()?;
    let url = build_search_url(client.base_search(), &params);
    let body = client.fetch_body(url, "search_v1", &params.query).await?;
    parse_search_body(&body)
}

fn parse_search_body(body: &str) -> Result<SearchData, YfError> {
    let env: V1SearchEnvelope = serde_json::from_str(body)?;

    let results = env
        .quotes
        .unwrap_or_default()
        .into_iter()
        .filter_map(|q| {
            let symbol = q.symbol.filter(|s| !s.is_empty())?;
            let short_name = q.shortname.filter(|s| !s.is_empty());
            let long_name = q.longname.filter(|s| !s.is_empty());
            Some(SearchResult {
                symbol,
                name: short_name.clone().or_else(|| long_name.clone()),
                short_name,
                long_name,
                kind: q.quote_type,
                exchange: q.exchange,
                exchange_display: q.exch_disp,
            })
        })
        .collect();

    Ok(SearchData { results })
}

/* ------------- Minimal serde mapping of /v1/finance/search ------------- */

#[derive(Deserialize)]
struct V1SearchEnvelope {
    quotes: Option<Vec<V1SearchQuote>>,
}

#[derive(Deserialize)]
struct V1SearchQuote {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    shortname: Option<String>,
    #[serde(default)]
    longname: Option<String>,
    #[serde(rename = "quoteType")]
    #[serde(default)]
    quote_type: Option<String>,
    #[serde(default)]
    exchange: Option<String>,
    #[serde(rename = "exchDisp")]
    #[serde(default)]
    exch_disp: Option<String>,
}
