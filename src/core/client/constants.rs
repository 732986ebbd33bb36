//! Centralized constants for default endpoints and UA.

/// Desktop UAs rotated per request when no explicit UA is configured.
pub(crate) const USER_AGENTS: &[&str] = &[
    concat!(
        "Mozilla/5.0 (X11; Linux x86_64) ",
        "AppleWebKit/537.36 (KHTML, like Gecko) ",
        "Chrome/122.0.0.0 Safari/537.36"
    ),
    concat!(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
        "AppleWebKit/537.36 (KHTML, like Gecko) ",
        "Chrome/124.0.0.0 Safari/537.36"
    ),
    concat!(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
        "AppleWebKit/605.1.15 (KHTML, like Gecko) ",
        "Version/17.4 Safari/605.1.15"
    ),
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:125.0) Gecko/20100101 Firefox/125.0",
];

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query2.finance.yahoo.com/v8/finance/chart/";

/// Yahoo quoteSummary API base (symbol is appended).
pub(crate) const DEFAULT_BASE_QUOTE_SUMMARY: &str =
    "https://query2.finance.yahoo.com/v10/finance/quoteSummary/";

/// Yahoo v7 options API base (symbol is appended).
pub(crate) const DEFAULT_BASE_OPTIONS: &str = "https://query2.finance.yahoo.com/v7/finance/options/";

/// Yahoo v1 search API.
pub(crate) const DEFAULT_BASE_SEARCH: &str = "https://query2.finance.yahoo.com/v1/finance/search";

/// A URL that returns a Set-Cookie header for Yahoo domains.
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";

/// URL to fetch a crumb (requires cookie from `DEFAULT_COOKIE_URL`).
pub(crate) const DEFAULT_CRUMB_URL: &str = "https://query2.finance.yahoo.com/v1/test/getcrumb";
