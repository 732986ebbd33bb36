#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;
use yahoofinance_api::YfClient;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{key}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn mock_cookie_crumb(server: &'_ MockServer) -> (Mock<'_>, Mock<'_>) {
    let cookie_mock = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(404).header(
            "set-cookie",
            "A=B; Max-Age=315360000; Domain=.yahoo.com; Path=/; Secure; SameSite=None",
        );
    });
    let crumb_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb").header("cookie", "A=B");
        then.status(200).body("crumb-value");
    });
    (cookie_mock, crumb_mock)
}

/// A client whose every endpoint points at `server`.
pub fn client_for(server: &MockServer) -> YfClient {
    let u = |path: &str| Url::parse(&format!("{}{}", server.base_url(), path)).unwrap();
    YfClient::builder()
        .cookie_url(u("/consent"))
        .crumb_url(u("/v1/test/getcrumb"))
        .base_chart(u("/v8/finance/chart/"))
        .base_quote_summary(u("/v10/finance/quoteSummary/"))
        .base_options(u("/v7/finance/options/"))
        .base_search(u("/v1/finance/search"))
        .build()
        .unwrap()
}

pub fn mock_history_chart<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{symbol}"))
            .query_param("crumb", "crumb-value");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", symbol, "json"));
    })
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("YF_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("YF_RECORD").ok().as_deref() == Some("1")
}
