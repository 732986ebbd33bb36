use crate::common;
use httpmock::Method::GET;
use yahoofinance_api::{HistoryQuery, Interval, Range, Ticker};

#[tokio::test]
async fn offline_history_uses_recorded_fixture() {
    let server = common::setup_server();
    let (cookie, crumb) = common::mock_cookie_crumb(&server);
    let chart = common::mock_history_chart(&server, "AAPL");

    let client = common::client_for(&server);
    let hist = Ticker::new(&client, "AAPL")
        .history_full(HistoryQuery::new())
        .await
        .unwrap();

    cookie.assert();
    crumb.assert();
    chart.assert();

    let keys: Vec<&str> = hist.bars.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"]
    );
    let (last_day, last) = hist.latest().unwrap();
    assert_eq!(last_day, "2024-01-05");
    assert!((last.close - 181.18).abs() < 1e-3);
    assert_eq!(last.volume, 62_303_300);

    assert_eq!(hist.meta.symbol.as_deref(), Some("AAPL"));
    assert_eq!(hist.meta.currency.as_deref(), Some("USD"));
    assert_eq!(
        hist.meta.exchange_timezone_name.as_deref(),
        Some("America/New_York")
    );
    assert_eq!(hist.meta.valid_ranges.len(), 11);
}

#[tokio::test]
async fn intraday_bars_are_keyed_with_time_and_gaps_dropped() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    let chart = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/MSFT")
            .query_param("range", "1d")
            .query_param("interval", "5m");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart", "MSFT", "json"));
    });

    let client = common::client_for(&server);
    let bars = Ticker::new(&client, "MSFT")
        .history(HistoryQuery::new().range(Range::D1).interval(Interval::I5m))
        .await
        .unwrap();

    chart.assert();
    let keys: Vec<&str> = bars.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["2024-01-05 09:30:00", "2024-01-05 09:35:00"]);
    assert_eq!(bars["2024-01-05 09:35:00"].volume, 0);
}

#[tokio::test]
async fn chart_error_payload_is_reported() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/DELISTED");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#);
    });

    let client = common::client_for(&server);
    let err = Ticker::new(&client, "DELISTED")
        .history(HistoryQuery::new())
        .await
        .unwrap_err();

    match err {
        yahoofinance_api::YfError::Api { code, .. } => assert_eq!(code, "Not Found"),
        other => panic!("expected Api error, got {other:?}"),
    }
}
