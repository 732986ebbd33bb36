use crate::common;
use chrono::NaiveDate;
use httpmock::Method::GET;
use yahoofinance_api::{HistoryQuery, Interval, Range, Ticker, YfError};

#[tokio::test]
async fn range_request_has_expected_query_params() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "6mo")
            .query_param("interval", "1wk")
            .query_param("crumb", "crumb-value")
            .header("cookie", "A=B")
            .query_param_missing("period1");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let _ = Ticker::new(&client, "AAPL")
        .history(HistoryQuery::new().range(Range::M6).interval(Interval::W1))
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn start_and_end_become_period_bounds_and_override_range() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);

    // 2024-01-02 and 2024-01-06 at 00:00 UTC.
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("period1", "1704153600")
            .query_param("period2", "1704499200")
            .query_param("interval", "1d")
            .query_param_missing("range");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let q = HistoryQuery::new()
        .range(Range::Y5)
        .start(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .end(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
    let bars = Ticker::new(&client, "AAPL").history(q).await.unwrap();

    mock.assert();
    assert_eq!(bars.len(), 4);
}

#[tokio::test]
async fn reversed_dates_fail_without_touching_the_network() {
    let server = common::setup_server();
    let (cookie, crumb) = common::mock_cookie_crumb(&server);

    let client = common::client_for(&server);
    let q = HistoryQuery::new()
        .start(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .end(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let err = Ticker::new(&client, "AAPL").history(q).await.unwrap_err();

    assert!(matches!(err, YfError::InvalidDates));
    assert_eq!(cookie.hits(), 0);
    assert_eq!(crumb.hits(), 0);
}
