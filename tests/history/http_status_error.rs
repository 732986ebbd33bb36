use crate::common;
use httpmock::Method::GET;
use yahoofinance_api::{HistoryQuery, Ticker, YfError};

async fn status_error(status: u16) -> YfError {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/AAPL");
        then.status(status).body("nope");
    });

    let client = common::client_for(&server);
    Ticker::new(&client, "AAPL")
        .history(HistoryQuery::new())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn statuses_map_to_error_variants() {
    assert!(matches!(status_error(404).await, YfError::NotFound { .. }));
    assert!(matches!(status_error(429).await, YfError::RateLimited { .. }));
    assert!(matches!(
        status_error(503).await,
        YfError::ServerError { status: 503, .. }
    ));
    match status_error(418).await {
        YfError::Status { status, url } => {
            assert_eq!(status, 418);
            assert!(url.contains("/v8/finance/chart/AAPL"), "url was {url}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}
