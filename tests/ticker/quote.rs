use crate::common;
use yahoofinance_api::Ticker;

#[tokio::test]
async fn quote_is_the_latest_daily_bar() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    let chart = common::mock_history_chart(&server, "AAPL");

    let client = common::client_for(&server);
    let q = Ticker::new(&client, "AAPL").quote().await.unwrap();

    chart.assert();
    assert!((q.open - 181.99).abs() < 1e-3);
    assert!((q.close - 181.18).abs() < 1e-3);
    assert!(q.low <= q.close && q.close <= q.high);
    assert_eq!(q.volume, 62_303_300);
}
