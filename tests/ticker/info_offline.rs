use crate::common;
use httpmock::Method::GET;
use yahoofinance_api::{Ticker, YfError};

#[tokio::test]
async fn info_reads_price_module() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/AAPL")
            .query_param("modules", "price")
            .query_param("crumb", "crumb-value");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("info_price", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let info = Ticker::new(&client, "AAPL").info().await.unwrap();
    mock.assert();

    assert_eq!(info.symbol.as_deref(), Some("AAPL"));
    assert_eq!(info.short_name.as_deref(), Some("Apple Inc."));
    assert_eq!(info.price(), Some(181.18));
    assert_eq!(info.currency_symbol.as_deref(), Some("$"));
    assert_eq!(info.market_state.as_deref(), Some("CLOSED"));
    assert_eq!(
        info.market_cap.as_ref().and_then(|m| m.fmt.as_deref()),
        Some("2.82T")
    );
    assert_eq!(
        info.average_daily_volume_3_month
            .as_ref()
            .and_then(|v| v.long_fmt.as_deref()),
        Some("53,204,350")
    );
    // Empty objects decode to a value with nothing in it.
    assert_eq!(info.pre_market_price.as_ref().and_then(|p| p.raw), None);
    assert_eq!(info.from_currency, None);
}

#[tokio::test]
async fn info_for_unknown_symbol_is_missing_data() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/ZZZZ");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":[],"error":null}}"#);
    });

    let client = common::client_for(&server);
    match Ticker::new(&client, "ZZZZ").info().await.unwrap_err() {
        YfError::MissingData(msg) => assert_eq!(msg, "no info found for symbol: ZZZZ"),
        other => panic!("expected MissingData, got {other:?}"),
    }
}
