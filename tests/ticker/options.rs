use crate::common;
use chrono::NaiveDate;
use httpmock::Method::GET;
use yahoofinance_api::Ticker;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn option_chain_flattens_nearest_expiration() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/options/AAPL")
            .query_param("crumb", "crumb-value")
            .query_param_missing("date");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("options_v7", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let chain = Ticker::new(&client, "AAPL").option_chain().await.unwrap();
    mock.assert();

    assert_eq!(chain.underlying_symbol.as_deref(), Some("AAPL"));
    assert_eq!(chain.expiration_date, Some(d(2024, 1, 19)));
    assert!(!chain.has_mini_options);
    assert_eq!(chain.calls.len(), 2);
    assert_eq!(chain.puts.len(), 1);

    let itm = &chain.calls[0];
    assert_eq!(itm.contract_symbol, "AAPL240119C00175000");
    assert!(itm.in_the_money);
    assert_eq!(itm.expiration, Some(d(2024, 1, 19)));
    assert_eq!(itm.last_trade_date, Some(d(2024, 1, 5)));
    assert_eq!(itm.contract_size.as_deref(), Some("REGULAR"));

    let put = &chain.puts[0];
    assert_eq!(put.strike, 180.0);
    assert_eq!(put.open_interest, Some(36_402));
}

#[tokio::test]
async fn option_chain_by_expiration_sends_unix_date() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/options/AAPL")
            .query_param("date", "1705622400");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("options_v7", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let chain = Ticker::new(&client, "AAPL")
        .option_chain_by_expiration(d(2024, 1, 19))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(chain.expiration_date, Some(d(2024, 1, 19)));
}

#[tokio::test]
async fn expiration_dates_are_calendar_days() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    server.mock(|when, then| {
        when.method(GET).path("/v7/finance/options/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("options_v7", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let dates = Ticker::new(&client, "AAPL").expiration_dates().await.unwrap();
    assert_eq!(dates, vec![d(2024, 1, 19), d(2024, 1, 26), d(2024, 2, 2)]);
}

#[tokio::test]
async fn symbol_without_options_gives_empty_chain() {
    let server = common::setup_server();
    let _ = common::mock_cookie_crumb(&server);
    server.mock(|when, then| {
        when.method(GET).path("/v7/finance/options/BRK-A");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"optionChain":{"result":[{"underlyingSymbol":"BRK-A","expirationDates":[],"strikes":[],"hasMiniOptions":false,"options":[]}],"error":null}}"#);
    });

    let client = common::client_for(&server);
    let chain = Ticker::new(&client, "BRK-A").option_chain().await.unwrap();
    assert_eq!(chain.expiration_date, None);
    assert!(chain.calls.is_empty());
    assert!(chain.puts.is_empty());
}
