use httpmock::Method::GET;
use url::Url;
use yahoofinance_api::{HistoryQuery, Ticker, YfClient};

use crate::common;

#[tokio::test]
async fn handshake_runs_once_for_many_requests_and_clones() {
    let server = common::setup_server();
    let (cookie, crumb) = common::mock_cookie_crumb(&server);
    let chart = common::mock_history_chart(&server, "AAPL");

    let client = common::client_for(&server);
    let clone = client.clone();

    let a = Ticker::new(&client, "AAPL");
    let b = Ticker::new(&clone, "AAPL");
    let (r1, r2) = tokio::join!(a.quote(), b.history(HistoryQuery::new()));
    r1.unwrap();
    r2.unwrap();
    a.quote().await.unwrap();

    cookie.assert_hits(1);
    crumb.assert_hits(1);
    chart.assert_hits(3);

    let session = clone.session().await.unwrap();
    assert_eq!(session.cookie, "A=B");
    assert_eq!(session.crumb, "crumb-value");
}

#[tokio::test]
async fn invalidated_session_is_bootstrapped_again() {
    let server = common::setup_server();
    let (cookie, crumb) = common::mock_cookie_crumb(&server);
    let _chart = common::mock_history_chart(&server, "AAPL");

    let client = common::client_for(&server);
    let t = Ticker::new(&client, "AAPL");

    t.quote().await.unwrap();
    client.invalidate_session().await;
    assert!(client.session().await.is_none());
    t.quote().await.unwrap();

    cookie.assert_hits(2);
    crumb.assert_hits(2);
}

#[tokio::test]
async fn preauth_skips_the_handshake() {
    let server = common::setup_server();
    let (cookie, crumb) = common::mock_cookie_crumb(&server);
    let chart = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("crumb", "seeded-crumb")
            .header("cookie", "SEED=1");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart", "AAPL", "json"));
    });

    let client = YfClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .cookie_url(Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .crumb_url(Url::parse(&format!("{}/v1/test/getcrumb", server.base_url())).unwrap())
        .preauth("SEED=1", "seeded-crumb")
        .user_agent("yahoofinance-api-tests")
        .build()
        .unwrap();

    Ticker::new(&client, "AAPL").quote().await.unwrap();

    chart.assert();
    assert_eq!(cookie.hits(), 0);
    assert_eq!(crumb.hits(), 0);
}
