use yahoofinance_api::{SearchParams, YfClient};

#[tokio::test]
#[ignore]
async fn live_search_smoke() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = YfClient::builder().build().unwrap();
    let resp = yahoofinance_api::search::search(&client, &SearchParams::new("apple", 10))
        .await
        .unwrap();

    if !crate::common::is_recording() {
        assert!(resp.results.iter().any(|r| r.symbol == "AAPL"));
    }
}
