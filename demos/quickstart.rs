use std::time::Duration;

use chrono::{Days, Utc};
use tracing_subscriber::EnvFilter;
use yahoofinance_api::{HistoryQuery, Interval, Range, SearchParams, Ticker, YfClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=yahoofinance_api=debug shows the handshake and each request.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 1. One client, one session, shared by every ticker built from it.
    let client = YfClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let aapl = Ticker::new(&client, "AAPL");

    // 2. Latest bar and quote metadata.
    let last = aapl.quote().await?;
    println!("--- AAPL ---");
    println!("Last close: {:.2} (volume {})", last.close, last.volume);

    let info = aapl.info().await?;
    println!(
        "{} on {}: {} {}",
        info.long_name.as_deref().unwrap_or("?"),
        info.exchange_name.as_deref().unwrap_or("?"),
        info.currency_symbol.as_deref().unwrap_or(""),
        info.price().unwrap_or_default()
    );
    println!();

    // 3. History by range, then by explicit dates.
    let weekly = aapl
        .history(HistoryQuery::new().range(Range::Y1).interval(Interval::W1))
        .await?;
    println!("--- {} weekly bars over the last year ---", weekly.len());
    for (day, bar) in weekly.iter().rev().take(3) {
        println!("  {day}: O {:.2} H {:.2} L {:.2} C {:.2}", bar.open, bar.high, bar.low, bar.close);
    }

    let today = Utc::now().date_naive();
    if let Some(start) = today.checked_sub_days(Days::new(10)) {
        let recent = aapl.history(HistoryQuery::new().start(start)).await?;
        println!("{} daily bars since {start}", recent.len());
    }
    println!();

    // 4. Options.
    let expirations = aapl.expiration_dates().await?;
    println!("--- {} option expirations ---", expirations.len());
    if let Some(next) = expirations.first() {
        let chain = aapl.option_chain_by_expiration(*next).await?;
        println!(
            "{next}: {} calls, {} puts",
            chain.calls.len(),
            chain.puts.len()
        );
        if let Some(c) = chain.calls.iter().find(|c| c.in_the_money) {
            println!(
                "  first ITM call {} strike {:.2} last {:?}",
                c.contract_symbol, c.strike, c.last_price
            );
        }
    }
    println!();

    // 5. Symbol search.
    let found = aapl
        .search_with_options(&SearchParams::new("nvidia", 5).lang("en-US"))
        .await?;
    println!("--- Search: nvidia ---");
    for r in found.results {
        println!(
            "  {:<8} {:<40} {}",
            r.symbol,
            r.name.unwrap_or_default(),
            r.exchange_display.unwrap_or_default()
        );
    }

    Ok(())
}
