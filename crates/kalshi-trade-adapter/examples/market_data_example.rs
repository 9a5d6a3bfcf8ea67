/*
[INPUT]:  KALSHI_API_KEY_ID / KALSHI_PRIVATE_KEY_PATH environment variables
[OUTPUT]: Exchange status, open events and one order book
[POS]:    Examples - market data queries
[UPDATE]: When adding new market data endpoints
*/

use kalshi_trade_adapter::*;

/// Example: Query market data with a signed client
///
/// Every Kalshi request is signed, so credentials are needed even for reads.
#[tokio::main]
async fn main() {
    println!("=== Kalshi Market Data Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load credentials: {}", e);
            return;
        }
    };

    let client = match KalshiClient::with_config(credentials, ClientConfig::demo()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    println!("Querying exchange status...");
    match client.get_status().await {
        Ok(status) => println!("✓ Status: {}", status),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying open events...");
    let params = GetEventsParams {
        status: Some("open".to_string()),
        limit: Some(5),
        ..GetEventsParams::default()
    };
    let events = match client.get_events(&params).await {
        Ok(events) => events,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Events: {}", events);

    let Some(event_ticker) = events["events"][0]["event_ticker"].as_str() else {
        println!("\nNo open events returned");
        return;
    };

    println!("\nQuerying markets for {}...", event_ticker);
    let params = GetMarketsParams {
        event_ticker: Some(event_ticker.to_string()),
        ..GetMarketsParams::default()
    };
    match client.get_markets(&params).await {
        Ok(markets) => {
            if let Some(ticker) = markets["markets"][0]["ticker"].as_str() {
                match client.get_market_orderbook(ticker, Some(5)).await {
                    Ok(book) => println!("✓ Order book for {}: {}", ticker, book),
                    Err(e) => println!("✗ Error: {}", e),
                }
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
