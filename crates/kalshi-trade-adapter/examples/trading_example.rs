/*
[INPUT]:  KALSHI_API_KEY_ID / KALSHI_PRIVATE_KEY_PATH and a market ticker argument
[OUTPUT]: Order creation/cancellation confirmations
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use kalshi_trade_adapter::*;

/// Example: Place and cancel a resting limit order on the demo exchange
#[tokio::main]
async fn main() {
    println!("=== Kalshi Trading Example ===\n");

    let Some(ticker) = std::env::args().nth(1) else {
        eprintln!("usage: trading_example <MARKET_TICKER>");
        return;
    };

    let client = match Credentials::from_env()
        .and_then(|credentials| KalshiClient::with_config(credentials, ClientConfig::demo()))
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.get_balance().await {
        Ok(balance) => println!("✓ Balance: {}", balance),
        Err(e) => println!("✗ Error: {}", e),
    }

    // 1 contract of YES at 1 cent: rests far from the touch
    let order = CreateOrderRequest::limit(&ticker, Side::Yes, Action::Buy, 1, 1);
    println!("\nPlacing order {}...", order.client_order_id);
    let created = match client.create_order(&order).await {
        Ok(created) => created,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Created: {}", created);

    if let Some(order_id) = created["order"]["order_id"].as_str() {
        match client.cancel_order(order_id).await {
            Ok(cancelled) => println!("✓ Cancelled: {}", cancelled),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Trading example complete");
}
