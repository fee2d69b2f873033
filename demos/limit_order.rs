//! End-to-end example: check the balance, inspect the market, and place a
//! limit buy order, retrying once at a discounted price when the first
//! attempt fails.
//!
//! The retry-with-discount policy is deliberately caller-level code; the
//! client itself only validates and submits.
//!
//! ## Prerequisites
//!
//! Set the following environment variables:
//! - `ATAIX_API_DOMAIN` - The ATAIX API domain (defaults to `api.ataix.kz`)
//! - `ATAIX_API_KEY` - API key for an account with trading permissions
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example limit_order
//! ```

use std::env;

use dotenv::dotenv;

use ataix_sdk::{
    ApiClient, ApiClientConfig,
    error::PlaceOrderError,
    models::{BoundedPercentage, Quantity},
};

const PAIR: &str = "UNI/USDT";
const QUANTITY: f64 = 0.01;
const RETRY_DISCOUNT_PERCENT: f64 = 8.0;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let domain = env::var("ATAIX_API_DOMAIN").unwrap_or_else(|_| "api.ataix.kz".to_string());
    let key = env::var("ATAIX_API_KEY").expect("ATAIX_API_KEY must be set");

    let api = ApiClient::with_credentials(ApiClientConfig::default(), &domain, &key)?;

    // Show the available quote balance
    let balance = api.rest.user.get_available_balance("USDT").await?;
    println!("Available USDT balance: {:.2} USDT", balance.available());

    // Show the current ask
    let Some(ask) = api.rest.market.get_current_ask(PAIR).await? else {
        println!("No information found for pair {PAIR}");
        return Ok(());
    };
    println!("Current {PAIR} ask: {ask:.4} USDT");

    let quantity = Quantity::try_from(QUANTITY)?;

    // Place the order at the current ask
    println!("\nPlacing order...");
    match api.place_limit_buy(PAIR, quantity, None).await {
        Ok(receipt) => {
            println!("Order {receipt}");
            return Ok(());
        }
        Err(PlaceOrderError::Api(e)) => return Err(e.into()),
        Err(e) => println!("Order failed: {e}"),
    }

    // Retry once at a discounted price
    let suggested = ask * (1.0 - RETRY_DISCOUNT_PERCENT / 100.0);
    println!("\nRetrying around {suggested:.3} USDT ({RETRY_DISCOUNT_PERCENT}% below ask)...");

    let discount = BoundedPercentage::try_from(RETRY_DISCOUNT_PERCENT)?;
    match api.place_limit_buy(PAIR, quantity, Some(discount)).await {
        Ok(receipt) => println!("Order {receipt}"),
        Err(e) => println!("Retry failed: {e}"),
    }

    Ok(())
}
