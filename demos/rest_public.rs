//! Basic example demonstrating how to query public ATAIX market data.
//!
//! ## Prerequisites
//!
//! Optionally set the following environment variables:
//! - `ATAIX_API_DOMAIN` - The ATAIX API domain (defaults to `api.ataix.kz`)
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example rest_public
//! ```

use std::env;

use dotenv::dotenv;

use ataix_sdk::{RestClient, RestClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let domain = env::var("ATAIX_API_DOMAIN").unwrap_or_else(|_| "api.ataix.kz".to_string());

    let rest = RestClient::new(RestClientConfig::default(), &domain)?;

    // Get the full trading-pair listing
    let symbols = rest.market.get_symbols().await?;
    println!("Got symbols. Len: {}", symbols.len());

    // Get metadata for a single pair (served from the cache populated above)
    let pair = "UNI/USDT";
    match rest.market.get_symbol_info(pair).await? {
        Some(info) => println!(
            "{pair}: ask {}, bid {}, min trade size {}, price precision {}",
            info.ask(),
            info.bid(),
            info.min_trade_size(),
            info.price_precision(),
        ),
        None => println!("{pair} is not listed"),
    }

    // Get the current ask
    if let Some(ask) = rest.market.get_current_ask(pair).await? {
        println!("Current {pair} ask: {ask:.4} USDT");
    }

    Ok(())
}
