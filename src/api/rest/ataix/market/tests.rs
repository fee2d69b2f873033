use std::env;

use chrono::TimeDelta;
use dotenv::dotenv;

use crate::api::config::RestClientConfig;

use super::*;

const TTL: Duration = Duration::from_secs(5 * 60);

fn sample_symbols() -> Vec<SymbolInfo> {
    serde_json::from_str(
        r#"[
            {"symbol":"UNI/USDT","ask":5.6,"bid":5.5,"minTradeSize":0.001,"pricePrecision":2},
            {"symbol":"BTC/USDT","ask":97000.0,"bid":96950.0,"minTradeSize":0.0001,"pricePrecision":1}
        ]"#,
    )
    .expect("must deserialize sample symbols")
}

#[test]
fn empty_cache_is_stale() {
    let cache = SymbolsCache::new(TTL);

    assert!(!cache.is_fresh(Utc::now()));
}

#[test]
fn cache_is_fresh_within_ttl_and_stale_after() {
    let mut cache = SymbolsCache::new(TTL);
    let fetched_at = Utc::now();

    cache.replace(sample_symbols(), fetched_at);

    assert!(cache.is_fresh(fetched_at));
    assert!(cache.is_fresh(fetched_at + TimeDelta::seconds(299)));
    assert!(!cache.is_fresh(fetched_at + TimeDelta::seconds(300)));
    assert!(!cache.is_fresh(fetched_at + TimeDelta::seconds(301)));
}

#[test]
fn replacing_resets_the_fetch_timestamp() {
    let mut cache = SymbolsCache::new(TTL);
    let first_fetch = Utc::now();

    cache.replace(sample_symbols(), first_fetch);
    let second_fetch = first_fetch + TimeDelta::seconds(400);
    assert!(!cache.is_fresh(second_fetch));

    cache.replace(sample_symbols(), second_fetch);
    assert!(cache.is_fresh(second_fetch + TimeDelta::seconds(299)));
}

#[test]
fn cache_with_backwards_clock_is_stale() {
    let mut cache = SymbolsCache::new(TTL);
    let fetched_at = Utc::now();

    cache.replace(sample_symbols(), fetched_at);

    assert!(!cache.is_fresh(fetched_at - TimeDelta::seconds(1)));
}

#[test]
fn lookup_requires_an_exact_symbol_match() {
    let mut cache = SymbolsCache::new(TTL);
    cache.replace(sample_symbols(), Utc::now());

    let info = cache.lookup("UNI/USDT").expect("pair must be found");
    assert_eq!(info.symbol(), "UNI/USDT");
    assert_eq!(info.ask(), 5.6);

    assert!(cache.lookup("UNI").is_none());
    assert!(cache.lookup("uni/usdt").is_none());
    assert!(cache.lookup("DOGE/USDT").is_none());
}

fn init_repository_from_env() -> AtaixMarketRepository {
    dotenv().ok();

    let domain =
        env::var("ATAIX_API_DOMAIN").expect("ATAIX_API_DOMAIN environment variable must be set");

    let base = AtaixRestBase::new(&RestClientConfig::default(), domain)
        .expect("Can create `AtaixRestBase`");

    AtaixMarketRepository::new(base, TTL)
}

#[tokio::test]
#[ignore]
async fn test_api() {
    let repo = init_repository_from_env();

    let symbols = repo.get_symbols().await.expect("must get symbols");
    assert!(!symbols.is_empty());

    // Second lookup is served from the cache populated above.
    let _ = repo
        .get_symbol_info(symbols[0].symbol())
        .await
        .expect("must look up symbol info")
        .expect("listed pair must be found");

    let _ = repo
        .get_current_ask(symbols[0].symbol())
        .await
        .expect("must get current ask");
}
