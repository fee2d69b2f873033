use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use tokio::sync::Mutex;

use super::{
    super::{
        error::Result,
        models::{envelope::ApiEnvelope, symbol::SymbolInfo},
        repositories::MarketRepository,
    },
    base::AtaixRestBase,
    path::RestPath,
};

/// Client-owned cache of the full `/api/symbols` listing.
///
/// The listing is replaced wholesale on refresh; entries are never evicted
/// individually. Staleness is decided by wall-clock comparison at read time.
pub(crate) struct SymbolsCache {
    entries: Vec<SymbolInfo>,
    fetched_at: Option<DateTime<Utc>>,
    ttl: Duration,
}

impl SymbolsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            fetched_at: None,
            ttl,
        }
    }

    /// Whether the cached listing can still be served at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        if self.entries.is_empty() {
            return false;
        }

        match self.fetched_at {
            Some(fetched_at) => now
                .signed_duration_since(fetched_at)
                .to_std()
                .map(|elapsed| elapsed < self.ttl)
                .unwrap_or(false),
            None => false,
        }
    }

    /// Replaces the whole listing and resets the fetch timestamp.
    pub fn replace(&mut self, entries: Vec<SymbolInfo>, now: DateTime<Utc>) {
        self.entries = entries;
        self.fetched_at = Some(now);
    }

    /// Exact-match lookup by pair name, e.g. `"UNI/USDT"`.
    pub fn lookup(&self, pair: &str) -> Option<SymbolInfo> {
        self.entries
            .iter()
            .find(|info| info.symbol() == pair)
            .cloned()
    }
}

pub(crate) struct AtaixMarketRepository {
    base: Arc<AtaixRestBase>,
    cache: Mutex<SymbolsCache>,
}

impl AtaixMarketRepository {
    pub fn new(base: Arc<AtaixRestBase>, symbols_cache_ttl: Duration) -> Self {
        Self {
            base,
            cache: Mutex::new(SymbolsCache::new(symbols_cache_ttl)),
        }
    }

    async fn fetch_symbols(&self) -> Result<Vec<SymbolInfo>> {
        let envelope: ApiEnvelope<Vec<SymbolInfo>> = self
            .base
            .make_request_without_params(Method::GET, RestPath::Symbols, false)
            .await?;

        Ok(envelope.into_result())
    }
}

impl crate::sealed::Sealed for AtaixMarketRepository {}

#[async_trait]
impl MarketRepository for AtaixMarketRepository {
    async fn get_symbols(&self) -> Result<Vec<SymbolInfo>> {
        let entries = self.fetch_symbols().await?;

        let mut cache = self.cache.lock().await;
        cache.replace(entries.clone(), Utc::now());

        Ok(entries)
    }

    async fn get_symbol_info(&self, pair: &str) -> Result<Option<SymbolInfo>> {
        // Read-check-refresh is a single critical section.
        let mut cache = self.cache.lock().await;

        if !cache.is_fresh(Utc::now()) {
            let entries = self.fetch_symbols().await?;
            cache.replace(entries, Utc::now());
        }

        Ok(cache.lookup(pair))
    }

    async fn get_current_ask(&self, pair: &str) -> Result<Option<f64>> {
        let info = self.get_symbol_info(pair).await?;

        Ok(info.map(|info| info.ask()))
    }
}

#[cfg(test)]
mod tests;
