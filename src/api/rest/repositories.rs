use async_trait::async_trait;

use super::{
    error::Result,
    models::{
        balance::Balance,
        order::{OrderExecution, OrderReceipt, OrderSide, TimeInForce},
        quantity::Quantity,
        symbol::SymbolInfo,
    },
};

/// Methods for interacting with the [ATAIX API]'s user endpoints.
///
/// This trait is sealed and not meant to be implemented outside of
/// `ataix-sdk`.
///
/// [ATAIX API]: https://api.ataix.kz/api
#[async_trait]
pub trait UserRepository: crate::sealed::Sealed + Send + Sync {
    /// Get the available balance for a single asset.
    ///
    /// The balance is fetched fresh from the API on every call; it is never
    /// cached.
    ///
    /// **Requires credentials.**
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(rest: ataix_sdk::RestClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let balance = rest.user.get_available_balance("USDT").await?;
    ///
    /// println!("Available: {} USDT", balance.available());
    /// # Ok(())
    /// # }
    /// ```
    async fn get_available_balance(&self, asset: &str) -> Result<Balance>;
}

/// Methods for interacting with the [ATAIX API]'s market-data endpoints.
///
/// This trait is sealed and not meant to be implemented outside of
/// `ataix-sdk`.
///
/// [ATAIX API]: https://api.ataix.kz/api
#[async_trait]
pub trait MarketRepository: crate::sealed::Sealed + Send + Sync {
    /// Get the full trading-pair listing.
    ///
    /// Always fetches `/api/symbols` and replaces the client's symbols cache
    /// wholesale.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(rest: ataix_sdk::RestClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let symbols = rest.market.get_symbols().await?;
    ///
    /// println!("Listed pairs: {}", symbols.len());
    /// # Ok(())
    /// # }
    /// ```
    async fn get_symbols(&self) -> Result<Vec<SymbolInfo>>;

    /// Get the metadata for a single trading pair, e.g. `"UNI/USDT"`.
    ///
    /// Served from the symbols cache when it is non-empty and younger than
    /// the configured time-to-live; otherwise the whole listing is refreshed
    /// first. Returns `Ok(None)` when the pair is not listed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(rest: ataix_sdk::RestClient) -> Result<(), Box<dyn std::error::Error>> {
    /// if let Some(info) = rest.market.get_symbol_info("UNI/USDT").await? {
    ///     println!("Ask: {}, min trade size: {}", info.ask(), info.min_trade_size());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn get_symbol_info(&self, pair: &str) -> Result<Option<SymbolInfo>>;

    /// Get the current best ask price for a trading pair.
    ///
    /// Shorthand for [`get_symbol_info`] followed by [`SymbolInfo::ask`];
    /// subject to the same caching.
    ///
    /// [`get_symbol_info`]: MarketRepository::get_symbol_info
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(rest: ataix_sdk::RestClient) -> Result<(), Box<dyn std::error::Error>> {
    /// if let Some(ask) = rest.market.get_current_ask("UNI/USDT").await? {
    ///     println!("Ask: {ask:.4} USDT");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn get_current_ask(&self, pair: &str) -> Result<Option<f64>>;
}

/// Methods for interacting with the [ATAIX API]'s order endpoints.
///
/// This trait is sealed and not meant to be implemented outside of
/// `ataix-sdk`.
///
/// [ATAIX API]: https://api.ataix.kz/api
#[async_trait]
pub trait OrdersRepository: crate::sealed::Sealed + Send + Sync {
    /// Submit a new order.
    ///
    /// The receipt's `status` flag indicates whether the exchange accepted
    /// the order; a rejected order is still an `Ok` result at this level.
    /// For the validated limit-buy flow, see [`ApiClient::place_limit_buy`].
    ///
    /// **Requires credentials.**
    ///
    /// [`ApiClient::place_limit_buy`]: crate::ApiClient::place_limit_buy
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(rest: ataix_sdk::RestClient) -> Result<(), Box<dyn std::error::Error>> {
    /// use ataix_sdk::models::{OrderExecution, OrderSide, Quantity, TimeInForce};
    ///
    /// let receipt = rest
    ///     .orders
    ///     .place_order(
    ///         "UNI/USDT",
    ///         OrderSide::Buy,
    ///         Quantity::try_from(0.01)?,
    ///         OrderExecution::Limit(5.52),
    ///         TimeInForce::Gtc,
    ///     )
    ///     .await?;
    ///
    /// println!("Order {receipt}");
    /// # Ok(())
    /// # }
    /// ```
    async fn place_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: Quantity,
        execution: OrderExecution,
        time_in_force: TimeInForce,
    ) -> Result<OrderReceipt>;
}
