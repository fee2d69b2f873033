use std::sync::Arc;

use tracing::info;

use super::{
    config::ApiClientConfig,
    error::PlaceOrderError,
    rest::{
        RestClient,
        error::Result as RestResult,
        models::{
            order::{OrderExecution, OrderReceipt, OrderSide, TimeInForce},
            percentage::BoundedPercentage,
            quantity::Quantity,
            symbol::SymbolInfo,
        },
    },
};

/// Client for interacting with the [ATAIX API].
///
/// `ApiClient` exposes the raw REST repositories through [`ApiClient::rest`]
/// and composed operations such as [`ApiClient::place_limit_buy`] on top of
/// them.
///
/// [ATAIX API]: https://api.ataix.kz/api
pub struct ApiClient {
    pub rest: RestClient,
}

impl ApiClient {
    fn new_inner(rest: RestClient) -> Arc<Self> {
        Arc::new(Self { rest })
    }

    /// Creates a new unauthenticated API client.
    ///
    /// For authenticated endpoints, use [`ApiClient::with_credentials`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// use std::env;
    /// use ataix_sdk::{ApiClient, ApiClientConfig};
    ///
    /// let domain = env::var("ATAIX_API_DOMAIN").unwrap();
    ///
    /// let api = ApiClient::new(ApiClientConfig::default(), domain)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: ApiClientConfig, domain: impl ToString) -> RestResult<Arc<Self>> {
        let rest = RestClient::new(&config, domain)?;

        Ok(Self::new_inner(rest))
    }

    /// Creates a new authenticated API client with an API key.
    ///
    /// If not accessing authenticated endpoints, consider using
    /// [`ApiClient::new`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// use std::env;
    /// use ataix_sdk::{ApiClient, ApiClientConfig};
    ///
    /// let domain = env::var("ATAIX_API_DOMAIN").unwrap();
    /// let key = env::var("ATAIX_API_KEY").unwrap();
    ///
    /// let api = ApiClient::with_credentials(ApiClientConfig::default(), domain, key)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_credentials(
        config: ApiClientConfig,
        domain: impl ToString,
        key: impl ToString,
    ) -> RestResult<Arc<Self>> {
        let rest = RestClient::with_credentials(&config, domain, key)?;

        Ok(Self::new_inner(rest))
    }

    /// Places a good-til-cancelled limit buy order for `pair`, optionally at
    /// a discount from the current ask.
    ///
    /// The order price is the pair's best ask — reduced by `discount`
    /// percent when one is given — rounded to the pair's declared price
    /// precision. The order is only submitted when `quantity` meets the
    /// pair's minimum trade size and the available quote-asset balance
    /// covers `quantity * price`; otherwise the corresponding
    /// [`PlaceOrderError`] variant is returned and no order request is
    /// issued.
    ///
    /// **Requires credentials.**
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: ataix_sdk::ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    /// use ataix_sdk::models::{BoundedPercentage, Quantity};
    ///
    /// // Buy 0.01 UNI at the current ask
    /// let receipt = api
    ///     .place_limit_buy("UNI/USDT", Quantity::try_from(0.01)?, None)
    ///     .await?;
    /// println!("Order {receipt}");
    ///
    /// // Buy 0.01 UNI at 8% below the current ask
    /// let discount = BoundedPercentage::try_from(8.0)?;
    /// let receipt = api
    ///     .place_limit_buy("UNI/USDT", Quantity::try_from(0.01)?, Some(discount))
    ///     .await?;
    /// println!("Order {receipt}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn place_limit_buy(
        &self,
        pair: &str,
        quantity: Quantity,
        discount: Option<BoundedPercentage>,
    ) -> Result<OrderReceipt, PlaceOrderError> {
        let info = self
            .rest
            .market
            .get_symbol_info(pair)
            .await?
            .ok_or_else(|| PlaceOrderError::PairNotFound {
                pair: pair.to_string(),
            })?;

        let price = limit_buy_price(&info, discount);

        check_min_trade_size(&info, quantity)?;

        let quote_asset = info
            .quote_asset()
            .ok_or_else(|| PlaceOrderError::InvalidPair {
                pair: pair.to_string(),
            })?;

        let balance = self.rest.user.get_available_balance(quote_asset).await?;
        check_funds(balance.available(), quantity, price)?;

        let receipt = self
            .rest
            .orders
            .place_order(
                pair,
                OrderSide::Buy,
                quantity,
                OrderExecution::Limit(price),
                TimeInForce::Gtc,
            )
            .await?;

        if !receipt.status() {
            let message = receipt
                .message()
                .unwrap_or("order was not accepted")
                .to_string();

            return Err(PlaceOrderError::Rejected { message });
        }

        info!(
            pair,
            %quantity,
            price,
            total_cost = quantity.as_f64() * price,
            order_id = receipt.id().unwrap_or("unknown"),
            "limit buy order placed"
        );

        Ok(receipt)
    }
}

/// Ask price — discounted when requested — rounded to the pair's precision.
fn limit_buy_price(info: &SymbolInfo, discount: Option<BoundedPercentage>) -> f64 {
    let target = match discount {
        Some(discount) => info.ask() * (1.0 - discount.into_f64() / 100.0),
        None => info.ask(),
    };

    info.round_price(target)
}

fn check_min_trade_size(info: &SymbolInfo, quantity: Quantity) -> Result<(), PlaceOrderError> {
    if quantity.as_f64() < info.min_trade_size() {
        return Err(PlaceOrderError::QuantityBelowMinimum {
            quantity: quantity.as_f64(),
            min_trade_size: info.min_trade_size(),
        });
    }

    Ok(())
}

fn check_funds(available: f64, quantity: Quantity, price: f64) -> Result<(), PlaceOrderError> {
    let required = quantity.as_f64() * price;

    if available < required {
        return Err(PlaceOrderError::InsufficientBalance {
            available,
            required,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_info(json: &str) -> SymbolInfo {
        serde_json::from_str(json).expect("must deserialize symbol info")
    }

    fn quantity(value: f64) -> Quantity {
        Quantity::try_from(value).unwrap()
    }

    #[test]
    fn discounted_price_rounds_to_pair_precision() {
        let info = symbol_info(
            r#"{"symbol":"UNI/USDT","ask":6.0,"bid":5.9,"minTradeSize":0.001,"pricePrecision":3}"#,
        );
        let discount = BoundedPercentage::try_from(8.0).unwrap();

        assert_eq!(limit_buy_price(&info, Some(discount)), 5.52);
    }

    #[test]
    fn undiscounted_price_is_the_rounded_ask() {
        let info = symbol_info(
            r#"{"symbol":"UNI/USDT","ask":5.6,"bid":5.5,"minTradeSize":0.001,"pricePrecision":2}"#,
        );

        assert_eq!(limit_buy_price(&info, None), 5.6);
    }

    #[test]
    fn quantity_below_minimum_is_rejected() {
        let info = symbol_info(
            r#"{"symbol":"UNI/USDT","ask":5.6,"bid":5.5,"minTradeSize":0.001,"pricePrecision":2}"#,
        );

        let err = check_min_trade_size(&info, quantity(0.0005))
            .err()
            .expect("must reject quantity below the minimum");

        assert!(matches!(
            err,
            PlaceOrderError::QuantityBelowMinimum {
                quantity: _,
                min_trade_size: _,
            }
        ));
        assert!(check_min_trade_size(&info, quantity(0.001)).is_ok());
    }

    #[test]
    fn insufficient_funds_are_rejected() {
        let err = check_funds(0.05, quantity(0.01), 5.6)
            .err()
            .expect("must reject insufficient funds");

        assert!(matches!(
            err,
            PlaceOrderError::InsufficientBalance {
                available: _,
                required: _,
            }
        ));
    }

    #[test]
    fn order_within_constraints_passes_all_checks() {
        let info = symbol_info(
            r#"{"symbol":"UNI/USDT","ask":5.6,"bid":5.5,"minTradeSize":0.001,"pricePrecision":2}"#,
        );
        let quantity = quantity(0.01);

        let price = limit_buy_price(&info, None);
        assert_eq!(price, 5.6);

        assert!(check_min_trade_size(&info, quantity).is_ok());
        assert!(check_funds(1.0, quantity, price).is_ok());

        let total_cost = quantity.as_f64() * price;
        assert!((total_cost - 0.056).abs() < 1e-12);
    }
}
