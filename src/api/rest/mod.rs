use std::sync::Arc;

mod ataix;
pub(crate) mod error;
pub(crate) mod models;
pub(crate) mod repositories;

use ataix::{
    base::AtaixRestBase, market::AtaixMarketRepository, orders::AtaixOrdersRepository,
    user::AtaixUserRepository,
};
use error::Result;
use repositories::{MarketRepository, OrdersRepository, UserRepository};

use super::config::RestClientConfig;

/// Client for interacting with the [ATAIX API] via REST.
///
/// Some endpoints require credentials. Such requirements are mentioned in the
/// corresponding method's documentation.
///
/// [ATAIX API]: https://api.ataix.kz/api
pub struct RestClient {
    /// Indicates whether ATAIX credentials were provided during client
    /// initialization.
    ///
    /// Will be `true` if the client was created with
    /// [`RestClient::with_credentials`], and `false` if created with
    /// [`RestClient::new`].
    pub has_credentials: bool,

    /// Methods for interacting with the [ATAIX API]'s user endpoints.
    ///
    /// [ATAIX API]: https://api.ataix.kz/api
    pub user: Box<dyn UserRepository>,

    /// Methods for interacting with the [ATAIX API]'s market-data endpoints.
    ///
    /// [ATAIX API]: https://api.ataix.kz/api
    pub market: Box<dyn MarketRepository>,

    /// Methods for interacting with the [ATAIX API]'s order endpoints.
    ///
    /// [ATAIX API]: https://api.ataix.kz/api
    pub orders: Box<dyn OrdersRepository>,
}

impl RestClient {
    fn new_inner(config: &RestClientConfig, base: Arc<AtaixRestBase>) -> Self {
        let has_credentials = base.has_credentials();
        let user = Box::new(AtaixUserRepository::new(base.clone()));
        let market = Box::new(AtaixMarketRepository::new(
            base.clone(),
            config.symbols_cache_ttl(),
        ));
        let orders = Box::new(AtaixOrdersRepository::new(base));

        Self {
            has_credentials,
            user,
            market,
            orders,
        }
    }

    /// Creates a new unauthenticated REST client.
    ///
    /// For authenticated endpoints, use [`RestClient::with_credentials`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// use std::env;
    /// use ataix_sdk::{RestClient, RestClientConfig};
    ///
    /// let domain = env::var("ATAIX_API_DOMAIN").unwrap();
    ///
    /// let rest = RestClient::new(RestClientConfig::default(), domain)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: impl Into<RestClientConfig>, domain: impl ToString) -> Result<Self> {
        let config = config.into();
        let base = AtaixRestBase::new(&config, domain.to_string())?;

        Ok(Self::new_inner(&config, base))
    }

    /// Creates a new authenticated REST client with an API key.
    ///
    /// If not accessing authenticated endpoints, consider using
    /// [`RestClient::new`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// use std::env;
    /// use ataix_sdk::{RestClient, RestClientConfig};
    ///
    /// let domain = env::var("ATAIX_API_DOMAIN").unwrap();
    /// let key = env::var("ATAIX_API_KEY").unwrap();
    ///
    /// let rest = RestClient::with_credentials(RestClientConfig::default(), domain, key)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_credentials(
        config: impl Into<RestClientConfig>,
        domain: impl ToString,
        key: impl ToString,
    ) -> Result<Self> {
        let config = config.into();
        let base = AtaixRestBase::with_credentials(&config, domain.to_string(), key.to_string())?;

        Ok(Self::new_inner(&config, base))
    }
}
