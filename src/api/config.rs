use std::time::Duration;

/// Configuration for an ATAIX [`ApiClient`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ataix_sdk::ApiClientConfig;
///
/// // Use default configuration
/// let config = ApiClientConfig::default();
///
/// // Customize configuration
/// let config = ApiClientConfig::default()
///     .with_rest_timeout(Duration::from_secs(5))
///     .with_symbols_cache_ttl(Duration::from_secs(60));
/// ```
///
/// [`ApiClient`]: super::ApiClient
#[derive(Clone, Debug)]
pub struct ApiClientConfig {
    rest_timeout: Duration,
    symbols_cache_ttl: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            rest_timeout: Duration::from_secs(10),
            symbols_cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}

impl ApiClientConfig {
    /// Returns the configured timeout for REST API requests.
    pub fn rest_timeout(&self) -> Duration {
        self.rest_timeout
    }

    /// Returns the configured time-to-live for the symbols cache.
    pub fn symbols_cache_ttl(&self) -> Duration {
        self.symbols_cache_ttl
    }

    /// Sets the REST API request timeout. The default is 10 seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use ataix_sdk::ApiClientConfig;
    ///
    /// let config = ApiClientConfig::default()
    ///     .with_rest_timeout(Duration::from_secs(10));
    /// ```
    pub fn with_rest_timeout(mut self, timeout: Duration) -> Self {
        self.rest_timeout = timeout;
        self
    }

    /// Sets the symbols cache time-to-live. The default is 5 minutes.
    ///
    /// The cached `/api/symbols` listing is replaced wholesale once it is
    /// older than this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use ataix_sdk::ApiClientConfig;
    ///
    /// let config = ApiClientConfig::default()
    ///     .with_symbols_cache_ttl(Duration::from_secs(5 * 60));
    /// ```
    pub fn with_symbols_cache_ttl(mut self, ttl: Duration) -> Self {
        self.symbols_cache_ttl = ttl;
        self
    }
}

#[derive(Clone, Debug)]
pub struct RestClientConfig {
    timeout: Duration,
    symbols_cache_ttl: Duration,
}

impl RestClientConfig {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn symbols_cache_ttl(&self) -> Duration {
        self.symbols_cache_ttl
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_symbols_cache_ttl(mut self, ttl: Duration) -> Self {
        self.symbols_cache_ttl = ttl;
        self
    }
}

impl From<&ApiClientConfig> for RestClientConfig {
    fn from(value: &ApiClientConfig) -> Self {
        Self {
            timeout: value.rest_timeout(),
            symbols_cache_ttl: value.symbols_cache_ttl(),
        }
    }
}

impl Default for RestClientConfig {
    fn default() -> Self {
        (&ApiClientConfig::default()).into()
    }
}
