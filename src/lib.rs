mod api;

pub use api::{
    ApiClient, ApiClientConfig, RestClientConfig,
    rest::{
        RestClient,
        repositories::{MarketRepository, OrdersRepository, UserRepository},
    },
};

pub mod error {
    pub use super::api::{
        error::PlaceOrderError,
        rest::{
            error::RestApiError,
            models::error::{BoundedPercentageValidationError, QuantityValidationError},
        },
    };
}

pub mod models {
    pub use super::api::rest::models::{
        balance::Balance,
        order::{OrderExecution, OrderReceipt, OrderSide, OrderType, TimeInForce},
        percentage::BoundedPercentage,
        quantity::Quantity,
        symbol::SymbolInfo,
    };
}

mod sealed {
    pub trait Sealed {}
}
