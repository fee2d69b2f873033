use thiserror::Error;

use super::rest::error::RestApiError;

/// Reasons a composed order placement can fail before or after submission.
///
/// REST-boundary failures (transport, non-2xx responses, malformed bodies)
/// surface uniformly through the [`Api`] variant; the remaining variants are
/// business-rule rejections detected without, or after, a successful request.
///
/// [`Api`]: PlaceOrderError::Api
#[derive(Error, Debug)]
pub enum PlaceOrderError {
    #[error("No information found for pair {pair}")]
    PairNotFound { pair: String },

    #[error("Pair {pair} has no quote asset")]
    InvalidPair { pair: String },

    #[error("Quantity {quantity} is below the minimum trade size {min_trade_size}")]
    QuantityBelowMinimum { quantity: f64, min_trade_size: f64 },

    #[error("Insufficient funds: available {available:.2}, required {required:.2}")]
    InsufficientBalance { available: f64, required: f64 },

    #[error("Order rejected by the exchange: {message}")]
    Rejected { message: String },

    #[error("REST API error: {0}")]
    Api(#[from] RestApiError),
}
