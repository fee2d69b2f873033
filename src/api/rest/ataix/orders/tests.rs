use crate::api::{config::RestClientConfig, rest::error::RestApiError};

use super::*;

#[tokio::test]
async fn place_order_without_credentials_fails_before_sending() {
    let base = AtaixRestBase::new(&RestClientConfig::default(), "api.ataix.kz".to_string())
        .expect("Can create `AtaixRestBase`");
    let repo = AtaixOrdersRepository::new(base);

    let err = repo
        .place_order(
            "UNI/USDT",
            OrderSide::Buy,
            Quantity::try_from(0.01).unwrap(),
            OrderExecution::Limit(5.52),
            TimeInForce::Gtc,
        )
        .await
        .err()
        .expect("must fail without credentials");

    assert!(matches!(err, RestApiError::MissingRequestCredentials));
}
