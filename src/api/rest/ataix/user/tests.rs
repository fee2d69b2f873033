use std::env;

use dotenv::dotenv;

use crate::api::{config::RestClientConfig, rest::error::RestApiError};

use super::*;

fn init_repository_from_env() -> AtaixUserRepository {
    dotenv().ok();

    let domain =
        env::var("ATAIX_API_DOMAIN").expect("ATAIX_API_DOMAIN environment variable must be set");
    let key = env::var("ATAIX_API_KEY").expect("ATAIX_API_KEY environment variable must be set");

    let base = AtaixRestBase::with_credentials(&RestClientConfig::default(), domain, key)
        .expect("Can create `AtaixRestBase`");

    AtaixUserRepository::new(base)
}

#[tokio::test]
async fn balance_request_without_credentials_fails_before_sending() {
    let base = AtaixRestBase::new(&RestClientConfig::default(), "api.ataix.kz".to_string())
        .expect("Can create `AtaixRestBase`");
    let repo = AtaixUserRepository::new(base);

    let err = repo
        .get_available_balance("USDT")
        .await
        .err()
        .expect("must fail without credentials");

    assert!(matches!(err, RestApiError::MissingRequestCredentials));
}

#[tokio::test]
#[ignore]
async fn test_get_available_balance() {
    let repo = init_repository_from_env();

    let balance = repo
        .get_available_balance("USDT")
        .await
        .expect("must get balance");

    assert!(balance.available() >= 0.0);
}
