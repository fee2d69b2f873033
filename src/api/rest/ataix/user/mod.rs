use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::{
    super::{
        error::Result,
        models::{balance::Balance, envelope::ApiEnvelope},
        repositories::UserRepository,
    },
    base::AtaixRestBase,
    path::RestPath,
};

pub(crate) struct AtaixUserRepository {
    base: Arc<AtaixRestBase>,
}

impl AtaixUserRepository {
    pub fn new(base: Arc<AtaixRestBase>) -> Self {
        Self { base }
    }
}

impl crate::sealed::Sealed for AtaixUserRepository {}

#[async_trait]
impl UserRepository for AtaixUserRepository {
    async fn get_available_balance(&self, asset: &str) -> Result<Balance> {
        let envelope: ApiEnvelope<Balance> = self
            .base
            .make_request_without_params(
                Method::GET,
                RestPath::UserBalance(asset.to_uppercase()),
                true,
            )
            .await?;

        Ok(envelope.into_result())
    }
}

#[cfg(test)]
mod tests;
