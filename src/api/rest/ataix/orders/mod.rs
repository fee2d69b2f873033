use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::{
    super::{
        error::Result,
        models::{
            order::{OrderExecution, OrderReceipt, OrderRequestBody, OrderSide, TimeInForce},
            quantity::Quantity,
        },
        repositories::OrdersRepository,
    },
    base::AtaixRestBase,
    path::RestPath,
};

pub(crate) struct AtaixOrdersRepository {
    base: Arc<AtaixRestBase>,
}

impl AtaixOrdersRepository {
    pub fn new(base: Arc<AtaixRestBase>) -> Self {
        Self { base }
    }
}

impl crate::sealed::Sealed for AtaixOrdersRepository {}

#[async_trait]
impl OrdersRepository for AtaixOrdersRepository {
    async fn place_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: Quantity,
        execution: OrderExecution,
        time_in_force: TimeInForce,
    ) -> Result<OrderReceipt> {
        let body = OrderRequestBody::new(symbol, side, quantity, execution, time_in_force);

        self.base
            .make_request_with_body(Method::POST, RestPath::Orders, body, true)
            .await
    }
}

#[cfg(test)]
mod tests;
