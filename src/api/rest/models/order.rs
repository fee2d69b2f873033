use std::fmt;

use serde::{Deserialize, Serialize};

use super::quantity::Quantity;

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Execution type of an order, as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

/// Time-in-force of an order (the API's `subType` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Good-til-cancelled.
    Gtc,
    /// Immediate-or-cancel.
    Ioc,
    /// Fill-or-kill.
    Fok,
}

/// How an order should execute: at a given limit price, or at the market.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderExecution {
    Limit(f64),
    Market,
}

/// JSON body for `POST /api/orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestBody {
    symbol: String,
    side: OrderSide,
    #[serde(rename = "type")]
    order_type: OrderType,
    quantity: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    sub_type: TimeInForce,
}

impl OrderRequestBody {
    pub fn new(
        symbol: impl ToString,
        side: OrderSide,
        quantity: Quantity,
        execution: OrderExecution,
        time_in_force: TimeInForce,
    ) -> Self {
        let (order_type, price) = match execution {
            OrderExecution::Limit(price) => (OrderType::Limit, Some(price)),
            OrderExecution::Market => (OrderType::Market, None),
        };

        Self {
            symbol: symbol.to_string(),
            side,
            order_type,
            quantity,
            price,
            sub_type: time_in_force,
        }
    }
}

/// Exchange response to an order submission.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderReceipt {
    #[serde(default)]
    status: bool,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl OrderReceipt {
    /// Whether the exchange accepted the order.
    pub fn status(&self) -> bool {
        self.status
    }

    /// Identifier the exchange assigned to the order, when accepted.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Error or status message supplied by the exchange.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for OrderReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status {
            write!(f, "accepted")?;
            if let Some(id) = &self.id {
                write!(f, " (id: {id})")?;
            }
        } else {
            write!(f, "rejected")?;
            if let Some(message) = &self.message {
                write!(f, ": {message}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_buy_body_matches_wire_format() {
        let body = OrderRequestBody::new(
            "UNI/USDT",
            OrderSide::Buy,
            Quantity::try_from(0.01).unwrap(),
            OrderExecution::Limit(5.52),
            TimeInForce::Gtc,
        );

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "symbol": "UNI/USDT",
                "side": "buy",
                "type": "limit",
                "quantity": 0.01,
                "price": 5.52,
                "subType": "gtc"
            })
        );
    }

    #[test]
    fn market_body_omits_price() {
        let body = OrderRequestBody::new(
            "UNI/USDT",
            OrderSide::Sell,
            Quantity::try_from(0.5).unwrap(),
            OrderExecution::Market,
            TimeInForce::Ioc,
        );

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "market");
        assert_eq!(value["subType"], "ioc");
        assert!(!value.as_object().unwrap().contains_key("price"));
    }

    #[test]
    fn receipt_deserializes_accepted_order() {
        let receipt: OrderReceipt =
            serde_json::from_str(r#"{"status":true,"id":"ord-123"}"#).unwrap();

        assert!(receipt.status());
        assert_eq!(receipt.id(), Some("ord-123"));
        assert_eq!(receipt.message(), None);
        assert_eq!(receipt.to_string(), "accepted (id: ord-123)");
    }

    #[test]
    fn receipt_deserializes_rejected_order() {
        let receipt: OrderReceipt =
            serde_json::from_str(r#"{"status":false,"message":"Insufficient funds"}"#).unwrap();

        assert!(!receipt.status());
        assert_eq!(receipt.message(), Some("Insufficient funds"));
        assert_eq!(receipt.to_string(), "rejected: Insufficient funds");
    }

    #[test]
    fn receipt_defaults_to_rejected_on_empty_response() {
        let receipt: OrderReceipt = serde_json::from_str("{}").unwrap();

        assert!(!receipt.status());
        assert_eq!(receipt.id(), None);
        assert_eq!(receipt.message(), None);
    }
}
