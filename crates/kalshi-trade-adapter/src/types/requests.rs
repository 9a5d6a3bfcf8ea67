/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request bodies with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Action, OrderType, Side, TimeInForce};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub ticker: String,
    pub client_order_id: String,
    pub side: Side,
    pub action: Action,
    pub count: u32,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yes_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_ts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_max_cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_position_floor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
}

impl CreateOrderRequest {
    /// Limit order priced in cents on the given side
    pub fn limit(
        ticker: impl Into<String>,
        side: Side,
        action: Action,
        count: u32,
        price_cents: u32,
    ) -> Self {
        let mut order = Self::market(ticker, side, action, count);
        order.order_type = OrderType::Limit;
        match side {
            Side::Yes => order.yes_price = Some(price_cents),
            Side::No => order.no_price = Some(price_cents),
        }
        order
    }

    pub fn market(ticker: impl Into<String>, side: Side, action: Action, count: u32) -> Self {
        Self {
            ticker: ticker.into(),
            client_order_id: Uuid::new_v4().to_string(),
            side,
            action,
            count,
            order_type: OrderType::Market,
            yes_price: None,
            no_price: None,
            expiration_ts: None,
            time_in_force: None,
            buy_max_cost: None,
            sell_position_floor: None,
            post_only: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCreateOrdersRequest {
    pub orders: Vec<CreateOrderRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCancelOrdersRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmendOrderRequest {
    pub ticker: String,
    pub side: Side,
    pub action: Action,
    pub client_order_id: String,
    pub updated_client_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yes_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_price: Option<u32>,
}

/// Exactly one of the two fields is expected by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecreaseOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_by: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_to: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfq_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yes_bid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_bid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_remainder: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptQuoteRequest {
    pub accepted_side: Side,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRfqRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_remainder: Option<bool>,
}
