/*
[INPUT]:  Order bodies, order identifiers and portfolio filters
[OUTPUT]: Balance, fills, orders, positions and settlements as raw JSON
[POS]:    HTTP layer - portfolio and trading endpoints (authenticated)
[UPDATE]: When adding new portfolio endpoints or changing order flow
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{KalshiClient, QueryParams, Result};
use crate::types::{GetFillsParams, GetOrdersParams, GetPositionsParams, GetSettlementsParams};

impl KalshiClient {
    /// GET /portfolio/balance
    pub async fn get_balance(&self) -> Result<Value> {
        self.get("/portfolio/balance", None).await
    }

    /// GET /portfolio/fills
    pub async fn get_fills(&self, params: &GetFillsParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/portfolio/fills", Some(&query)).await
    }

    /// GET /portfolio/orders
    pub async fn get_orders(&self, params: &GetOrdersParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/portfolio/orders", Some(&query)).await
    }

    /// Create a new order
    ///
    /// POST /portfolio/orders
    pub async fn create_order<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.post("/portfolio/orders", body).await
    }

    /// POST /portfolio/orders/batched
    pub async fn batch_create_orders<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.post("/portfolio/orders/batched", body).await
    }

    /// Cancel several orders at once; the ids travel in the JSON body
    ///
    /// DELETE /portfolio/orders/batched
    pub async fn batch_cancel_orders<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.delete("/portfolio/orders/batched", Some(body)).await
    }

    /// GET /portfolio/orders/{order_id}
    pub async fn get_order(&self, order_id: &str) -> Result<Value> {
        self.get(&format!("/portfolio/orders/{order_id}"), None).await
    }

    /// DELETE /portfolio/orders/{order_id}
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        self.delete::<Value>(&format!("/portfolio/orders/{order_id}"), None)
            .await
    }

    /// POST /portfolio/orders/{order_id}/amend
    pub async fn amend_order<B: Serialize + ?Sized>(
        &self,
        order_id: &str,
        body: &B,
    ) -> Result<Value> {
        self.post(&format!("/portfolio/orders/{order_id}/amend"), body)
            .await
    }

    /// POST /portfolio/orders/{order_id}/decrease
    pub async fn decrease_order<B: Serialize + ?Sized>(
        &self,
        order_id: &str,
        body: &B,
    ) -> Result<Value> {
        self.post(&format!("/portfolio/orders/{order_id}/decrease"), body)
            .await
    }

    /// GET /portfolio/positions
    pub async fn get_positions(&self, params: &GetPositionsParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/portfolio/positions", Some(&query)).await
    }

    /// GET /portfolio/settlements
    pub async fn get_portfolio_settlements(&self, params: &GetSettlementsParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/portfolio/settlements", Some(&query)).await
    }

    /// GET /portfolio/summary/resting_order_total_value
    pub async fn get_portfolio_resting_order_total_value(&self) -> Result<Value> {
        self.get("/portfolio/summary/resting_order_total_value", None)
            .await
    }
}
