/*
[INPUT]:  RFQ/quote identifiers, filters and request bodies
[OUTPUT]: RFQs and quotes as raw JSON
[POS]:    HTTP layer - communications (request-for-quote) endpoints
[UPDATE]: When adding new communications endpoints or changing bodies
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{KalshiClient, QueryParams, Result};
use crate::types::{GetQuotesParams, GetRfqsParams};

impl KalshiClient {
    /// GET /communications/id
    pub async fn get_communications_id(&self) -> Result<Value> {
        self.get("/communications/id", None).await
    }

    /// GET /communications/quotes
    pub async fn get_quotes(&self, params: &GetQuotesParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/communications/quotes", Some(&query)).await
    }

    /// Create a quote in response to an RFQ
    ///
    /// POST /communications/quotes
    pub async fn create_quote<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.post("/communications/quotes", body).await
    }

    /// GET /communications/quotes/{quote_id}
    pub async fn get_quote(&self, quote_id: &str) -> Result<Value> {
        self.get(&format!("/communications/quotes/{quote_id}"), None)
            .await
    }

    /// DELETE /communications/quotes/{quote_id}
    pub async fn delete_quote(&self, quote_id: &str) -> Result<Value> {
        self.delete::<Value>(&format!("/communications/quotes/{quote_id}"), None)
            .await
    }

    /// PUT /communications/quotes/{quote_id}/accept
    pub async fn accept_quote<B: Serialize + ?Sized>(
        &self,
        quote_id: &str,
        body: &B,
    ) -> Result<Value> {
        self.put(&format!("/communications/quotes/{quote_id}/accept"), Some(body))
            .await
    }

    /// PUT /communications/quotes/{quote_id}/confirm
    pub async fn confirm_quote(&self, quote_id: &str) -> Result<Value> {
        self.put::<Value>(&format!("/communications/quotes/{quote_id}/confirm"), None)
            .await
    }

    /// GET /communications/rfqs
    pub async fn get_rfqs(&self, params: &GetRfqsParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/communications/rfqs", Some(&query)).await
    }

    /// POST /communications/rfqs
    pub async fn create_rfq<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.post("/communications/rfqs", body).await
    }

    /// GET /communications/rfqs/{rfq_id}
    pub async fn get_rfq(&self, rfq_id: &str) -> Result<Value> {
        self.get(&format!("/communications/rfqs/{rfq_id}"), None).await
    }

    /// DELETE /communications/rfqs/{rfq_id}
    pub async fn delete_rfq(&self, rfq_id: &str) -> Result<Value> {
        self.delete::<Value>(&format!("/communications/rfqs/{rfq_id}"), None)
            .await
    }
}
