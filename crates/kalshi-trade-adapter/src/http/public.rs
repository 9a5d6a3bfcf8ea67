/*
[INPUT]:  Identifiers and optional filters
[OUTPUT]: Exchange metadata, milestones and structured targets as raw JSON
[POS]:    HTTP layer - exchange-level and reference data endpoints
[UPDATE]: When adding new reference endpoints or changing response format
*/

use serde_json::Value;

use crate::http::{KalshiClient, QueryParams, Result};
use crate::types::GetMilestonesParams;

impl KalshiClient {
    /// GET /api_version
    pub async fn get_api_version(&self) -> Result<Value> {
        self.get("/api_version", None).await
    }

    /// GET /exchange/announcements
    pub async fn get_announcements(&self) -> Result<Value> {
        self.get("/exchange/announcements", None).await
    }

    /// GET /exchange/schedule
    pub async fn get_schedule(&self) -> Result<Value> {
        self.get("/exchange/schedule", None).await
    }

    /// GET /exchange/status
    pub async fn get_status(&self) -> Result<Value> {
        self.get("/exchange/status", None).await
    }

    /// GET /exchange/user_data_timestamp
    pub async fn get_user_data_timestamp(&self) -> Result<Value> {
        self.get("/exchange/user_data_timestamp", None).await
    }

    /// List milestones
    ///
    /// GET /milestones/?limit={limit}&...
    pub async fn get_milestones(&self, params: &GetMilestonesParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/milestones/", Some(&query)).await
    }

    /// GET /milestones/{milestone_id}
    pub async fn get_milestone(&self, milestone_id: &str) -> Result<Value> {
        self.get(&format!("/milestones/{milestone_id}"), None).await
    }

    /// GET /structured_targets/{structured_target_id}
    pub async fn get_structured_target(&self, structured_target_id: &str) -> Result<Value> {
        self.get(&format!("/structured_targets/{structured_target_id}"), None)
            .await
    }
}
