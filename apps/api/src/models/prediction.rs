use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored impact prediction. One row per user (upsert-by-user_id,
/// last-write-wins); `prediction` holds the full composed result verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PredictionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub risk_score: i32,
    pub confidence: f64,
    pub prediction: Value,
    pub analysis_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
