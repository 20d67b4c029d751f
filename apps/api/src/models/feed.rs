use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A community feed post. Never hard-deleted; votes only move via the
/// vote endpoint. `badge_token_id` is set at most once, when the post
/// crosses the vote threshold.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContributionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub category: String,
    pub votes: i32,
    pub badge_token_id: Option<String>,
    pub badge_tx_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentRow {
    pub id: Uuid,
    pub contribution_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
