use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A career profile as submitted by the user.
///
/// `skills` preserves insertion order — the order matters for display.
/// Duplicates are not rejected here; the form layer dedups best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub job_title: String,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub industry: Option<String>,
    pub concerns: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub industry: Option<String>,
    pub concerns: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
