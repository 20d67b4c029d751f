//! Dashboard metrics: live aggregates from storage merged with the static
//! market-outlook figures the product displays. Cached in Redis with a short
//! TTL; a cold or unreachable cache falls back to direct computation.

use axum::{extract::State, Json};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

const METRICS_CACHE_KEY: &str = "dashboard:metrics";
const METRICS_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_predictions: i64,
    pub average_risk_score: f64,
    pub category_distribution: Vec<CategoryCount>,
    pub total_contributions: i64,
    pub total_comments: i64,
    pub market_outlook: MarketOutlook,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Fixed market-outlook figures shown alongside the live aggregates.
/// These are display constants, not derived from stored data.
#[derive(Debug, Serialize, Deserialize)]
pub struct MarketOutlook {
    pub jobs_displaced_by_2030_millions: u32,
    pub jobs_created_by_2030_millions: u32,
    pub workers_needing_reskilling_pct: u32,
    pub roles_augmented_not_replaced_pct: u32,
}

pub fn market_outlook() -> MarketOutlook {
    MarketOutlook {
        jobs_displaced_by_2030_millions: 85,
        jobs_created_by_2030_millions: 97,
        workers_needing_reskilling_pct: 50,
        roles_augmented_not_replaced_pct: 60,
    }
}

/// GET /api/v1/dashboard/metrics
pub async fn handle_metrics(
    State(state): State<AppState>,
) -> Result<Json<DashboardMetrics>, AppError> {
    match read_cached(&state.redis).await {
        Ok(Some(json)) => {
            if let Ok(metrics) = serde_json::from_str::<DashboardMetrics>(&json) {
                return Ok(Json(metrics));
            }
            // Stale shape after a deploy; recompute below.
        }
        Ok(None) => {}
        Err(e) => warn!("Metrics cache read failed, computing directly: {e}"),
    }

    let metrics = compute_metrics(&state.db).await?;

    if let Ok(json) = serde_json::to_string(&metrics) {
        if let Err(e) = write_cached(&state.redis, &json).await {
            warn!("Metrics cache write failed: {e}");
        }
    }

    Ok(Json(metrics))
}

async fn compute_metrics(pool: &PgPool) -> Result<DashboardMetrics, AppError> {
    let total_predictions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM predictions")
        .fetch_one(pool)
        .await?;

    let average_risk_score: Option<f64> =
        sqlx::query_scalar("SELECT AVG(risk_score::float8) FROM predictions")
            .fetch_one(pool)
            .await?;

    let category_distribution = sqlx::query_as::<_, CategoryCount>(
        "SELECT category, COUNT(*) AS count FROM predictions GROUP BY category ORDER BY count DESC",
    )
    .fetch_all(pool)
    .await?;

    let total_contributions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contributions")
        .fetch_one(pool)
        .await?;

    let total_comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await?;

    Ok(DashboardMetrics {
        total_predictions,
        average_risk_score: average_risk_score.unwrap_or(0.0),
        category_distribution,
        total_contributions,
        total_comments,
        market_outlook: market_outlook(),
    })
}

async fn read_cached(redis: &redis::Client) -> Result<Option<String>, AppError> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Cache(e.to_string()))?;
    conn.get(METRICS_CACHE_KEY)
        .await
        .map_err(|e| AppError::Cache(e.to_string()))
}

async fn write_cached(redis: &redis::Client, json: &str) -> Result<(), AppError> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Cache(e.to_string()))?;
    conn.set_ex(METRICS_CACHE_KEY, json, METRICS_CACHE_TTL_SECS)
        .await
        .map_err(|e| AppError::Cache(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_outlook_percentages_are_valid() {
        let outlook = market_outlook();
        assert!(outlook.workers_needing_reskilling_pct <= 100);
        assert!(outlook.roles_augmented_not_replaced_pct <= 100);
    }

    #[test]
    fn test_metrics_serde_round_trip() {
        let metrics = DashboardMetrics {
            total_predictions: 12,
            average_risk_score: 41.5,
            category_distribution: vec![CategoryCount {
                category: "development".to_string(),
                count: 7,
            }],
            total_contributions: 3,
            total_comments: 9,
            market_outlook: market_outlook(),
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let back: DashboardMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_predictions, 12);
        assert_eq!(back.category_distribution[0].category, "development");
    }
}
