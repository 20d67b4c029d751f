//! Axum route handlers for the community feed: contributions, votes, and
//! comments. Nothing here hard-deletes; contributions only accumulate votes
//! and, past the threshold, a badge.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::feed::badges::{BadgeMinter, MintedBadge, BADGE_VOTE_THRESHOLD};
use crate::models::feed::{CommentRow, ContributionRow};
use crate::state::AppState;

/// Decides whether a badge mint should be attempted: the contribution has
/// reached the vote threshold and carries no badge yet.
fn should_award_badge(row: &ContributionRow) -> bool {
    row.votes >= BADGE_VOTE_THRESHOLD && row.badge_token_id.is_none()
}

/// Attempts the mint. A failure is logged and swallowed — the vote that
/// triggered the attempt must still succeed, and the next vote retries.
async fn try_mint_badge(minter: &dyn BadgeMinter, row: &ContributionRow) -> Option<MintedBadge> {
    match minter.mint(row.id, row.user_id).await {
        Ok(badge) => Some(badge),
        Err(e) => {
            warn!("Badge mint failed for contribution {}: {e}", row.id);
            None
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateContributionRequest {
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub user_id: Uuid,
    pub body: String,
}

/// POST /api/v1/contributions
pub async fn handle_create_contribution(
    State(state): State<AppState>,
    Json(request): Json<CreateContributionRequest>,
) -> Result<Json<ContributionRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.body.trim().is_empty() {
        return Err(AppError::Validation("body cannot be empty".to_string()));
    }

    let row = sqlx::query_as::<_, ContributionRow>(
        r#"
        INSERT INTO contributions (id, user_id, title, body, category)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.user_id)
    .bind(request.title.trim())
    .bind(request.body.trim())
    .bind(&request.category)
    .fetch_one(&state.db)
    .await?;

    info!("Created contribution {} by user {}", row.id, row.user_id);

    Ok(Json(row))
}

/// GET /api/v1/contributions
///
/// Newest first. The feed is append-only, so plain created_at ordering is
/// stable across votes and comments.
pub async fn handle_list_contributions(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContributionRow>>, AppError> {
    let rows = sqlx::query_as::<_, ContributionRow>(
        "SELECT * FROM contributions ORDER BY created_at DESC LIMIT 50",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/v1/contributions/:id/vote
///
/// Increments the vote count. Once the count reaches the badge threshold the
/// badge is minted and recorded exactly once; the `badge_token_id IS NULL`
/// guard keeps concurrent voters from double-recording it.
pub async fn handle_vote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContributionRow>, AppError> {
    let row = sqlx::query_as::<_, ContributionRow>(
        "UPDATE contributions SET votes = votes + 1, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Contribution {id} not found")))?;

    if !should_award_badge(&row) {
        return Ok(Json(row));
    }

    let Some(badge) = try_mint_badge(state.badge_minter.as_ref(), &row).await else {
        return Ok(Json(row));
    };

    let awarded = sqlx::query_as::<_, ContributionRow>(
        r#"
        UPDATE contributions
        SET badge_token_id = $1, badge_tx_id = $2, updated_at = now()
        WHERE id = $3 AND badge_token_id IS NULL
        RETURNING *
        "#,
    )
    .bind(&badge.token_id)
    .bind(&badge.tx_id)
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    match awarded {
        Some(row) => {
            info!("Awarded badge {} to contribution {id}", badge.token_id);
            Ok(Json(row))
        }
        // Lost the race to another voter; return the row they produced.
        None => {
            let row = sqlx::query_as::<_, ContributionRow>(
                "SELECT * FROM contributions WHERE id = $1",
            )
            .bind(id)
            .fetch_one(&state.db)
            .await?;
            Ok(Json(row))
        }
    }
}

/// POST /api/v1/contributions/:id/comments
pub async fn handle_create_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<Json<CommentRow>, AppError> {
    if request.body.trim().is_empty() {
        return Err(AppError::Validation("body cannot be empty".to_string()));
    }

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM contributions WHERE id = $1)")
            .bind(id)
            .fetch_one(&state.db)
            .await?;
    if !exists {
        return Err(AppError::NotFound(format!("Contribution {id} not found")));
    }

    let row = sqlx::query_as::<_, CommentRow>(
        r#"
        INSERT INTO comments (id, contribution_id, user_id, body)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(id)
    .bind(request.user_id)
    .bind(request.body.trim())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/v1/contributions/:id/comments
pub async fn handle_list_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CommentRow>>, AppError> {
    let rows = sqlx::query_as::<_, CommentRow>(
        "SELECT * FROM comments WHERE contribution_id = $1 ORDER BY created_at ASC",
    )
    .bind(id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::badges::MockBadgeMinter;
    use async_trait::async_trait;
    use chrono::Utc;

    fn make_contribution(votes: i32, badge_token_id: Option<&str>) -> ContributionRow {
        ContributionRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Prompted my way through a design sprint".to_string(),
            body: "What worked and what did not.".to_string(),
            category: "design".to_string(),
            votes,
            badge_token_id: badge_token_id.map(|s| s.to_string()),
            badge_tx_id: badge_token_id.map(|_| "0xabc".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct FailingMinter;

    #[async_trait]
    impl BadgeMinter for FailingMinter {
        async fn mint(&self, _: Uuid, _: Uuid) -> Result<MintedBadge, AppError> {
            Err(AppError::Badge("gateway unreachable".to_string()))
        }
    }

    #[test]
    fn test_no_award_below_threshold() {
        assert!(!should_award_badge(&make_contribution(9, None)));
    }

    #[test]
    fn test_award_at_and_above_threshold() {
        assert!(should_award_badge(&make_contribution(10, None)));
        assert!(should_award_badge(&make_contribution(11, None)));
    }

    #[test]
    fn test_no_reaward_once_badged() {
        assert!(!should_award_badge(&make_contribution(10, Some("badge-1"))));
        assert!(!should_award_badge(&make_contribution(250, Some("badge-1"))));
    }

    #[tokio::test]
    async fn test_mint_failure_is_swallowed() {
        let row = make_contribution(10, None);
        let badge = try_mint_badge(&FailingMinter, &row).await;
        assert!(badge.is_none());
    }

    #[tokio::test]
    async fn test_successful_mint_returns_badge() {
        let row = make_contribution(10, None);
        let badge = try_mint_badge(&MockBadgeMinter, &row).await.unwrap();
        assert!(badge.token_id.starts_with("badge-"));
    }
}
