//! Badge Minter — pluggable, trait-based minting of contribution badges.
//!
//! Default: `MockBadgeMinter` (in-process, fabricated identifiers, no network
//! and no signing). Production: `GatewayBadgeMinter`, which calls an external
//! badge gateway over HTTP.
//!
//! `AppState` holds an `Arc<dyn BadgeMinter>`, swapped at startup via
//! `BADGE_GATEWAY_URL`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;

/// Votes a contribution must reach before a badge is minted for it.
pub const BADGE_VOTE_THRESHOLD: i32 = 10;

const MAX_RETRIES: u32 = 3;

/// The identifiers recorded on a contribution once its badge is minted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintedBadge {
    pub token_id: String,
    pub tx_id: String,
}

/// The badge minter trait. Implement this to swap backends without touching
/// the vote handler.
#[async_trait]
pub trait BadgeMinter: Send + Sync {
    async fn mint(&self, contribution_id: Uuid, user_id: Uuid) -> Result<MintedBadge, AppError>;
}

/// In-process mock minter. Fabricates identifiers with the same shape the
/// gateway returns; never signs anything or touches a network.
pub struct MockBadgeMinter;

#[async_trait]
impl BadgeMinter for MockBadgeMinter {
    async fn mint(&self, contribution_id: Uuid, user_id: Uuid) -> Result<MintedBadge, AppError> {
        let badge = MintedBadge {
            token_id: format!("badge-{}", Uuid::new_v4().simple()),
            tx_id: format!("0x{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple()),
        };

        debug!(
            "Mock-minted badge {} for contribution {contribution_id} (user {user_id})",
            badge.token_id
        );

        Ok(badge)
    }
}

#[derive(Debug, Serialize)]
struct GatewayMintRequest {
    contribution_id: Uuid,
    user_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct GatewayMintResponse {
    token_id: String,
    tx_id: String,
}

/// Minter backed by an external HTTP badge gateway.
/// Retries on 429 and 5xx with exponential backoff.
pub struct GatewayBadgeMinter {
    client: Client,
    base_url: String,
}

impl GatewayBadgeMinter {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl BadgeMinter for GatewayBadgeMinter {
    async fn mint(&self, contribution_id: Uuid, user_id: Uuid) -> Result<MintedBadge, AppError> {
        let url = format!("{}/api/v1/badges/mint", self.base_url.trim_end_matches('/'));
        let request_body = GatewayMintRequest {
            contribution_id,
            user_id,
        };

        let mut last_error = String::new();

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "Badge mint attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&url).json(&request_body).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = e.to_string();
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Badge gateway returned {}: {}", status, body);
                last_error = format!("gateway status {status}: {body}");
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::Badge(format!("gateway status {status}: {body}")));
            }

            let minted: GatewayMintResponse = response
                .json()
                .await
                .map_err(|e| AppError::Badge(format!("invalid gateway response: {e}")))?;

            debug!(
                "Gateway minted badge {} for contribution {contribution_id}",
                minted.token_id
            );

            return Ok(MintedBadge {
                token_id: minted.token_id,
                tx_id: minted.tx_id,
            });
        }

        Err(AppError::Badge(format!(
            "mint failed after {MAX_RETRIES} attempts: {last_error}"
        )))
    }
}

/// Delay before retry `attempt` (1-based). Doubles each retry, so with
/// MAX_RETRIES = 3 the schedule is 1s then 2s.
fn backoff_delay(attempt: u32) -> std::time::Duration {
    std::time::Duration::from_millis(1000 * (1 << (attempt - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_schedule_doubles_per_retry() {
        assert_eq!(backoff_delay(1), std::time::Duration::from_secs(1));
        assert_eq!(backoff_delay(2), std::time::Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_mock_minter_returns_well_formed_identifiers() {
        let badge = MockBadgeMinter
            .mint(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();
        assert!(badge.token_id.starts_with("badge-"));
        assert!(badge.tx_id.starts_with("0x"));
        assert_eq!(badge.tx_id.len(), 66); // 0x + 64 hex chars
    }

    #[tokio::test]
    async fn test_mock_minter_fabricates_unique_identifiers() {
        let contribution = Uuid::new_v4();
        let user = Uuid::new_v4();
        let a = MockBadgeMinter.mint(contribution, user).await.unwrap();
        let b = MockBadgeMinter.mint(contribution, user).await.unwrap();
        assert_ne!(a.token_id, b.token_id);
        assert_ne!(a.tx_id, b.tx_id);
    }
}
