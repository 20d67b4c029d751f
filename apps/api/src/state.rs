use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::config::Config;
use crate::feed::badges::BadgeMinter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis client used for short-TTL dashboard metric caching.
    pub redis: RedisClient,
    pub s3: S3Client,
    pub config: Config,
    /// Pluggable badge minter. Default: MockBadgeMinter. Swap via BADGE_GATEWAY_URL env.
    pub badge_minter: Arc<dyn BadgeMinter>,
}
