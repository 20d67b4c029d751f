//! Persistence hand-off for assessments: profile and prediction rows are
//! upserted by user_id (last-write-wins), and every saved prediction is
//! snapshotted verbatim to S3 as JSON.

use anyhow::Result;
use aws_sdk_s3::primitives::ByteStream;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::prediction::PredictionRow;
use crate::models::profile::{Profile, ProfileRow};
use crate::prediction::composer::Prediction;

/// Upserts the profile and its prediction, then uploads a JSON snapshot.
///
/// The store owns concurrency control here: concurrent submissions for the
/// same user resolve to last-write-wins via the unique user_id constraint.
pub async fn save_assessment(
    pool: &PgPool,
    s3: &aws_sdk_s3::Client,
    s3_bucket: &str,
    user_id: Uuid,
    profile: &Profile,
    prediction: &Prediction,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO profiles (id, user_id, job_title, skills, experience, industry, concerns)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id) DO UPDATE SET
            job_title = EXCLUDED.job_title,
            skills = EXCLUDED.skills,
            experience = EXCLUDED.experience,
            industry = EXCLUDED.industry,
            concerns = EXCLUDED.concerns,
            updated_at = now()
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&profile.job_title)
    .bind(&profile.skills)
    .bind(&profile.experience)
    .bind(&profile.industry)
    .bind(&profile.concerns)
    .execute(pool)
    .await?;

    let payload = serde_json::to_value(prediction)?;

    sqlx::query(
        r#"
        INSERT INTO predictions (id, user_id, category, risk_score, confidence, prediction, analysis_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id) DO UPDATE SET
            category = EXCLUDED.category,
            risk_score = EXCLUDED.risk_score,
            confidence = EXCLUDED.confidence,
            prediction = EXCLUDED.prediction,
            analysis_date = EXCLUDED.analysis_date,
            updated_at = now()
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(prediction.category.as_str())
    .bind(prediction.risk_score)
    .bind(prediction.confidence)
    .bind(&payload)
    .bind(prediction.analysis_date)
    .execute(pool)
    .await?;

    info!("Saved prediction for user {user_id} ({})", prediction.category.as_str());

    let s3_key = format!(
        "predictions/{}/{}.json",
        user_id,
        prediction.analysis_date.format("%Y-%m-%dT%H%M%SZ")
    );
    let body = serde_json::to_vec_pretty(&payload)?;
    s3.put_object()
        .bucket(s3_bucket)
        .key(&s3_key)
        .body(ByteStream::from(body))
        .content_type("application/json")
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

    info!("Uploaded prediction snapshot to s3://{}/{}", s3_bucket, s3_key);

    Ok(())
}

/// Returns the stored profile for a user, if any. Used to prefill the
/// assessment form on resubmission.
pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRow>> {
    Ok(
        sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Returns the stored prediction for a user, if any.
pub async fn get_prediction(pool: &PgPool, user_id: Uuid) -> Result<Option<PredictionRow>> {
    Ok(
        sqlx::query_as::<_, PredictionRow>("SELECT * FROM predictions WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}
