//! Axum route handlers for the Prediction API.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::prediction::PredictionRow;
use crate::models::profile::{Profile, ProfileRow};
use crate::prediction::composer::{compose_prediction, Prediction};
use crate::prediction::store::{get_prediction, get_profile, save_assessment};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub user_id: Uuid,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub prediction: Prediction,
    /// False when persistence failed; the prediction is still usable.
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validates form input before the rule engine runs. The engine itself
/// assumes pre-validated input and never raises validation errors.
fn validate_profile(profile: &Profile) -> Result<(), AppError> {
    if profile.job_title.trim().is_empty() {
        return Err(AppError::Validation(
            "job_title cannot be empty".to_string(),
        ));
    }
    if !profile.skills.iter().any(|s| !s.trim().is_empty()) {
        return Err(AppError::Validation(
            "at least one non-empty skill is required".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/predictions
///
/// Runs the rule engine and hands the result to storage. A persistence
/// failure does not fail the request: the composed prediction is returned
/// with `saved: false` and a message ("continue anyway" policy).
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, AppError> {
    validate_profile(&request.profile)?;

    let prediction = compose_prediction(&request.profile, Utc::now());

    let (saved, message) = match save_assessment(
        &state.db,
        &state.s3,
        &state.config.s3_bucket,
        request.user_id,
        &request.profile,
        &prediction,
    )
    .await
    {
        Ok(()) => (true, None),
        Err(e) => {
            warn!("Failed to save assessment for user {}: {e}", request.user_id);
            (
                false,
                Some("Your prediction could not be saved, but the results below are complete.".to_string()),
            )
        }
    };

    Ok(Json(AssessResponse {
        prediction,
        saved,
        message,
    }))
}

/// GET /api/v1/profiles/:user_id
///
/// Returns the last submitted profile, used to prefill the form.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileRow>, AppError> {
    let row = get_profile(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {user_id}")))?;

    Ok(Json(row))
}

/// GET /api/v1/predictions/:user_id
pub async fn handle_get_prediction(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<PredictionRow>, AppError> {
    let row = get_prediction(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No prediction for user {user_id}")))?;

    Ok(Json(row))
}

/// GET /api/v1/predictions/:user_id/export
///
/// Returns the stored prediction verbatim as a downloadable JSON attachment
/// named `ai-prediction-<ISO-date>.json`.
pub async fn handle_export_prediction(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let row = get_prediction(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No prediction for user {user_id}")))?;

    let body = serde_json::to_string_pretty(&row.prediction)
        .map_err(|e| AppError::Internal(e.into()))?;

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export_filename(row.analysis_date)),
        ),
    ];

    Ok((headers, body))
}

fn export_filename(analysis_date: DateTime<Utc>) -> String {
    format!("ai-prediction-{}.json", analysis_date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile(job_title: &str, skills: &[&str]) -> Profile {
        Profile {
            job_title: job_title.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: None,
            industry: None,
            concerns: None,
        }
    }

    #[test]
    fn test_validation_rejects_blank_job_title() {
        let result = validate_profile(&profile("   ", &["rust"]));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_empty_and_blank_skills() {
        assert!(validate_profile(&profile("Developer", &[])).is_err());
        assert!(validate_profile(&profile("Developer", &["", "  "])).is_err());
    }

    #[test]
    fn test_validation_accepts_minimal_profile() {
        assert!(validate_profile(&profile("Developer", &["rust"])).is_ok());
    }

    #[test]
    fn test_export_filename_uses_iso_date() {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 0).unwrap();
        assert_eq!(export_filename(date), "ai-prediction-2025-06-01.json");
    }
}
