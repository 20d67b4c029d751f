//! Prediction Composer — pure assembly of classifier, bucket content, and
//! confidence into the final prediction record.
//!
//! No I/O and no clock access: `analysis_date` is passed in by the caller, so
//! composition is fully deterministic under test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;
use crate::prediction::classifier::{classify_role, RoleCategory};
use crate::prediction::confidence::score_confidence;
use crate::prediction::content::{bucket_for, risk_score_for};

/// The five detail lists every composed prediction carries. Always non-empty;
/// consumers never need to synthesize a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedImpact {
    pub immediate_threats: Vec<String>,
    pub long_term_opportunities: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub market_shifts: Vec<String>,
    pub strategic_advantages: Vec<String>,
}

/// A composed impact prediction, serialized verbatim to storage and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub category: RoleCategory,
    /// Always in 0..=100.
    pub risk_score: i32,
    pub impact: String,
    pub detailed_impact: DetailedImpact,
    pub actions: Vec<String>,
    pub opportunities: Vec<String>,
    pub timeframe: String,
    /// Always in [0.70, 0.95].
    pub confidence: f64,
    pub analysis_date: DateTime<Utc>,
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Composes a prediction for a pre-validated profile.
///
/// Total over its input domain: unrecognized roles degrade to the `Generic`
/// bucket rather than erroring.
pub fn compose_prediction(profile: &Profile, analysis_date: DateTime<Utc>) -> Prediction {
    let category = classify_role(&profile.job_title, &profile.skills);
    let bucket = bucket_for(category);
    let risk_score = risk_score_for(category, &profile.skills);
    let confidence = score_confidence(profile);

    Prediction {
        category,
        risk_score,
        impact: bucket.impact.to_string(),
        detailed_impact: DetailedImpact {
            immediate_threats: to_owned_list(bucket.immediate_threats),
            long_term_opportunities: to_owned_list(bucket.long_term_opportunities),
            skill_gaps: to_owned_list(bucket.skill_gaps),
            market_shifts: to_owned_list(bucket.market_shifts),
            strategic_advantages: to_owned_list(bucket.strategic_advantages),
        },
        actions: to_owned_list(bucket.actions),
        opportunities: to_owned_list(bucket.opportunities),
        timeframe: bucket.timeframe.to_string(),
        confidence,
        analysis_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn frozen_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn make_profile(job_title: &str, skills: &[&str]) -> Profile {
        Profile {
            job_title: job_title.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: None,
            industry: None,
            concerns: None,
        }
    }

    #[test]
    fn test_software_developer_example_arithmetic() {
        // job="Software Developer", skills=["javascript","react"]:
        // development bucket, baseline risk 30, confidence exactly 0.70.
        let profile = make_profile("Software Developer", &["javascript", "react"]);
        let prediction = compose_prediction(&profile, frozen_clock());

        assert_eq!(prediction.category, RoleCategory::Development);
        assert_eq!(prediction.risk_score, 30);
        assert!((prediction.confidence - 0.70).abs() < f64::EPSILON);
    }

    #[test]
    fn test_copilot_skill_yields_lowered_development_risk() {
        let profile = make_profile("Backend Developer", &["javascript", "copilot"]);
        let prediction = compose_prediction(&profile, frozen_clock());

        assert_eq!(prediction.category, RoleCategory::Development);
        assert_eq!(prediction.risk_score, 20);
    }

    #[test]
    fn test_idempotent_under_frozen_clock() {
        let profile = make_profile("Content Writer", &["writing", "seo"]);
        let now = frozen_clock();

        let a = compose_prediction(&profile, now);
        let b = compose_prediction(&profile, now);

        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_only_timestamp_varies_between_runs() {
        let profile = make_profile("Content Writer", &["writing"]);
        let a = compose_prediction(&profile, frozen_clock());
        let b = compose_prediction(&profile, frozen_clock() + chrono::Duration::hours(1));

        let mut va = serde_json::to_value(&a).unwrap();
        let mut vb = serde_json::to_value(&b).unwrap();
        va.as_object_mut().unwrap().remove("analysis_date");
        vb.as_object_mut().unwrap().remove("analysis_date");
        assert_eq!(va, vb);
    }

    #[test]
    fn test_detailed_impact_always_has_five_nonempty_lists() {
        for (title, skills) in [
            ("UX Designer", vec!["figma"]),
            ("Mystery Role", vec![]),
            ("Project Manager", vec!["agile", "leadership"]),
        ] {
            let skills: Vec<&str> = skills;
            let profile = make_profile(title, &skills);
            let p = compose_prediction(&profile, frozen_clock());
            assert!(!p.detailed_impact.immediate_threats.is_empty());
            assert!(!p.detailed_impact.long_term_opportunities.is_empty());
            assert!(!p.detailed_impact.skill_gaps.is_empty());
            assert!(!p.detailed_impact.market_shifts.is_empty());
            assert!(!p.detailed_impact.strategic_advantages.is_empty());
        }
    }

    #[test]
    fn test_bounds_hold_across_representative_profiles() {
        let profiles = [
            make_profile("", &[]),
            make_profile("Graphic Designer", &["photoshop", "midjourney"]),
            make_profile("Data Analyst", &["sql", "excel", "tableau", "python"]),
            make_profile("Teacher", &["curriculum"]),
            make_profile("Zookeeper", &["animal care"]),
        ];
        for profile in &profiles {
            let p = compose_prediction(profile, frozen_clock());
            assert!((0..=100).contains(&p.risk_score), "{}", profile.job_title);
            assert!(
                (0.70..=0.95).contains(&p.confidence),
                "{}",
                profile.job_title
            );
        }
    }

    #[test]
    fn test_empty_profile_degrades_to_generic() {
        let profile = make_profile("", &[]);
        let p = compose_prediction(&profile, frozen_clock());
        assert_eq!(p.category, RoleCategory::Generic);
        assert_eq!(p.risk_score, 35);
    }

    #[test]
    fn test_analysis_date_serializes_iso8601() {
        let profile = make_profile("Software Developer", &["react"]);
        let p = compose_prediction(&profile, frozen_clock());
        let json = serde_json::to_value(&p).unwrap();
        let date = json["analysis_date"].as_str().unwrap();
        assert!(date.starts_with("2025-06-01T12:00:00"));
    }
}
