//! Confidence Scorer — derives prediction confidence from profile completeness.
//!
//! Confidence says nothing about the content of the prediction; it only
//! reflects how much of the form the user filled in.

use crate::models::profile::Profile;

pub const BASE_CONFIDENCE: f64 = 0.70;
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Scores confidence from profile completeness.
///
/// Base 0.70; +0.05 each for experience, industry, and concerns being
/// present; +0.10 if more than 3 skills; a further +0.05 if more than 6
/// (cumulative). Clamped to 0.95, so the output is always in [0.70, 0.95].
pub fn score_confidence(profile: &Profile) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if is_present(&profile.experience) {
        confidence += 0.05;
    }
    if is_present(&profile.industry) {
        confidence += 0.05;
    }
    if is_present(&profile.concerns) {
        confidence += 0.05;
    }
    if profile.skills.len() > 3 {
        confidence += 0.10;
    }
    if profile.skills.len() > 6 {
        confidence += 0.05;
    }

    confidence.min(MAX_CONFIDENCE)
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: usize, experience: bool, industry: bool, concerns: bool) -> Profile {
        Profile {
            job_title: "Software Developer".to_string(),
            skills: (0..skills).map(|i| format!("skill-{i}")).collect(),
            experience: experience.then(|| "5 years".to_string()),
            industry: industry.then(|| "fintech".to_string()),
            concerns: concerns.then(|| "automation".to_string()),
        }
    }

    #[test]
    fn test_minimal_profile_scores_base_confidence() {
        let c = score_confidence(&profile(2, false, false, false));
        assert!((c - 0.70).abs() < f64::EPSILON);
    }

    #[test]
    fn test_each_optional_field_adds_five_points() {
        assert!((score_confidence(&profile(2, true, false, false)) - 0.75).abs() < 1e-9);
        assert!((score_confidence(&profile(2, true, true, false)) - 0.80).abs() < 1e-9);
        assert!((score_confidence(&profile(2, true, true, true)) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_skill_count_bonuses_are_cumulative() {
        // >3 skills: +0.10
        assert!((score_confidence(&profile(4, false, false, false)) - 0.80).abs() < 1e-9);
        // >6 skills: +0.10 and +0.05
        assert!((score_confidence(&profile(7, false, false, false)) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_clamps_at_max() {
        // 0.70 + 0.15 + 0.15 = 1.00 before clamping
        let c = score_confidence(&profile(7, true, true, true));
        assert!((c - MAX_CONFIDENCE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blank_optional_fields_do_not_count() {
        let mut p = profile(2, false, false, false);
        p.experience = Some("   ".to_string());
        assert!((score_confidence(&p) - 0.70).abs() < f64::EPSILON);
    }

    #[test]
    fn test_monotone_in_completeness() {
        let minimal = score_confidence(&profile(2, false, false, false));
        let more_fields = score_confidence(&profile(2, true, true, false));
        let more_skills = score_confidence(&profile(7, true, true, false));
        assert!(more_fields >= minimal);
        assert!(more_skills > more_fields);
    }

    #[test]
    fn test_output_always_within_bounds() {
        for skills in [0, 3, 4, 6, 7, 20] {
            for flags in 0..8u8 {
                let c = score_confidence(&profile(
                    skills,
                    flags & 1 != 0,
                    flags & 2 != 0,
                    flags & 4 != 0,
                ));
                assert!((BASE_CONFIDENCE..=MAX_CONFIDENCE).contains(&c));
            }
        }
    }
}
