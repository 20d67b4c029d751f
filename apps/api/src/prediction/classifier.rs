//! Role Classifier — maps a free-text job profile onto one of eight role categories.
//!
//! Pure keyword matching, no weighting: the rules are evaluated in declaration
//! order and the first category whose title or skill keywords match wins.
//! Profiles that match nothing fall through to `Generic`.

use serde::{Deserialize, Serialize};

/// The category bucket a profile is classified into. Drives content and risk
/// lookup in the bucket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Design,
    Development,
    Writing,
    Teaching,
    Marketing,
    Analysis,
    Management,
    Generic,
}

impl RoleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCategory::Design => "design",
            RoleCategory::Development => "development",
            RoleCategory::Writing => "writing",
            RoleCategory::Teaching => "teaching",
            RoleCategory::Marketing => "marketing",
            RoleCategory::Analysis => "analysis",
            RoleCategory::Management => "management",
            RoleCategory::Generic => "generic",
        }
    }
}

/// One classification rule: a category plus the substrings that select it.
struct CategoryRule {
    category: RoleCategory,
    title_keywords: &'static [&'static str],
    skill_keywords: &'static [&'static str],
}

/// Evaluated top to bottom; ties between categories are broken purely by
/// declaration order. `Generic` is the fall-through and has no rule here.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: RoleCategory::Design,
        title_keywords: &["design", "artist", "creative", "illustrator", "ux"],
        skill_keywords: &["photoshop", "illustrator", "figma", "sketch", "canva"],
    },
    CategoryRule {
        category: RoleCategory::Development,
        title_keywords: &["developer", "programmer", "engineer", "software", "coder"],
        skill_keywords: &["javascript", "python", "java", "react", "programming", "coding"],
    },
    CategoryRule {
        category: RoleCategory::Writing,
        title_keywords: &["writer", "journalist", "author", "editor", "copywriter"],
        skill_keywords: &["writing", "copywriting", "editing", "storytelling"],
    },
    CategoryRule {
        category: RoleCategory::Teaching,
        title_keywords: &["teacher", "professor", "instructor", "educator", "tutor"],
        skill_keywords: &["teaching", "curriculum", "lesson planning"],
    },
    CategoryRule {
        category: RoleCategory::Marketing,
        title_keywords: &["marketing", "marketer", "growth", "brand", "advertis"],
        skill_keywords: &["seo", "google ads", "social media", "email marketing"],
    },
    CategoryRule {
        category: RoleCategory::Analysis,
        title_keywords: &["analyst", "data scientist", "researcher", "statistician"],
        skill_keywords: &["excel", "sql", "tableau", "power bi", "statistics"],
    },
    CategoryRule {
        category: RoleCategory::Management,
        title_keywords: &["manager", "director", "executive", "supervisor", "coordinator"],
        skill_keywords: &["leadership", "project management", "agile", "scrum"],
    },
];

/// Classifies a job profile into exactly one category.
///
/// Matching is case-insensitive substring containment over the job title and
/// each skill string. Empty title and empty skills are legal and classify as
/// `Generic`.
pub fn classify_role(job_title: &str, skills: &[String]) -> RoleCategory {
    let title = job_title.to_lowercase();
    let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    for rule in CATEGORY_RULES {
        let title_hit = rule.title_keywords.iter().any(|kw| title.contains(kw));
        let skill_hit = rule
            .skill_keywords
            .iter()
            .any(|kw| skills_lower.iter().any(|s| s.contains(kw)));

        if title_hit || skill_hit {
            return rule.category;
        }
    }

    RoleCategory::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_designer_titles_classify_as_design() {
        for title in ["Graphic Designer", "Concept Artist", "Creative Lead"] {
            assert_eq!(classify_role(title, &[]), RoleCategory::Design, "{title}");
        }
    }

    #[test]
    fn test_software_developer_classifies_as_development() {
        let category = classify_role("Software Developer", &skills(&["javascript", "react"]));
        assert_eq!(category, RoleCategory::Development);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify_role("SENIOR UX DESIGNER", &[]), RoleCategory::Design);
    }

    #[test]
    fn test_skill_keywords_alone_can_classify() {
        // No title keyword, but a development skill keyword
        let category = classify_role("Freelancer", &skills(&["Python"]));
        assert_eq!(category, RoleCategory::Development);
    }

    #[test]
    fn test_empty_profile_falls_through_to_generic() {
        assert_eq!(classify_role("", &[]), RoleCategory::Generic);
    }

    #[test]
    fn test_unknown_role_falls_through_to_generic() {
        let category = classify_role("Deep Sea Welder", &skills(&["underwater welding"]));
        assert_eq!(category, RoleCategory::Generic);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // "Design Manager" matches both design and management; design is
        // declared first and must win.
        assert_eq!(classify_role("Design Manager", &[]), RoleCategory::Design);
        // "Engineering Manager" matches development before management.
        assert_eq!(
            classify_role("Engineering Manager", &[]),
            RoleCategory::Development
        );
    }

    #[test]
    fn test_analyst_and_manager_buckets() {
        assert_eq!(classify_role("Business Analyst", &[]), RoleCategory::Analysis);
        assert_eq!(
            classify_role("Operations Manager", &[]),
            RoleCategory::Management
        );
    }

    #[test]
    fn test_category_tags_serialize_snake_case() {
        let json = serde_json::to_string(&RoleCategory::Development).unwrap();
        assert_eq!(json, r#""development""#);
        assert_eq!(RoleCategory::Generic.as_str(), "generic");
    }
}
