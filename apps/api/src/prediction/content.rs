//! Bucket Content Table — the static narrative payload and risk constants for
//! each role category.
//!
//! Risk is a two-tier discrete value per bucket: `baseline_risk`, or
//! `lowered_risk` when the profile already lists an AI-adjacent tool from the
//! bucket's familiarity list. `Generic` is the guaranteed fallback and carries
//! a fixed risk of 35 on both tiers.

use crate::prediction::classifier::RoleCategory;

/// Static content for one category bucket.
pub struct BucketContent {
    pub impact: &'static str,
    pub immediate_threats: &'static [&'static str],
    pub long_term_opportunities: &'static [&'static str],
    pub skill_gaps: &'static [&'static str],
    pub market_shifts: &'static [&'static str],
    pub strategic_advantages: &'static [&'static str],
    pub actions: &'static [&'static str],
    pub opportunities: &'static [&'static str],
    pub timeframe: &'static str,
    pub baseline_risk: i32,
    pub lowered_risk: i32,
    /// Skill substrings that signal existing AI-tool familiarity and select
    /// the lowered risk tier.
    pub ai_tool_skills: &'static [&'static str],
}

const DESIGN: BucketContent = BucketContent {
    impact: "Generative image tools now produce first drafts in seconds, shifting the value of design work from production toward direction, taste, and client understanding.",
    immediate_threats: &[
        "Clients generating logo and illustration drafts directly with image models",
        "Stock asset marketplaces flooded with cheap AI-generated alternatives",
        "Shrinking budgets for routine production design work",
    ],
    long_term_opportunities: &[
        "Creative direction roles curating and refining AI output",
        "Brand systems design that AI tools cannot hold consistent on their own",
        "Prompt-driven rapid prototyping as a premium client service",
        "Accessibility and inclusive design review of generated assets",
    ],
    skill_gaps: &[
        "Prompt craft for image generation models",
        "AI-assisted workflow integration (Figma plugins, batch generation)",
        "Art direction and critique vocabulary for steering model output",
    ],
    market_shifts: &[
        "Entry-level production design roles consolidating",
        "Demand rising for designers who can direct AI pipelines end to end",
        "Portfolio expectations moving from artifacts to documented process",
    ],
    strategic_advantages: &[
        "Human taste and brand judgment remain the differentiator",
        "Client relationships and brief interpretation resist automation",
        "Existing visual craft accelerates quality control of AI output",
    ],
    actions: &[
        "Learn one generative image tool deeply and fold it into your workflow",
        "Reposition your portfolio around direction and process, not just output",
        "Offer AI-accelerated concepting as an explicit service tier",
        "Build a critique checklist for reviewing generated assets",
    ],
    opportunities: &[
        "AI art direction",
        "Design systems stewardship",
        "Rapid prototyping services",
    ],
    timeframe: "1-2 years",
    baseline_risk: 65,
    lowered_risk: 50,
    ai_tool_skills: &["midjourney", "dall-e", "stable diffusion", "generative", "ai"],
};

const DEVELOPMENT: BucketContent = BucketContent {
    impact: "Code assistants are absorbing boilerplate and routine implementation, concentrating value in system design, review judgment, and problem framing.",
    immediate_threats: &[
        "Autocomplete-level coding tasks losing billable value",
        "Smaller teams shipping the same scope with assistant tooling",
        "Interview processes de-weighting rote syntax knowledge",
    ],
    long_term_opportunities: &[
        "Architecting systems that embed AI components safely",
        "Reviewing and hardening AI-generated code at scale",
        "Building internal tooling and agent workflows for your team",
        "Specializing in domains where correctness is non-negotiable",
    ],
    skill_gaps: &[
        "Effective pairing with code assistants (prompting, scoping, review)",
        "Evaluation and testing of model-generated changes",
        "LLM API integration patterns and failure handling",
    ],
    market_shifts: &[
        "Junior hiring bar moving toward debugging and review skills",
        "AI-integration experience appearing in most senior job postings",
        "Productivity expectations rising faster than headcount",
    ],
    strategic_advantages: &[
        "Deep debugging and systems knowledge compounds with AI speed",
        "Domain expertise makes you the reviewer AI output must pass",
        "Existing engineering rigor transfers directly to AI-assisted work",
    ],
    actions: &[
        "Adopt a code assistant daily and learn where it fails",
        "Practice reviewing generated code as a first-class skill",
        "Ship one project that integrates an LLM API end to end",
        "Document productivity wins to anchor your market value",
    ],
    opportunities: &[
        "AI systems integration",
        "Code review and reliability engineering",
        "Internal tooling and automation",
    ],
    timeframe: "2-4 years",
    baseline_risk: 30,
    lowered_risk: 20,
    ai_tool_skills: &["ai", "machine learning", "copilot", "chatgpt", "claude"],
};

const WRITING: BucketContent = BucketContent {
    impact: "Language models generate competent commodity copy instantly, pushing paid writing toward reported, expert, and voice-driven work that models cannot source.",
    immediate_threats: &[
        "Commodity content briefs moving to in-house AI generation",
        "Content farms undercutting rates with edited model output",
        "SEO-driven publishing volumes decoupling from writer headcount",
    ],
    long_term_opportunities: &[
        "Editorial direction and quality control over AI-drafted content",
        "Original reporting and interviews as defensible inputs",
        "Brand voice development and governance",
        "Prompt and style-guide engineering for content teams",
    ],
    skill_gaps: &[
        "AI-assisted drafting and revision workflows",
        "Fact-checking and provenance discipline for generated text",
        "Content strategy beyond per-piece production",
    ],
    market_shifts: &[
        "Per-word pricing collapsing for generic content",
        "Editors outnumbering staff writers in content orgs",
        "Bylines and demonstrated expertise gaining market weight",
    ],
    strategic_advantages: &[
        "Access to sources and original material models cannot fabricate",
        "A recognizable voice is a moat commodity output lacks",
        "Editorial judgment transfers directly to supervising AI drafts",
    ],
    actions: &[
        "Move your positioning from production to editorial judgment",
        "Build a portfolio of reported or expert-sourced pieces",
        "Learn AI drafting tools well enough to set team standards",
        "Develop a niche where your expertise is the product",
    ],
    opportunities: &[
        "Editorial direction",
        "Specialist and reported writing",
        "Content strategy",
    ],
    timeframe: "1-2 years",
    baseline_risk: 70,
    lowered_risk: 55,
    ai_tool_skills: &["chatgpt", "claude", "ai", "prompt"],
};

const TEACHING: BucketContent = BucketContent {
    impact: "AI tutors handle drill and explanation on demand, while the human work of motivation, mentorship, and classroom judgment becomes the visible core of teaching.",
    immediate_threats: &[
        "Students outsourcing homework and essays to chatbots",
        "Tutoring platforms substituting AI for entry-level tutors",
        "Content preparation time no longer differentiating teachers",
    ],
    long_term_opportunities: &[
        "Designing AI-augmented curricula and assessments",
        "Coaching and mentorship roles AI cannot credibly fill",
        "Teaching AI literacy itself as a core subject",
        "Personalized learning facilitation using AI diagnostics",
    ],
    skill_gaps: &[
        "AI-resistant assessment design",
        "Classroom policies and pedagogy for AI tool use",
        "EdTech platform fluency",
    ],
    market_shifts: &[
        "Institutions budgeting for AI tutoring alongside staff",
        "Assessment redesign becoming a district-level priority",
        "Demand growing for educators who can train peers on AI",
    ],
    strategic_advantages: &[
        "Relationships and motivation are the hardest part to automate",
        "Classroom judgment about individual learners resists modeling",
        "Subject expertise positions you to catch AI errors students miss",
    ],
    actions: &[
        "Redesign key assessments to be AI-resistant or AI-inclusive",
        "Pilot an AI tutor as a supplement and document what works",
        "Become the AI-policy voice in your department",
        "Invest in mentorship-heavy responsibilities",
    ],
    opportunities: &[
        "AI literacy instruction",
        "Curriculum design",
        "Learning facilitation and coaching",
    ],
    timeframe: "3-5 years",
    baseline_risk: 40,
    lowered_risk: 30,
    ai_tool_skills: &["ai", "chatgpt", "edtech"],
};

const MARKETING: BucketContent = BucketContent {
    impact: "Campaign copy, variants, and targeting are increasingly machine-generated, moving marketing value toward strategy, brand stewardship, and measurement.",
    immediate_threats: &[
        "Ad copy and creative variant production fully automated",
        "Clients expecting AI-speed turnaround at AI-level prices",
        "Generic campaign management absorbed by platform automation",
    ],
    long_term_opportunities: &[
        "Brand strategy and positioning work above the tooling layer",
        "Marketing-mix measurement and experimentation design",
        "Orchestrating AI content pipelines with human review gates",
        "Community and partnership channels automation cannot run",
    ],
    skill_gaps: &[
        "AI content tooling and workflow orchestration",
        "First-party data strategy and analytics",
        "Experiment design and incrementality measurement",
    ],
    market_shifts: &[
        "Execution-only agency work commoditizing rapidly",
        "In-house teams shrinking production and growing strategy roles",
        "Attribution and measurement skills commanding premiums",
    ],
    strategic_advantages: &[
        "Customer insight and positioning instinct resist automation",
        "Cross-channel judgment is still a human integration task",
        "Existing brand relationships anchor retainers",
    ],
    actions: &[
        "Automate your own production work before clients ask",
        "Shift your offer toward strategy and measurement",
        "Build a case study showing AI-assisted campaign lift",
        "Deepen analytics skills beyond platform dashboards",
    ],
    opportunities: &[
        "Brand strategy",
        "Growth experimentation",
        "Marketing analytics",
    ],
    timeframe: "1-3 years",
    baseline_risk: 55,
    lowered_risk: 40,
    ai_tool_skills: &["ai", "chatgpt", "jasper", "automation"],
};

const ANALYSIS: BucketContent = BucketContent {
    impact: "Automated analysis tools generate queries, charts, and narratives from raw data, shifting analyst value toward problem framing, data quality, and decision influence.",
    immediate_threats: &[
        "Natural-language BI answering routine reporting questions",
        "Dashboard production and refresh work automated away",
        "Stakeholders self-serving answers that used to be tickets",
    ],
    long_term_opportunities: &[
        "Decision science roles framing the questions AI tools answer",
        "Data quality and governance ownership",
        "Auditing and validating AI-generated analyses",
        "Translating analysis into executive action",
    ],
    skill_gaps: &[
        "AI-assisted analysis tooling and its failure modes",
        "Causal inference beyond descriptive reporting",
        "Data storytelling for decision makers",
    ],
    market_shifts: &[
        "Report-factory analyst roles consolidating",
        "Analytics engineering and semantic-layer skills in demand",
        "Hybrid analyst-strategist roles emerging",
    ],
    strategic_advantages: &[
        "Business context turns raw answers into correct decisions",
        "Skepticism about data quality catches AI's confident errors",
        "SQL and statistics depth lets you verify what tools assert",
    ],
    actions: &[
        "Adopt an AI analysis assistant and benchmark it against your work",
        "Move up the stack from reporting to decision framing",
        "Own a data-quality or governance initiative",
        "Practice presenting recommendations, not just findings",
    ],
    opportunities: &[
        "Decision science",
        "Analytics engineering",
        "Data governance",
    ],
    timeframe: "2-3 years",
    baseline_risk: 60,
    lowered_risk: 45,
    ai_tool_skills: &["ai", "machine learning", "automl", "chatgpt"],
};

const MANAGEMENT: BucketContent = BucketContent {
    impact: "AI compresses the coordination and reporting load of management while raising the premium on judgment, team development, and change leadership.",
    immediate_threats: &[
        "Status reporting and meeting synthesis automated",
        "Flatter org structures reducing pure-coordination roles",
        "Middle layers squeezed as ICs self-serve with AI tools",
    ],
    long_term_opportunities: &[
        "Leading AI adoption and workflow redesign for your function",
        "Org design for human-AI hybrid teams",
        "Coaching and talent development as the core of the role",
        "Judgment-heavy escalation and stakeholder work",
    ],
    skill_gaps: &[
        "Working literacy in the AI tools your team uses",
        "Change management for AI-driven process shifts",
        "Outcome-based performance management",
    ],
    market_shifts: &[
        "Span of control widening with AI-assisted coordination",
        "AI transformation experience appearing in leadership postings",
        "Administrative management tracks shrinking",
    ],
    strategic_advantages: &[
        "Trust, conflict resolution, and motivation stay human work",
        "Cross-functional judgment integrates what AI fragments",
        "Team context makes you the arbiter of AI-suggested plans",
    ],
    actions: &[
        "Automate your own reporting before your org does it for you",
        "Lead a visible AI workflow pilot on your team",
        "Re-weight your calendar toward coaching and strategy",
        "Learn enough of your team's AI tooling to evaluate claims",
    ],
    opportunities: &[
        "AI transformation leadership",
        "Org design",
        "Executive coaching",
    ],
    timeframe: "3-5 years",
    baseline_risk: 25,
    lowered_risk: 20,
    ai_tool_skills: &["ai", "automation", "chatgpt"],
};

const GENERIC: BucketContent = BucketContent {
    impact: "AI will reshape parts of most knowledge work over the coming years; the safest position is early familiarity with the tools entering your field.",
    immediate_threats: &[
        "Routine, repeatable tasks in most roles becoming automatable",
        "Job postings increasingly listing AI tool familiarity",
        "Productivity expectations rising across knowledge work",
    ],
    long_term_opportunities: &[
        "Early adopters becoming the AI go-to person in their org",
        "New hybrid roles pairing domain knowledge with AI fluency",
        "Efficiency gains freeing time for higher-value work",
    ],
    skill_gaps: &[
        "General AI tool literacy (assistants, automation)",
        "Understanding which tasks in your role are exposed",
        "Communicating and evaluating AI-assisted work",
    ],
    market_shifts: &[
        "AI familiarity moving from differentiator to baseline",
        "Task-level automation arriving ahead of role-level change",
        "Continuous reskilling becoming a standing expectation",
    ],
    strategic_advantages: &[
        "Domain experience makes AI output usable and checkable",
        "Human judgment, relationships, and accountability persist",
        "Starting now puts you ahead of the median in any field",
    ],
    actions: &[
        "Inventory your weekly tasks for automation exposure",
        "Adopt one general-purpose AI assistant in daily work",
        "Follow AI developments specific to your industry",
        "Build a learning habit around one new tool per quarter",
    ],
    opportunities: &[
        "AI tool adoption leadership",
        "Process improvement",
        "Cross-functional upskilling",
    ],
    timeframe: "2-5 years",
    baseline_risk: 35,
    lowered_risk: 35,
    ai_tool_skills: &[],
};

/// Returns the content bucket for a category. Total over all categories —
/// `Generic` is a real entry, not an error path.
pub fn bucket_for(category: RoleCategory) -> &'static BucketContent {
    match category {
        RoleCategory::Design => &DESIGN,
        RoleCategory::Development => &DEVELOPMENT,
        RoleCategory::Writing => &WRITING,
        RoleCategory::Teaching => &TEACHING,
        RoleCategory::Marketing => &MARKETING,
        RoleCategory::Analysis => &ANALYSIS,
        RoleCategory::Management => &MANAGEMENT,
        RoleCategory::Generic => &GENERIC,
    }
}

/// Picks the risk tier for a category given the profile's skills.
///
/// The lowered tier applies when any skill contains a substring from the
/// bucket's AI-tool familiarity list.
pub fn risk_score_for(category: RoleCategory, skills: &[String]) -> i32 {
    let bucket = bucket_for(category);

    let has_ai_tooling = skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        bucket.ai_tool_skills.iter().any(|tool| skill.contains(tool))
    });

    if has_ai_tooling {
        bucket.lowered_risk
    } else {
        bucket.baseline_risk
    }
}
