//! Wire contract for the trade-license compatibility service
//!
//! Mirrors the external validate endpoint exactly; the portal only adds
//! the two fixed license profiles whose narrative prompts are sent as the
//! candidate business activities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityRequest {
    pub trade_name: String,
    pub business_activities: Vec<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub enable_llm_judge: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_judge_threshold: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityMatch {
    pub activity_description: String,
    pub compatibility_score: f64,
    pub is_consistent: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompatibilityResponse {
    pub trade_name: String,
    pub language: String,
    pub results: Vec<ActivityMatch>,
    pub total_activities: u32,
    pub consistent_activities: u32,
    pub inconsistent_activities: u32,
    pub threshold_used: f64,
}

/// A license type the portal can evaluate a trade name against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    /// Narrative activity description sent to the evaluator; response
    /// items are matched back by exact equality on this string
    pub activity_prompt: &'static str,
}

/// The two fixed license profiles shown in the licensing focus view
pub fn license_profiles() -> &'static [LicenseProfile] {
    &[
        LicenseProfile {
            id: "commercial",
            name: "Commercial License",
            summary: "Mainland license for operating the restaurant directly in Abu Dhabi.",
            activity_prompt: "Operate a full-service restaurant on the Abu Dhabi mainland \
                 serving prepared food and beverages for dine-in guests, including charcoal \
                 BBQ preparation and hospitality catering services.",
        },
        LicenseProfile {
            id: "dual",
            name: "Dual License",
            summary: "Combined mainland and free-zone license for branch expansion.",
            activity_prompt: "Operate a restaurant brand under a dual license combining an \
                 Abu Dhabi free-zone establishment with a mainland branch, covering food \
                 service, catering contracts, and retail of packaged house products.",
        },
    ]
}

/// Build the validate request for a trade name: both fixed prompts,
/// English, with the LLM judge enabled.
pub fn build_request(trade_name: &str) -> CompatibilityRequest {
    CompatibilityRequest {
        trade_name: trade_name.to_string(),
        business_activities: license_profiles()
            .iter()
            .map(|profile| profile.activity_prompt.to_string())
            .collect(),
        language: "english".to_string(),
        threshold: None,
        enable_llm_judge: true,
        llm_judge_threshold: None,
    }
}
