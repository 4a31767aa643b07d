//! Canonical, provider-agnostic job listing shape returned to callers.
//!
//! Every provider normalizes its own wire format into `JobListing`; nothing
//! downstream of the retrieval stage knows which provider a listing came from
//! except through `score_kind`.

use serde::{Deserialize, Serialize};

/// Work arrangement, inferred during normalization when the provider does not
/// state it outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkMode {
    /// Inference order: explicit remote flag wins, then a case-insensitive
    /// "hybrid" scan of the description, else onsite.
    pub fn infer(is_remote: bool, description: &str) -> Self {
        if is_remote {
            WorkMode::Remote
        } else if description.to_lowercase().contains("hybrid") {
            WorkMode::Hybrid
        } else {
            WorkMode::Onsite
        }
    }
}

/// Distinguishes real relevance scores from the synthetic descending scale.
/// The two use the same field but unrelated formulas; conflating them would
/// make fallback listings look comparably ranked against live ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Live,
    Synthetic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    /// Provider-assigned id, unique within one response batch.
    pub id: String,
    pub title: String,
    pub company: String,
    pub company_logo_url: String,
    pub location: String,
    pub work_mode: WorkMode,
    pub apply_url: String,
    pub description_snippet: String,
    /// Live listings: [70, 98] from the match scorer. Synthetic listings:
    /// the fixed descending sequence assigned at generation time.
    pub match_score: u32,
    pub score_kind: ScoreKind,
    pub posted_date: Option<String>,
}

/// Placeholder logo keyed by the company's first character, for providers
/// that omit one.
pub fn placeholder_logo(company: &str) -> String {
    let initial = company.chars().next().unwrap_or('?');
    format!("https://ui-avatars.com/api/?name={initial}&background=random")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_mode_remote_flag_wins() {
        assert_eq!(
            WorkMode::infer(true, "This hybrid role is on-site"),
            WorkMode::Remote
        );
    }

    #[test]
    fn test_work_mode_hybrid_substring_case_insensitive() {
        assert_eq!(
            WorkMode::infer(false, "We offer a HYBRID schedule"),
            WorkMode::Hybrid
        );
    }

    #[test]
    fn test_work_mode_defaults_to_onsite() {
        assert_eq!(
            WorkMode::infer(false, "Standard office position"),
            WorkMode::Onsite
        );
    }

    #[test]
    fn test_work_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WorkMode::Remote).unwrap(), "\"remote\"");
        assert_eq!(serde_json::to_string(&WorkMode::Onsite).unwrap(), "\"onsite\"");
    }

    #[test]
    fn test_score_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ScoreKind::Live).unwrap(), "\"live\"");
        assert_eq!(
            serde_json::to_string(&ScoreKind::Synthetic).unwrap(),
            "\"synthetic\""
        );
    }

    #[test]
    fn test_placeholder_logo_uses_company_initial() {
        let url = placeholder_logo("Acme Corp");
        assert!(url.contains("name=A"));
    }

    #[test]
    fn test_placeholder_logo_empty_company() {
        let url = placeholder_logo("");
        assert!(url.contains("name=?"));
    }
}
