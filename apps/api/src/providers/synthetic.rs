//! Synthetic fallback generator — deterministic placeholder listings for when
//! no live provider yields results (missing credentials, total outage).
//!
//! Scores are a strictly decreasing sequence, not match scores: there is no
//! relevance signal here, and `ScoreKind::Synthetic` keeps the two scales
//! from being conflated downstream.

use async_trait::async_trait;
use chrono::Utc;

use crate::models::listing::{JobListing, ScoreKind, WorkMode};
use crate::pipeline::keywords::KeywordSet;
use crate::providers::{JobProvider, ProviderError};

/// At most this many synthetic listings, one per keyword set.
pub const MAX_SYNTHETIC_LISTINGS: usize = 5;
/// The documented descending score scale for fallback listings.
pub const SYNTHETIC_SCORES: [u32; MAX_SYNTHETIC_LISTINGS] = [85, 80, 75, 70, 65];

const COMPANIES: [&str; 8] = [
    "Google",
    "Microsoft",
    "Amazon",
    "Apple",
    "Meta",
    "Netflix",
    "IBM",
    "Salesforce",
];

const LOCATIONS: [&str; 5] = [
    "San Francisco, CA",
    "New York, NY",
    "Seattle, WA",
    "Austin, TX",
    "Remote",
];

const MODES: [WorkMode; 3] = [WorkMode::Remote, WorkMode::Hybrid, WorkMode::Onsite];

pub struct SyntheticProvider;

#[async_trait]
impl JobProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    /// Needs no credentials; this is what makes the chain total.
    fn is_configured(&self) -> bool {
        true
    }

    async fn search(&self, sets: &[KeywordSet]) -> Result<Vec<JobListing>, ProviderError> {
        Ok(generate_listings(sets))
    }
}

/// Derives `min(5, sets.len())` listings, cycling through the fixed
/// company/location/mode rotation. No randomness: the same keyword sets
/// always yield the same companies, scores, and ids. Only `posted_date`
/// varies — it is stamped with the generation day.
pub fn generate_listings(sets: &[KeywordSet]) -> Vec<JobListing> {
    sets.iter()
        .take(MAX_SYNTHETIC_LISTINGS)
        .enumerate()
        .map(|(i, set)| {
            let company = COMPANIES[i % COMPANIES.len()];
            JobListing {
                id: format!("synthetic-{}", i + 1),
                title: set.primary_keyword.clone(),
                company: company.to_string(),
                company_logo_url: clearbit_logo(company),
                location: LOCATIONS[i % LOCATIONS.len()].to_string(),
                work_mode: MODES[i % MODES.len()],
                apply_url: linkedin_search_url(&set.primary_keyword),
                description_snippet: format!(
                    "A great opportunity for a {} role at {}.",
                    set.primary_keyword, company
                ),
                match_score: SYNTHETIC_SCORES[i],
                score_kind: ScoreKind::Synthetic,
                posted_date: Some(Utc::now().format("%Y-%m-%d").to_string()),
            }
        })
        .collect()
}

fn clearbit_logo(company: &str) -> String {
    format!(
        "https://logo.clearbit.com/{}.com",
        company.to_lowercase().replace(' ', "")
    )
}

/// Apply link falls back to a LinkedIn keyword search, which always resolves.
fn linkedin_search_url(keyword: &str) -> String {
    format!(
        "https://www.linkedin.com/jobs/search/?keywords={}",
        keyword.replace(' ', "%20")
    )
}
