//! Fallback/Aggregation Controller — drives the stages in strict sequence.
//!
//! Flow: parse_resume → derive_keywords → provider chain → score → rank.
//! An earlier-stage failure propagates upward; only the retrieval stage
//! substitutes fallbacks (that chain is owned by `providers`).

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::listing::JobListing;
use crate::pipeline::keywords::{derive_keywords, KeywordSet};
use crate::pipeline::resume_parser::{parse_resume, ParsedResume};
use crate::pipeline::scoring::apply_scores;
use crate::providers::{search_with_fallback, JobProvider};
use crate::state::AppState;

/// Ranked output is truncated to the top 10 listings.
pub const MAX_LISTINGS: usize = 10;

/// The combined payload returned to the caller.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub resume_analysis: ParsedResume,
    pub search_keywords: Vec<KeywordSet>,
    pub job_listings: Vec<JobListing>,
}

/// Runs the full pipeline over extracted resume text.
pub async fn run_pipeline(resume_text: &str, state: &AppState) -> Result<AnalysisResponse, AppError> {
    let resume = parse_resume(resume_text, &state.llm).await?;
    info!(
        "Resume parsed: {} skills, {} experience entries",
        resume.skills.len(),
        resume.experience.len()
    );

    let keyword_sets = derive_keywords(&resume, &state.llm).await?;
    info!("Derived {} keyword sets", keyword_sets.len());

    let job_listings = retrieve_and_rank(&state.providers, &keyword_sets).await;
    info!("Returning {} ranked listings", job_listings.len());

    Ok(AnalysisResponse {
        resume_analysis: resume,
        search_keywords: keyword_sets,
        job_listings,
    })
}

/// Retrieval + scoring + final ordering, separated from the LLM stages so it
/// can be exercised with mock providers.
pub async fn retrieve_and_rank(
    providers: &[Arc<dyn JobProvider>],
    sets: &[KeywordSet],
) -> Vec<JobListing> {
    let mut listings = search_with_fallback(providers, sets).await;
    apply_scores(&mut listings, sets);
    rank(listings)
}

/// Stable sort by descending score, truncated to the top 10. Stability keeps
/// provider order among ties, which matters for the synthetic path.
pub fn rank(mut listings: Vec<JobListing>) -> Vec<JobListing> {
    listings.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    listings.truncate(MAX_LISTINGS);
    listings
}
