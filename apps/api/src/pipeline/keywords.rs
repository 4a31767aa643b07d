//! Keyword Derivation Stage — turns a parsed resume into 5–7 ordered
//! search-keyword sets. Pure with respect to the parser stage: it only sees
//! the serialized structure, so it tests with canned fixtures.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::pipeline::prompts::{KEYWORDS_PROMPT_TEMPLATE, KEYWORDS_SYSTEM};
use crate::pipeline::resume_parser::ParsedResume;

pub const MIN_KEYWORD_SETS: usize = 5;
pub const MAX_KEYWORD_SETS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    Entry,
    Mid,
    Senior,
}

/// One derived search-term bundle used to query job-search providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSet {
    pub primary_keyword: String,
    #[serde(default)]
    pub related_terms: Vec<String>,
    pub job_level: JobLevel,
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct KeywordPlan {
    keyword_sets: Vec<KeywordSet>,
}

/// Derives the ordered keyword-set list from a parsed resume.
pub async fn derive_keywords(
    resume: &ParsedResume,
    llm: &LlmClient,
) -> Result<Vec<KeywordSet>, AppError> {
    let resume_data = serde_json::to_string(resume)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize ParsedResume: {e}")))?;
    let prompt = KEYWORDS_PROMPT_TEMPLATE.replace("{resume_data}", &resume_data);

    let plan = llm
        .call_json::<KeywordPlan>(&prompt, KEYWORDS_SYSTEM)
        .await
        .map_err(|e| match e {
            LlmError::Malformed { raw } => AppError::ModelOutputMalformed { raw },
            other => AppError::Llm(format!("Keyword derivation failed: {other}")),
        })?;

    validate_keyword_sets(plan.keyword_sets)
}

/// Bounds the stage output: fewer than 5 sets means the model ignored the
/// contract and the output is rejected; more than 7 are silently truncated.
fn validate_keyword_sets(mut sets: Vec<KeywordSet>) -> Result<Vec<KeywordSet>, AppError> {
    if sets.len() < MIN_KEYWORD_SETS {
        return Err(AppError::ModelOutputMalformed {
            raw: format!(
                "keyword stage returned {} sets, expected {MIN_KEYWORD_SETS}-{MAX_KEYWORD_SETS}",
                sets.len()
            ),
        });
    }
    sets.truncate(MAX_KEYWORD_SETS);
    Ok(sets)
}
