//! Structured Parser Stage — extracts a candidate profile from raw resume text.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::pipeline::prompts::{RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_SYSTEM};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Full structured output of resume parsing. `personal_info` is required;
/// list sections default to empty so a sparse but valid model response still
/// deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Parses resume text using the LLM and returns a structured `ParsedResume`.
/// Malformed output (after fence-strip recovery) surfaces as
/// `ModelOutputMalformed`; the stage never re-asks the model on its own.
pub async fn parse_resume(resume_text: &str, llm: &LlmClient) -> Result<ParsedResume, AppError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    llm.call_json::<ParsedResume>(&prompt, RESUME_PARSE_SYSTEM)
        .await
        .map_err(|e| match e {
            LlmError::Malformed { raw } => AppError::ModelOutputMalformed { raw },
            other => AppError::Llm(format!("Resume parsing failed: {other}")),
        })
}
