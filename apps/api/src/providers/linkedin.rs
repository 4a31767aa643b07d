//! Secondary live provider — LinkedIn Jobs Search on RapidAPI.
//!
//! Same query cap, timeout, inter-call delay, and per-query tolerance as the
//! primary; consulted only when the primary's deduplicated result is empty.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::models::listing::{placeholder_logo, JobListing, ScoreKind, WorkMode};
use crate::pipeline::keywords::KeywordSet;
use crate::providers::{
    JobProvider, ProviderError, CALL_TIMEOUT, INTER_CALL_DELAY, MAX_KEYWORD_QUERIES,
    RESULTS_PER_QUERY,
};

const LINKEDIN_URL: &str = "https://linkedin-jobs-search.p.rapidapi.com/jobs";
const LINKEDIN_HOST: &str = "linkedin-jobs-search.p.rapidapi.com";

pub struct LinkedInProvider {
    client: Client,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct LinkedInQuery<'a> {
    search_terms: &'a str,
    location: &'a str,
    page: &'a str,
}

/// LinkedIn job record subset. The cleaned posting URL doubles as the stable
/// id for deduplication.
#[derive(Debug, Deserialize)]
struct LinkedInJob {
    linkedin_job_url_cleaned: Option<String>,
    job_title: Option<String>,
    company_name: Option<String>,
    company_logo_url: Option<String>,
    job_location: Option<String>,
    #[serde(default)]
    remote: bool,
    job_description: Option<String>,
    posted_date: Option<String>,
}

impl LinkedInProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    async fn query_one(
        &self,
        api_key: &str,
        set: &KeywordSet,
    ) -> Result<Vec<LinkedInJob>, ProviderError> {
        let location = set.locations.first().map(String::as_str).unwrap_or("");
        let response = self
            .client
            .post(LINKEDIN_URL)
            .timeout(CALL_TIMEOUT)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", LINKEDIN_HOST)
            .json(&LinkedInQuery {
                search_terms: &set.primary_keyword,
                location,
                page: "1",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl JobProvider for LinkedInProvider {
    fn name(&self) -> &'static str {
        "linkedin"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, sets: &[KeywordSet]) -> Result<Vec<JobListing>, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;

        let mut listings = Vec::new();
        for (i, set) in sets.iter().take(MAX_KEYWORD_QUERIES).enumerate() {
            if i > 0 {
                tokio::time::sleep(INTER_CALL_DELAY).await;
            }

            match self.query_one(api_key, set).await {
                Ok(jobs) => listings.extend(
                    jobs.into_iter()
                        .take(RESULTS_PER_QUERY)
                        .map(|j| normalize(j, set)),
                ),
                Err(e) => {
                    warn!(
                        "LinkedIn query for '{}' failed: {e}, continuing",
                        set.primary_keyword
                    );
                }
            }
        }

        Ok(listings)
    }
}

fn normalize(job: LinkedInJob, set: &KeywordSet) -> JobListing {
    let company = job.company_name.unwrap_or_else(|| "Unknown".to_string());
    let description = job.job_description.unwrap_or_default();
    let work_mode = WorkMode::infer(job.remote, &description);
    let url = job
        .linkedin_job_url_cleaned
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    JobListing {
        id: url.clone(),
        title: job
            .job_title
            .unwrap_or_else(|| set.primary_keyword.clone()),
        company_logo_url: job
            .company_logo_url
            .unwrap_or_else(|| placeholder_logo(&company)),
        company,
        location: job.job_location.unwrap_or_else(|| "Remote".to_string()),
        work_mode,
        apply_url: url,
        description_snippet: description.chars().take(280).collect(),
        match_score: 0,
        score_kind: ScoreKind::Live,
        posted_date: job.posted_date,
    }
}
