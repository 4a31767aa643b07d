//! Primary live provider — JSearch on RapidAPI.
//!
//! One GET per keyword set (capped at the first 3), recent postings only,
//! normalized into the canonical listing shape. Any single query failing is
//! logged and skipped; the stage carries on with the next keyword set.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::models::listing::{placeholder_logo, JobListing, ScoreKind, WorkMode};
use crate::pipeline::keywords::KeywordSet;
use crate::providers::{
    JobProvider, ProviderError, CALL_TIMEOUT, INTER_CALL_DELAY, MAX_KEYWORD_QUERIES,
    RESULTS_PER_QUERY,
};

const JSEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
/// Full-time, part-time, and contract — the three employment types queried.
const EMPLOYMENT_TYPES: &str = "FULLTIME,PARTTIME,CONTRACTOR";

pub struct JSearchProvider {
    client: Client,
    api_key: Option<String>,
}

/// The subset of the JSearch job record this service consumes. Everything is
/// optional on the wire; normalization fills documented defaults.
#[derive(Debug, Deserialize)]
struct JSearchJob {
    job_id: Option<String>,
    job_title: Option<String>,
    employer_name: Option<String>,
    employer_logo: Option<String>,
    job_city: Option<String>,
    job_country: Option<String>,
    #[serde(default)]
    job_is_remote: bool,
    job_apply_link: Option<String>,
    job_description: Option<String>,
    job_posted_at_datetime_utc: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JSearchResponse {
    #[serde(default)]
    data: Vec<JSearchJob>,
}

impl JSearchProvider {
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
    ) -> Result<Vec<JSearchJob>, ProviderError> {
        let query = build_query(set);
        let response = self
            .client
            .get(JSEARCH_URL)
            .timeout(CALL_TIMEOUT)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", JSEARCH_HOST)
            .query(&[
                ("query", query.as_str()),
                ("page", "1"),
                ("num_pages", "1"),
                ("date_posted", "week"),
                ("employment_types", EMPLOYMENT_TYPES),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: JSearchResponse = response.json().await?;
        Ok(body.data)
    }
}

#[async_trait]
impl JobProvider for JSearchProvider {
    fn name(&self) -> &'static str {
        "jsearch"
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
                        "JSearch query for '{}' failed: {e}, continuing",
                        set.primary_keyword
                    );
                }
            }
        }

        Ok(listings)
    }
}

/// Search string: primary keyword plus its related terms, which JSearch
/// treats as free-text relevance hints.
fn build_query(set: &KeywordSet) -> String {
    if set.related_terms.is_empty() {
        set.primary_keyword.clone()
    } else {
        format!("{} {}", set.primary_keyword, set.related_terms.join(" "))
    }
}

fn normalize(job: JSearchJob, set: &KeywordSet) -> JobListing {
    let company = job.employer_name.unwrap_or_else(|| "Unknown".to_string());
    let description = job.job_description.unwrap_or_default();
    let work_mode = WorkMode::infer(job.job_is_remote, &description);

    let location = match (job.job_city, job.job_country) {
        (Some(city), Some(country)) => format!("{city}, {country}"),
        (Some(city), None) => city,
        (None, Some(country)) => country,
        (None, None) => "Remote".to_string(),
    };

    JobListing {
        id: job.job_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        title: job
            .job_title
            .unwrap_or_else(|| set.primary_keyword.clone()),
        company_logo_url: job
            .employer_logo
            .unwrap_or_else(|| placeholder_logo(&company)),
        company,
        location,
        work_mode,
        apply_url: job.job_apply_link.unwrap_or_default(),
        description_snippet: snippet(&description),
        match_score: 0,
        score_kind: ScoreKind::Live,
        posted_date: job.job_posted_at_datetime_utc,
    }
}

/// Listings carry only the head of the description.
fn snippet(description: &str) -> String {
    const MAX_SNIPPET: usize = 280;
    if description.chars().count() <= MAX_SNIPPET {
        description.to_string()
    } else {
        let head: String = description.chars().take(MAX_SNIPPET).collect();
        format!("{head}…")
    }
}
