//! Job Retrieval — multi-provider search with a strict fallback chain.
//!
//! Providers are an ordered strategy list, not a hierarchy: each exposes the
//! same `search` capability and the chain walks the list until one yields a
//! non-empty deduplicated result. The synthetic provider sits last and is
//! always configured, so a well-formed request never comes back empty.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::listing::JobListing;
use crate::pipeline::keywords::KeywordSet;

pub mod jsearch;
pub mod linkedin;
pub mod synthetic;

pub use jsearch::JSearchProvider;
pub use linkedin::LinkedInProvider;
pub use synthetic::SyntheticProvider;

/// Live providers query at most this many keyword sets per request, to bound
/// call volume and rate-limit exposure.
pub const MAX_KEYWORD_QUERIES: usize = 3;
/// Top-N records kept from each individual provider query.
pub const RESULTS_PER_QUERY: usize = 5;
/// Per-call timeout for external job-search requests.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(10);
/// Fixed delay between consecutive calls to the same provider.
pub const INTER_CALL_DELAY: Duration = Duration::from_millis(500);

/// Provider-local failures. Always recovered inside the chain; never surfaced
/// to the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(u16),

    #[error("Provider credential not configured")]
    NotConfigured,
}

/// One job-search source. Implementations normalize their own wire format
/// into the canonical `JobListing` shape.
#[async_trait]
pub trait JobProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this provider has the credentials it needs. Unconfigured
    /// providers are skipped by the chain without being called.
    fn is_configured(&self) -> bool;

    async fn search(&self, sets: &[KeywordSet]) -> Result<Vec<JobListing>, ProviderError>;
}

/// Deduplicates by listing id; the first occurrence wins, later duplicates
/// are discarded. Order is otherwise preserved.
pub fn dedup_by_id(listings: Vec<JobListing>) -> Vec<JobListing> {
    let mut seen = HashSet::new();
    listings
        .into_iter()
        .filter(|l| seen.insert(l.id.clone()))
        .collect()
}

/// Walks the provider list in order and returns the first non-empty
/// deduplicated result. Individual provider failures degrade to the next
/// provider. An empty return is possible only with an empty provider list.
pub async fn search_with_fallback(
    providers: &[Arc<dyn JobProvider>],
    sets: &[KeywordSet],
) -> Vec<JobListing> {
    for provider in providers {
        if !provider.is_configured() {
            debug!("Provider '{}' not configured, skipping", provider.name());
            continue;
        }

        match provider.search(sets).await {
            Ok(listings) => {
                let deduped = dedup_by_id(listings);
                if deduped.is_empty() {
                    info!(
                        "Provider '{}' returned no listings, falling back",
                        provider.name()
                    );
                    continue;
                }
                info!(
                    "Provider '{}' returned {} listings",
                    provider.name(),
                    deduped.len()
                );
                return deduped;
            }
            Err(e) => {
                warn!("Provider '{}' failed: {e}, falling back", provider.name());
            }
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{ScoreKind, WorkMode};
    use crate::pipeline::keywords::JobLevel;

    fn make_listing(id: &str, title: &str) -> JobListing {
        JobListing {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            company_logo_url: String::new(),
            location: "Remote".to_string(),
            work_mode: WorkMode::Remote,
            apply_url: String::new(),
            description_snippet: String::new(),
            match_score: 0,
            score_kind: ScoreKind::Live,
            posted_date: None,
        }
    }

    fn make_sets(n: usize) -> Vec<KeywordSet> {
        (0..n)
            .map(|i| KeywordSet {
                primary_keyword: format!("role {i}"),
                related_terms: vec![],
                job_level: JobLevel::Mid,
                locations: vec![],
            })
            .collect()
    }

    struct FixedProvider(Vec<JobListing>);

    #[async_trait]
    impl JobProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn is_configured(&self) -> bool {
            true
        }
        async fn search(&self, _sets: &[KeywordSet]) -> Result<Vec<JobListing>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl JobProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }
        fn is_configured(&self) -> bool {
            true
        }
        async fn search(&self, _sets: &[KeywordSet]) -> Result<Vec<JobListing>, ProviderError> {
            Err(ProviderError::Status(504))
        }
    }

    struct UnconfiguredProvider;

    #[async_trait]
    impl JobProvider for UnconfiguredProvider {
        fn name(&self) -> &'static str {
            "unconfigured"
        }
        fn is_configured(&self) -> bool {
            false
        }
        async fn search(&self, _sets: &[KeywordSet]) -> Result<Vec<JobListing>, ProviderError> {
            panic!("unconfigured provider must never be called")
        }
    }

    #[test]
    fn test_dedup_first_seen_wins() {
        let listings = vec![
            make_listing("a", "first a"),
            make_listing("b", "only b"),
            make_listing("a", "second a"),
        ];
        let deduped = dedup_by_id(listings);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "first a");
        assert_eq!(deduped[1].id, "b");
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let listings = vec![make_listing("a", "a"), make_listing("a", "a")];
        let once = dedup_by_id(listings);
        let twice = dedup_by_id(once.clone());
        assert_eq!(once.len(), 1);
        assert_eq!(twice.len(), 1);
    }

    #[tokio::test]
    async fn test_first_nonempty_provider_wins() {
        let providers: Vec<Arc<dyn JobProvider>> = vec![
            Arc::new(FixedProvider(vec![make_listing("p1", "primary")])),
            Arc::new(FixedProvider(vec![make_listing("p2", "secondary")])),
        ];
        let result = search_with_fallback(&providers, &make_sets(3)).await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p1");
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_next_provider() {
        let providers: Vec<Arc<dyn JobProvider>> = vec![
            Arc::new(FailingProvider),
            Arc::new(FixedProvider(vec![make_listing("p2", "secondary")])),
        ];
        let result = search_with_fallback(&providers, &make_sets(3)).await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p2");
    }

    #[tokio::test]
    async fn test_empty_result_falls_back() {
        let providers: Vec<Arc<dyn JobProvider>> = vec![
            Arc::new(FixedProvider(vec![])),
            Arc::new(FixedProvider(vec![make_listing("p2", "secondary")])),
        ];
        let result = search_with_fallback(&providers, &make_sets(3)).await;
        assert_eq!(result[0].id, "p2");
    }

    #[tokio::test]
    async fn test_unconfigured_provider_is_skipped_not_called() {
        let providers: Vec<Arc<dyn JobProvider>> = vec![
            Arc::new(UnconfiguredProvider),
            Arc::new(FixedProvider(vec![make_listing("p2", "secondary")])),
        ];
        let result = search_with_fallback(&providers, &make_sets(3)).await;
        assert_eq!(result[0].id, "p2");
    }

    #[tokio::test]
    async fn test_chain_dedups_provider_output() {
        let providers: Vec<Arc<dyn JobProvider>> = vec![Arc::new(FixedProvider(vec![
            make_listing("a", "first"),
            make_listing("a", "dup"),
        ]))];
        let result = search_with_fallback(&providers, &make_sets(3)).await;
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_all_providers_exhausted_yields_empty() {
        let providers: Vec<Arc<dyn JobProvider>> =
            vec![Arc::new(FailingProvider), Arc::new(FixedProvider(vec![]))];
        let result = search_with_fallback(&providers, &make_sets(3)).await;
        assert!(result.is_empty());
    }
}
