//! Match Scorer — keyword-overlap relevance score for live listings.
//!
//! Base 70, plus up to 25 proportional to the fraction of keyword terms found
//! in the listing's text surface, capped at 98. Synthetic listings keep the
//! descending scale they were generated with and are never rescored.

use crate::models::listing::{JobListing, ScoreKind};
use crate::pipeline::keywords::KeywordSet;

pub const BASE_SCORE: u32 = 70;
pub const MAX_LIVE_SCORE: u32 = 98;
const MATCH_BONUS_RANGE: f64 = 25.0;

/// The case-folded text a listing is matched against.
pub fn text_surface(listing: &JobListing) -> String {
    format!(
        "{} {} {}",
        listing.title, listing.description_snippet, listing.company
    )
    .to_lowercase()
}

/// Scores one listing surface against every term in every keyword set.
/// A term matches if it occurs as a case-folded substring.
pub fn score_listing(surface: &str, sets: &[KeywordSet]) -> u32 {
    let mut total = 0usize;
    let mut matched = 0usize;

    for set in sets {
        for term in std::iter::once(&set.primary_keyword).chain(set.related_terms.iter()) {
            // An empty term is a substring of everything; don't let it count.
            let term = term.trim();
            if term.is_empty() {
                continue;
            }
            total += 1;
            if surface.contains(&term.to_lowercase()) {
                matched += 1;
            }
        }
    }

    let match_rate = if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    };
    let bonus = (match_rate * MATCH_BONUS_RANGE).floor() as u32;

    (BASE_SCORE + bonus).min(MAX_LIVE_SCORE)
}

/// Fills in `match_score` for every live listing in place.
pub fn apply_scores(listings: &mut [JobListing], sets: &[KeywordSet]) {
    for listing in listings.iter_mut() {
        if listing.score_kind == ScoreKind::Live {
            listing.match_score = score_listing(&text_surface(listing), sets);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::WorkMode;
    use crate::pipeline::keywords::JobLevel;

    fn make_set(primary: &str, related: &[&str]) -> KeywordSet {
        KeywordSet {
            primary_keyword: primary.to_string(),
            related_terms: related.iter().map(|s| s.to_string()).collect(),
            job_level: JobLevel::Mid,
            locations: vec![],
        }
    }

    fn make_listing(title: &str, description: &str, kind: ScoreKind) -> JobListing {
        JobListing {
            id: "job-1".to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            company_logo_url: String::new(),
            location: "Remote".to_string(),
            work_mode: WorkMode::Remote,
            apply_url: String::new(),
            description_snippet: description.to_string(),
            match_score: 0,
            score_kind: kind,
            posted_date: None,
        }
    }

    #[test]
    fn test_zero_overlap_yields_base_score() {
        let sets = vec![make_set("Embedded Engineer", &["C++", "RTOS"])];
        let score = score_listing("marketing director at a retail chain", &sets);
        assert_eq!(score, BASE_SCORE);
    }

    #[test]
    fn test_no_terms_yields_base_score() {
        let score = score_listing("anything at all", &[]);
        assert_eq!(score, BASE_SCORE);
    }

    #[test]
    fn test_empty_terms_do_not_inflate_match_rate() {
        // "" and "  " would match any surface as substrings; they must be
        // excluded from both the matched and total counts.
        let sets = vec![make_set("cobol", &["", "  "])];
        assert_eq!(score_listing("rust services team", &sets), BASE_SCORE);

        // 1 matched of 1 counted term, not 3 of 3
        let sets = vec![make_set("rust", &["", "  "])];
        assert_eq!(score_listing("rust services team", &sets), 95);
    }

    #[test]
    fn test_all_terms_empty_yields_base_score() {
        let sets = vec![make_set("", &[""])];
        assert_eq!(score_listing("anything at all", &sets), BASE_SCORE);
    }

    #[test]
    fn test_full_overlap_yields_95() {
        let sets = vec![make_set("rust", &["tokio", "axum"])];
        let score = score_listing("senior rust engineer: tokio and axum services", &sets);
        assert_eq!(score, 95); // 70 + floor(1.0 * 25)
    }

    #[test]
    fn test_partial_overlap_floors_bonus() {
        // 1 of 3 terms → floor(25/3) = 8
        let sets = vec![make_set("rust", &["cobol", "fortran"])];
        let score = score_listing("rust developer wanted", &sets);
        assert_eq!(score, 78);
    }

    #[test]
    fn test_matching_is_case_folded() {
        let sets = vec![make_set("RUST", &[])];
        let listing = make_listing("Rust Engineer", "", ScoreKind::Live);
        let score = score_listing(&text_surface(&listing), &sets);
        assert_eq!(score, 95);
    }

    #[test]
    fn test_terms_span_all_sets() {
        let sets = vec![make_set("rust", &[]), make_set("go", &[])];
        // Both primaries match → full rate
        let score = score_listing("rust and go polyglot role", &sets);
        assert_eq!(score, 95);
    }

    #[test]
    fn test_score_always_within_live_bounds() {
        let sets = vec![make_set("a", &["b", "c", "d"])];
        for surface in ["", "a", "a b", "a b c d"] {
            let score = score_listing(surface, &sets);
            assert!((BASE_SCORE..=MAX_LIVE_SCORE).contains(&score));
        }
    }

    #[test]
    fn test_apply_scores_skips_synthetic() {
        let sets = vec![make_set("rust", &[])];
        let mut listings = vec![
            make_listing("Rust Engineer", "", ScoreKind::Live),
            {
                let mut l = make_listing("Rust Engineer", "", ScoreKind::Synthetic);
                l.match_score = 85;
                l
            },
        ];

        apply_scores(&mut listings, &sets);

        assert_eq!(listings[0].match_score, 95);
        assert_eq!(listings[1].match_score, 85); // untouched
    }

    #[test]
    fn test_text_surface_includes_title_description_company() {
        let listing = make_listing("Platform Lead", "Owns the deploy tooling", ScoreKind::Live);
        let surface = text_surface(&listing);
        assert!(surface.contains("platform lead"));
        assert!(surface.contains("deploy tooling"));
        assert!(surface.contains("acme"));
    }
}
