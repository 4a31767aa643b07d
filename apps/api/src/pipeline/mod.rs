//! The resume-to-jobs pipeline: structured parsing, keyword derivation,
//! match scoring, and the aggregation controller that sequences them.

pub mod aggregator;
pub mod keywords;
pub mod prompts;
pub mod resume_parser;
pub mod scoring;
