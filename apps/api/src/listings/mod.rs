//! Internship scraping and local job-listing matching.
//!
//! `fetcher` knows how to read the internship site's listing page;
//! `matcher` filters the local CSV of job listings. Both cap their
//! results at 10 entries in source order.

pub mod fetcher;
pub mod matcher;

pub use fetcher::{FetchOutcome, InternshipRecord, ListingFetcher};
pub use matcher::suggest_jobs;
