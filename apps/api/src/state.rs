use crate::config::Config;
use crate::listings::ListingFetcher;
use crate::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup; requests share
/// no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled skill matcher built from the configured vocabulary.
    pub vocabulary: SkillVocabulary,
    /// Outbound HTTP client and scrape selectors for the internship site.
    pub fetcher: ListingFetcher,
}
