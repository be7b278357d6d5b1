//! Listing Fetcher — the single point of entry for outbound HTTP.
//!
//! One best-effort GET against the internship site, parsed with fixed
//! CSS selectors. Scrape failures never propagate to callers: a broken
//! item is skipped, a broken fetch collapses to `FetchOutcome::Failed`,
//! and the page renders an empty list either way.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Listings beyond the first 10 containers are never parsed.
const MAX_LISTINGS: usize = 10;
const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// One scraped internship posting. `company` is absent when the site
/// omits the company anchor; the renderer drops the line rather than
/// showing a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternshipRecord {
    pub title: String,
    pub company: Option<String>,
    pub link: String,
}

/// Three-way result of one scrape attempt.
///
/// `Failed` carries a reason for logging only — callers collapse it to an
/// empty list, so "fetch failed" and "no matches" look the same on the
/// page but stay distinguishable in logs and tests.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Every container parsed cleanly (possibly zero of them).
    Success(Vec<InternshipRecord>),
    /// Some containers were missing expected elements and were skipped.
    Partial {
        listings: Vec<InternshipRecord>,
        skipped: usize,
    },
    /// The fetch itself failed: unreachable host, error status, unreadable body.
    Failed(String),
}

impl FetchOutcome {
    /// Collapses the outcome to the lenient empty-list behavior the page shows.
    pub fn into_listings(self) -> Vec<InternshipRecord> {
        match self {
            FetchOutcome::Success(listings) => listings,
            FetchOutcome::Partial { listings, .. } => listings,
            FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

#[derive(Clone)]
struct ListingSelectors {
    container: Selector,
    title: Selector,
    company: Selector,
    anchor: Selector,
}

impl ListingSelectors {
    fn new() -> Self {
        // Static selectors; parse failures are programmer errors.
        Self {
            container: Selector::parse("div.internship_meta").expect("container selector"),
            title: Selector::parse("h3").expect("title selector"),
            company: Selector::parse("a.link_display_like_text").expect("company selector"),
            anchor: Selector::parse("a").expect("anchor selector"),
        }
    }
}

/// Scrapes the internship site's keyword-search page.
/// Constructed once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct ListingFetcher {
    client: reqwest::Client,
    base_url: String,
    selectors: ListingSelectors,
}

impl ListingFetcher {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            selectors: ListingSelectors::new(),
        }
    }

    /// Builds the search URL for a free-text query: spaces become hyphens
    /// inside the fixed keyword path.
    pub fn listing_url(&self, query: &str) -> String {
        format!(
            "{}/internships/keywords-{}",
            self.base_url,
            query.replace(' ', "-")
        )
    }

    /// Fetches and parses listings for `query`. Never returns an error:
    /// any fetch-level failure becomes `FetchOutcome::Failed`.
    pub async fn fetch(&self, query: &str) -> FetchOutcome {
        let url = self.listing_url(query);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error fetching internships from {url}: {e}");
                return FetchOutcome::Failed(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Internship site returned {status} for {url}");
            return FetchOutcome::Failed(format!("unexpected status {status}"));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error reading internship response body: {e}");
                return FetchOutcome::Failed(e.to_string());
            }
        };

        self.parse_listings(&body)
    }

    /// Pure scrape over an already-fetched document, so the selector logic
    /// is testable offline against fixture HTML.
    pub fn parse_listings(&self, html: &str) -> FetchOutcome {
        let document = Html::parse_document(html);

        let mut listings = Vec::new();
        let mut skipped = 0;
        for container in document.select(&self.selectors.container).take(MAX_LISTINGS) {
            match self.parse_listing(container) {
                Some(record) => listings.push(record),
                None => {
                    warn!("Skipping internship listing with missing elements");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            FetchOutcome::Partial { listings, skipped }
        } else {
            FetchOutcome::Success(listings)
        }
    }

    /// Returns `None` when a required element (title, first anchor's href)
    /// is missing; the caller skips just that item.
    fn parse_listing(&self, container: ElementRef<'_>) -> Option<InternshipRecord> {
        let title = container
            .select(&self.selectors.title)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let company = container
            .select(&self.selectors.company)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|c| !c.is_empty());

        let href = container
            .select(&self.selectors.anchor)
            .next()?
            .value()
            .attr("href")?;

        Some(InternshipRecord {
            title,
            company,
            link: format!("{}{}", self.base_url, href),
        })
    }
}
