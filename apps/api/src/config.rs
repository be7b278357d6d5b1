use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// The closed skill vocabulary used when SKILL_VOCABULARY is not set.
const DEFAULT_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "HTML",
    "CSS",
    "JavaScript",
    "Machine Learning",
];

const DEFAULT_BASE_URL: &str = "https://internshala.com";

/// Application configuration loaded from environment variables.
/// Every variable has a default; the service needs no secrets to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory that transient resume uploads are spooled into.
    pub upload_dir: PathBuf,
    /// CSV of job listings, re-read on every matching call.
    pub job_listings_csv: PathBuf,
    /// Base URL of the internship site, also the prefix of every scraped link.
    pub internship_base_url: String,
    /// Canonical skill keywords recognized in resume text.
    pub skill_vocabulary: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let skill_vocabulary = match std::env::var("SKILL_VOCABULARY") {
            Ok(raw) => {
                let terms = parse_vocabulary(&raw);
                if terms.is_empty() {
                    bail!("SKILL_VOCABULARY must contain at least one comma-separated term");
                }
                terms
            }
            Err(_) => DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: env_or("UPLOAD_DIR", "uploads").into(),
            job_listings_csv: env_or("JOB_LISTINGS_CSV", "./job_listings.csv").into(),
            internship_base_url: env_or("INTERNSHIP_BASE_URL", DEFAULT_BASE_URL),
            skill_vocabulary,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma-separated vocabulary override into trimmed, non-empty terms.
fn parse_vocabulary(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
