//! Skill Extractor — finds vocabulary keywords in resume PDF text.
//!
//! The vocabulary is a closed set of canonical terms injected from config.
//! Matching is case-insensitive on word boundaries; the output always
//! carries the canonical casing, so "python" and "PYTHON" both surface
//! as "Python".

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{bail, Result};
use regex::Regex;
use thiserror::Error;

/// Deduplicated canonical skills found in one resume. Ordered so the
/// derived search query is deterministic.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unreadable PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

/// The fixed keyword vocabulary, compiled once at startup and shared
/// through `AppState`.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    matcher: Regex,
    /// lowercase spelling → canonical spelling
    canonical: BTreeMap<String, String>,
}

impl SkillVocabulary {
    pub fn new(terms: &[String]) -> Result<Self> {
        if terms.is_empty() {
            bail!("skill vocabulary must not be empty");
        }

        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?;

        let canonical = terms
            .iter()
            .map(|t| (t.to_lowercase(), t.clone()))
            .collect();

        Ok(Self { matcher, canonical })
    }

    /// Returns the canonical form of every vocabulary term present in `text`.
    pub fn match_text(&self, text: &str) -> SkillSet {
        self.matcher
            .find_iter(text)
            .filter_map(|m| self.canonical.get(&m.as_str().to_lowercase()).cloned())
            .collect()
    }
}

/// Extracts the recognized skills from a resume PDF on disk.
///
/// Pages with no extractable text contribute nothing; matches are unioned
/// across all pages. A file that cannot be read as a PDF at all is a fatal
/// error for the caller.
pub fn extract_skills(path: &Path, vocabulary: &SkillVocabulary) -> Result<SkillSet, ExtractError> {
    let pages = pdf_extract::extract_text_by_pages(path)?;

    let mut skills = SkillSet::new();
    for page in &pages {
        if page.trim().is_empty() {
            continue;
        }
        skills.extend(vocabulary.match_text(page));
    }
    Ok(skills)
}
