//! Job Matcher — filters the local job-listings CSV by extracted skills.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::skills::SkillSet;

const MAX_SUGGESTIONS: usize = 10;

/// One row of the job-listings CSV. `Required_Skills` is a
/// comma-separated field, split at match time.
#[derive(Debug, Deserialize)]
pub struct JobListingRow {
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Required_Skills")]
    pub required_skills: String,
}

/// Returns up to 10 job titles whose required skills intersect `skills`,
/// in CSV row order.
///
/// The CSV is read fresh on every call; an unreadable file or malformed
/// row propagates to the caller.
pub fn suggest_jobs(skills: &SkillSet, csv_path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open job listings at {}", csv_path.display()))?;

    let skills_lower: Vec<String> = skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let mut suggestions = Vec::new();
    for row in reader.deserialize::<JobListingRow>() {
        let row = row.context("malformed job listings row")?;
        if row_matches(&skills_lower, &row.required_skills) {
            suggestions.push(row.job_title);
            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }
        }
    }

    Ok(suggestions)
}

/// A row matches when any input skill equals any required skill,
/// case-insensitively, with surrounding whitespace ignored.
fn row_matches(skills_lower: &[String], required_skills: &str) -> bool {
    required_skills
        .split(',')
        .map(|rs| rs.trim().to_lowercase())
        .any(|rs| skills_lower.iter().any(|s| *s == rs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn skills(terms: &[&str]) -> SkillSet {
        terms.iter().map(|s| s.to_string()).collect()
    }

    fn write_csv(rows: &[(&str, &str)]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Job_Title,Required_Skills").unwrap();
        for (title, required) in rows {
            writeln!(file, "{title},\"{required}\"").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_case_insensitive_skill_matches_row() {
        let csv = write_csv(&[("Data Analyst", "Python, SQL")]);
        let titles = suggest_jobs(&skills(&["python"]), csv.path()).unwrap();
        assert_eq!(titles, vec!["Data Analyst"]);
    }

    #[test]
    fn test_no_overlap_yields_no_suggestions() {
        let csv = write_csv(&[("Data Analyst", "Python, SQL"), ("Designer", "Figma")]);
        let titles = suggest_jobs(&skills(&["Java"]), csv.path()).unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn test_empty_skill_set_yields_empty() {
        let csv = write_csv(&[("Data Analyst", "Python, SQL")]);
        let titles = suggest_jobs(&SkillSet::new(), csv.path()).unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn test_suggestions_cap_at_ten_in_row_order() {
        let rows: Vec<(String, &str)> = (0..15).map(|i| (format!("Job {i}"), "Python")).collect();
        let rows_ref: Vec<(&str, &str)> = rows.iter().map(|(t, r)| (t.as_str(), *r)).collect();
        let csv = write_csv(&rows_ref);

        let titles = suggest_jobs(&skills(&["Python"]), csv.path()).unwrap();
        assert_eq!(titles.len(), 10);
        assert_eq!(titles[0], "Job 0");
        assert_eq!(titles[9], "Job 9");
    }

    #[test]
    fn test_required_skills_are_trimmed_before_compare() {
        let csv = write_csv(&[("Frontend Intern", "  HTML ,CSS")]);
        let titles = suggest_jobs(&skills(&["HTML"]), csv.path()).unwrap();
        assert_eq!(titles, vec!["Frontend Intern"]);
    }

    #[test]
    fn test_empty_required_skills_row_never_matches() {
        let csv = write_csv(&[("Mystery Role", "")]);
        let titles = suggest_jobs(&skills(&["Python", "Java"]), csv.path()).unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn test_missing_csv_is_an_error() {
        let result = suggest_jobs(&skills(&["Python"]), Path::new("./no-such-file.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_skill_names_do_not_match() {
        // "Java" must not match a row requiring "JavaScript".
        let csv = write_csv(&[("Web Intern", "JavaScript")]);
        let titles = suggest_jobs(&skills(&["Java"]), csv.path()).unwrap();
        assert!(titles.is_empty());
    }
}
