//! Axum handlers for the upload form page.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    response::Html,
};
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::AppError;
use crate::listings::suggest_jobs;
use crate::render::{render_page, ResultsView};
use crate::skills::extract_skills;
use crate::state::AppState;

/// GET /
/// Renders the empty upload form.
pub async fn handle_index() -> Html<String> {
    Html(render_page(None))
}

/// POST /
///
/// Accepts a multipart form with a `resume` PDF field, runs the
/// extract → fetch → match pipeline sequentially, and renders the page
/// with both result lists.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart request: {e}")))?
    {
        if field.name() == Some("resume") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read resume upload: {e}")))?;
            resume_bytes = Some(data);
        }
    }

    let data = resume_bytes
        .ok_or_else(|| AppError::Validation("multipart field 'resume' is required".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("uploaded resume is empty".to_string()));
    }

    // Spooled to disk only for the lifetime of this request; the temp
    // file is removed when `resume` drops.
    let resume = spool_resume(&state.config.upload_dir, data)
        .context("failed to spool resume upload")
        .map_err(AppError::Internal)?;

    let skills = extract_skills(resume.path(), &state.vocabulary)
        .map_err(|e| AppError::ResumeParse(e.to_string()))?;
    let query = skills.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
    debug!("extracted skills: [{query}]");

    let internships = state.fetcher.fetch(&query).await.into_listings();
    let job_suggestions = suggest_jobs(&skills, &state.config.job_listings_csv)?;

    Ok(Html(render_page(Some(&ResultsView {
        internships,
        job_suggestions,
    }))))
}

fn spool_resume(dir: &Path, data: Bytes) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(&data)?;
    Ok(file)
}
