pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};

use crate::state::AppState;

/// Cap on the multipart request body; axum's 2 MB default is too small
/// for scanned resumes.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_index).post(pages::handle_upload))
        .route("/health", get(health::health_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
