//! Axum route handler for the job search API.

use axum::{extract::State, Json};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::job_posting::JobPosting;
use crate::search::prompts::build_search_prompts;
use crate::search::query::SearchQuery;
use crate::search::sanitizer::sanitize_postings;
use crate::state::AppState;

/// POST /api/search
///
/// Pipeline: parse query → check credential → render prompts → one model call → sanitize.
/// The body is read raw so that an empty body or a missing content type still
/// falls back to the default query.
pub async fn handle_search(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let query = SearchQuery::from_body(&body)?;

    if !state.gateway.is_configured() {
        return Err(AppError::MissingApiKey);
    }

    info!(
        "Job search: role={:?} city={:?} radius={}km",
        query.role, query.city, query.radius
    );

    let prompts = build_search_prompts(&query);
    let raw_text = state.gateway.complete(&prompts.system, &prompts.user).await?;
    let postings = sanitize_postings(&raw_text)?;

    info!("Job search returned {} postings", postings.len());
    Ok(Json(postings))
}
