//! Commit listing endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::CommitRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidPageRequest;
use crate::http::server::AppState;
use crate::models::{CommitRecord, FilterEcho, PageMeta, PageRequest};

/// Commit page response
#[derive(Debug, Serialize)]
pub struct CommitPageResponse {
    pub success: bool,
    pub data: Vec<CommitRecord>,
    pub pagination: PageMeta,
    pub filters: FilterEcho,
}

/// GET /api/commits?page=&limit=&start_date=&end_date=
async fn list_commits(
    State(state): State<Arc<AppState>>,
    ValidPageRequest(request): ValidPageRequest,
) -> Result<Json<CommitPageResponse>, ApiError> {
    let PageRequest {
        pagination,
        range,
        filters,
    } = request;

    let page = CommitRepo::new(&state.pool)
        .list(&range, pagination)
        .await
        .map_err(|e| ApiError::database(e, state.environment))?;

    tracing::debug!(
        page = pagination.page,
        limit = pagination.limit,
        start_date = ?filters.start_date,
        end_date = ?filters.end_date,
        total = page.total,
        returned = page.items.len(),
        "listed commits"
    );

    let meta = page.meta();
    Ok(Json(CommitPageResponse {
        success: true,
        data: page.items,
        pagination: meta,
        filters,
    }))
}

/// Commit routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/commits", get(list_commits))
}
