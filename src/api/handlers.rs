use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use std::sync::Arc;
use tracing::debug;

use crate::analyzers::summarize::summarize;
use crate::api::types::CompanyResponse;
use crate::error::SentimentError;
use crate::ratings::RatingsStore;

/// Trims surrounding whitespace from a requested company name.
pub fn normalize_company(name: &str) -> &str {
    name.trim()
}

/// Normalizes `company_name`, summarizes it, and builds the response payload.
pub fn lookup_company(
    store: &RatingsStore,
    company_name: &str,
) -> Result<CompanyResponse, SentimentError> {
    let company = normalize_company(company_name);
    summarize(store, company).map(CompanyResponse::from)
}

/// `GET /company/{company_name}`
///
/// A segment that does not decode to UTF-8 cannot name a company, so it gets
/// the same 404 as an unknown one.
#[tracing::instrument(skip(store))]
pub async fn get_company(
    State(store): State<Arc<RatingsStore>>,
    company_name: Result<Path<String>, PathRejection>,
) -> Result<Json<CompanyResponse>, SentimentError> {
    let Path(company_name) = company_name.map_err(|e| SentimentError::InvalidName {
        reason: e.body_text(),
    })?;
    let response = lookup_company(&store, &company_name)?;
    debug!(
        overall_rating = response.overall_rating,
        aspects = response.aspects.len(),
        "Company summary served"
    );
    Ok(Json(response))
}
