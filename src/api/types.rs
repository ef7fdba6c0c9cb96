//! JSON payloads returned by the HTTP surface and the `show` command.

use serde::{Deserialize, Serialize};

use crate::analyzers::types::CompanySummary;
use crate::analyzers::utility::round2;
use crate::ratings::AspectRatings;

/// Successful lookup response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub company: String,
    /// Overall rating rounded to two decimals.
    pub overall_rating: f64,
    pub summary: String,
    /// Unrounded ratings for every available aspect.
    pub aspects: AspectRatings,
}

impl From<CompanySummary> for CompanyResponse {
    fn from(summary: CompanySummary) -> Self {
        Self {
            company: summary.company,
            overall_rating: round2(summary.overall),
            summary: summary.summary,
            aspects: summary.aspects,
        }
    }
}

/// Error payload, `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
        }
    }
}
