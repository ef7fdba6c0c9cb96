//! Data types produced by the summarizer.

use crate::analyzers::tone::Tone;
use crate::analyzers::utility::display_aspect;
use crate::ratings::AspectRatings;

/// A single aspect together with its rating.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectScore {
    pub aspect: String,
    pub score: f64,
}

impl AspectScore {
    pub fn new(aspect: &str, score: f64) -> Self {
        Self {
            aspect: aspect.to_string(),
            score,
        }
    }

    /// Aspect identifier with word separators replaced by spaces.
    pub fn display_name(&self) -> String {
        display_aspect(&self.aspect)
    }
}

/// Per-request summary of a company's sentiment. Never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySummary {
    pub company: String,
    /// Unrounded mean of every available aspect rating.
    pub overall: f64,
    pub best: AspectScore,
    pub worst: AspectScore,
    pub tone: Tone,
    pub summary: String,
    pub aspects: AspectRatings,
}

/// One line of the company listing: how many aspects are rated and the
/// rounded overall rating, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyOverview {
    pub company: String,
    pub aspect_count: usize,
    pub overall_rating: Option<f64>,
}
