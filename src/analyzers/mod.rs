//! Company sentiment summarization.
//!
//! Reduces a company's per-aspect ratings to an overall mean, picks the
//! strongest and weakest aspects, assigns a tone label, and renders a
//! one-paragraph summary.

pub mod overview;
pub mod summarize;
pub mod tone;
pub mod types;
pub mod utility;
