//! In-memory ratings store.
//!
//! The dataset is a flat CSV of `(company, aspect, rating)` rows produced by an
//! external analysis pipeline. [`RatingsStore`] reshapes it once at startup into
//! a company → aspect → rating lookup and is read-only afterwards.

pub mod loader;
pub mod store;
pub mod types;

pub use store::RatingsStore;
pub use types::{AspectRatings, RatingRow};

/// Lowest rating the analysis pipeline emits.
pub const MIN_RATING: f64 = 1.0;
/// Highest rating the analysis pipeline emits.
pub const MAX_RATING: f64 = 5.0;
