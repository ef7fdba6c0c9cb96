//! Row and index types for the ratings dataset.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Aspect identifier to rating, ordered by aspect identifier.
pub type AspectRatings = BTreeMap<String, f64>;

/// A single row deserialized from the ratings CSV.
///
/// Columns other than these three are ignored. An empty rating cell or one of
/// [`NULL_TOKENS`] deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingRow {
    pub company: String,
    pub aspect: String,
    #[serde(
        rename = "rating_1_to_5",
        alias = "rating",
        deserialize_with = "deserialize_rating"
    )]
    pub rating: Option<f64>,
}

/// Cell values the upstream pipeline writes for an undefined rating.
pub const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    let cell = raw.trim();
    if NULL_TOKENS.contains(&cell) {
        return Ok(None);
    }

    cell.parse::<f64>()
        .map(Some)
        .map_err(|e| D::Error::custom(format!("invalid rating '{cell}': {e}")))
}

impl RatingRow {
    pub fn new(company: &str, aspect: &str, rating: Option<f64>) -> Self {
        Self {
            company: company.to_string(),
            aspect: aspect.to_string(),
            rating,
        }
    }

    /// Returns the rating if it is present and finite.
    pub fn usable_rating(&self) -> Option<f64> {
        self.rating.filter(|r| r.is_finite())
    }
}
