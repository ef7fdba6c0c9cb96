use anyhow::{Result, bail};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use super::types::{AspectRatings, RatingRow};
use super::{MAX_RATING, MIN_RATING};

/// Company → aspect → rating lookup built once from the flat dataset.
///
/// A company whose rows all lack a rating is kept with an empty aspect map, so
/// callers can tell "unknown company" apart from "known but unrated".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RatingsStore {
    index: BTreeMap<String, AspectRatings>,
}

impl RatingsStore {
    /// Groups `rows` by company, dropping rows without a usable rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the same `(company, aspect)` pair appears twice,
    /// whether or not either row carries a rating.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RatingRow>,
    {
        let mut index: BTreeMap<String, AspectRatings> = BTreeMap::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut dropped = 0usize;

        for row in rows {
            if !seen.insert((row.company.clone(), row.aspect.clone())) {
                bail!(
                    "duplicate rating for company '{}', aspect '{}'",
                    row.company,
                    row.aspect
                );
            }

            let rating = row.usable_rating();
            let aspects = index.entry(row.company).or_default();

            match rating {
                Some(r) => {
                    if !(MIN_RATING..=MAX_RATING).contains(&r) {
                        warn!(aspect = %row.aspect, rating = r, "Rating outside expected range");
                    }
                    aspects.insert(row.aspect, r);
                }
                None => dropped += 1,
            }
        }

        debug!(companies = index.len(), dropped, "Ratings index built");

        Ok(Self { index })
    }

    /// Returns the aspect ratings for `company`, matched exactly.
    pub fn lookup(&self, company: &str) -> Option<&AspectRatings> {
        self.index.get(company)
    }

    /// Iterates over company identifiers in lexicographic order.
    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
