//! CSV loading for the ratings dataset.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::store::RatingsStore;
use super::types::RatingRow;

impl RatingsStore {
    /// Loads the dataset at `path`, gunzipping it first if the name ends in `.gz`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, any row fails to parse,
    /// or the rows violate the store's invariants.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open ratings dataset '{}'", path.display()))?;

        let store = if is_gzip(path) {
            Self::from_reader(GzDecoder::new(file))
        } else {
            Self::from_reader(file)
        }
        .with_context(|| format!("failed to load ratings dataset '{}'", path.display()))?;

        info!(companies = store.len(), "Ratings dataset loaded");
        Ok(store)
    }

    /// Reads CSV rows with a header line from `reader` and builds the store.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();

        for result in rdr.deserialize() {
            let record: RatingRow = result?;
            rows.push(record);
        }

        info!(rows = rows.len(), "Ratings rows read");
        Self::from_rows(rows)
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}
