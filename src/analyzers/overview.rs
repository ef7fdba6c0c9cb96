use crate::analyzers::summarize::summarize;
use crate::analyzers::types::CompanyOverview;
use crate::analyzers::utility::round2;
use crate::ratings::RatingsStore;

/// Lists every company in the store with its aspect count and rounded overall
/// rating. Companies without any rating get `None`.
pub fn overview(store: &RatingsStore) -> Vec<CompanyOverview> {
    store
        .companies()
        .map(|company| {
            let summary = summarize(store, company).ok();
            CompanyOverview {
                company: company.to_string(),
                aspect_count: summary.as_ref().map_or(0, |s| s.aspects.len()),
                overall_rating: summary.map(|s| round2(s.overall)),
            }
        })
        .collect()
}
