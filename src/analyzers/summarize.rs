use crate::analyzers::tone::Tone;
use crate::analyzers::types::{AspectScore, CompanySummary};
use crate::analyzers::utility::mean;
use crate::error::SentimentError;
use crate::ratings::{AspectRatings, RatingsStore};

/// Summarizes the ratings of `company`, matched exactly against the store.
///
/// Ties for best or worst aspect go to the lexicographically first aspect
/// identifier.
///
/// # Errors
///
/// [`SentimentError::CompanyNotFound`] if the store has no such company, and
/// [`SentimentError::NoRatings`] if none of its aspects carries a rating.
pub fn summarize(store: &RatingsStore, company: &str) -> Result<CompanySummary, SentimentError> {
    let ratings = store
        .lookup(company)
        .ok_or_else(|| SentimentError::CompanyNotFound {
            company: company.to_string(),
        })?;

    let aspects: AspectRatings = ratings
        .iter()
        .filter(|(_, r)| r.is_finite())
        .map(|(a, r)| (a.clone(), *r))
        .collect();

    let (best, worst) = extremes(&aspects).ok_or_else(|| SentimentError::NoRatings {
        company: company.to_string(),
    })?;

    let values: Vec<f64> = aspects.values().copied().collect();
    let overall = mean(&values);
    let tone = Tone::from_overall(overall);

    let summary = format!(
        "{company} shows strongest perception in **{}** ({:.2}/5), \
         while **{}** is the weakest area ({:.2}/5). \
         Overall employee sentiment is {tone}.",
        best.display_name(),
        best.score,
        worst.display_name(),
        worst.score,
    );

    Ok(CompanySummary {
        company: company.to_string(),
        overall,
        best,
        worst,
        tone,
        summary,
        aspects,
    })
}

/// Returns the (best, worst) aspects, keeping the first seen on ties.
fn extremes(aspects: &AspectRatings) -> Option<(AspectScore, AspectScore)> {
    let mut iter = aspects.iter();
    let (first, &first_score) = iter.next()?;

    let mut best = (first, first_score);
    let mut worst = (first, first_score);

    for (aspect, &score) in iter {
        if score > best.1 {
            best = (aspect, score);
        }
        if score < worst.1 {
            worst = (aspect, score);
        }
    }

    Some((
        AspectScore::new(best.0, best.1),
        AspectScore::new(worst.0, worst.1),
    ))
}
