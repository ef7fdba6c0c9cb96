use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use company_sentiment::api::router;
use company_sentiment::ratings::RatingsStore;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ratings.csv");

fn fixture_store() -> Arc<RatingsStore> {
    Arc::new(RatingsStore::load(FIXTURE).expect("Failed to load fixture"))
}

async fn send(store: Arc<RatingsStore>, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router(store).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

async fn get(store: Arc<RatingsStore>, uri: &str) -> (StatusCode, Value) {
    send(store, Method::GET, uri).await
}

#[tokio::test]
async fn test_acme_summary() {
    let (status, body) = get(fixture_store(), "/company/Acme").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "company": "Acme",
            "overall_rating": 3.0,
            "summary": "Acme shows strongest perception in **pay** (4.00/5), while **culture** \
                        is the weakest area (2.00/5). Overall employee sentiment is generally positive.",
            "aspects": { "culture": 2.0, "management": 3.0, "pay": 4.0 }
        })
    );
}

#[tokio::test]
async fn test_beta_is_generally_negative() {
    let (status, body) = get(fixture_store(), "/company/Beta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_rating"], json!(2.0));
    assert!(
        body["summary"]
            .as_str()
            .unwrap()
            .ends_with("Overall employee sentiment is generally negative.")
    );
}

#[tokio::test]
async fn test_surrounding_whitespace_is_ignored() {
    let store = fixture_store();

    let (_, plain) = get(store.clone(), "/company/Acme").await;
    let (status, padded) = get(store, "/company/%20Acme%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(padded, plain);
}

#[tokio::test]
async fn test_unknown_company_is_not_found() {
    let (status, body) = get(fixture_store(), "/company/Nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Company not found" }));
}

#[tokio::test]
async fn test_company_match_is_case_sensitive() {
    let (status, _) = get(fixture_store(), "/company/acme").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_company_without_ratings_is_not_found() {
    let (status, body) = get(fixture_store(), "/company/Gamma").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Company not found" }));
}

#[tokio::test]
async fn test_blank_company_is_not_found() {
    let (status, body) = get(fixture_store(), "/company/%20%20").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Company not found" }));
}

#[tokio::test]
async fn test_missing_ratings_are_omitted_and_ties_resolve_lexicographically() {
    let (status, body) = get(fixture_store(), "/company/Delta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["aspects"],
        json!({ "career_growth": 2.5, "work_life_balance": 2.5 })
    );
    assert_eq!(body["overall_rating"], json!(2.5));
    assert_eq!(
        body["summary"],
        json!(
            "Delta shows strongest perception in **career growth** (2.50/5), while \
             **career growth** is the weakest area (2.50/5). Overall employee sentiment \
             is mixed / neutral."
        )
    );
}

#[tokio::test]
async fn test_overall_rating_is_rounded_mean_of_aspects() {
    let store = fixture_store();

    let expected = [
        ("Acme", 3.0),
        ("Beta", 2.0),
        ("Delta", 2.5),
        // mean 3.125 rounds half to even
        ("Epsilon", 3.12),
    ];

    for (company, overall_rating) in expected {
        let (status, body) = get(store.clone(), &format!("/company/{company}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall_rating"], json!(overall_rating), "{company}");
    }
}

#[tokio::test]
async fn test_half_cent_mean_keeps_unrounded_aspects() {
    let (status, body) = get(fixture_store(), "/company/Epsilon").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aspects"], json!({ "culture": 3.0, "pay": 3.25 }));
    assert_eq!(
        body["summary"],
        json!(
            "Epsilon shows strongest perception in **pay** (3.25/5), while **culture** \
             is the weakest area (3.00/5). Overall employee sentiment is generally positive."
        )
    );
}

#[tokio::test]
async fn test_undecodable_company_name_is_not_found() {
    let (status, body) = get(fixture_store(), "/company/%FF").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Company not found" }));
}

#[tokio::test]
async fn test_query_string_is_ignored() {
    let store = fixture_store();

    let (_, plain) = get(store.clone(), "/company/Acme").await;
    let (status, with_query) = get(store, "/company/Acme?verbose=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(with_query, plain);
}

#[tokio::test]
async fn test_only_get_company_is_routed() {
    let (status, _) = get(fixture_store(), "/companies").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(fixture_store(), Method::POST, "/company/Acme").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_reloading_dataset_gives_identical_responses() {
    for uri in ["/company/Acme", "/company/Delta", "/company/Nonexistent"] {
        let first = get(fixture_store(), uri).await;
        let second = get(fixture_store(), uri).await;
        assert_eq!(first, second);
    }
}
