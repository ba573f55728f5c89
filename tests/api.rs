#![cfg(feature = "server")]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use fake_pii_json::{
    item::fake::Person,
    server::{ErrorBody, HealthBody, router},
};

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    if status != StatusCode::NOT_FOUND {
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "application/json");
    }

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(body, br#"{"status":"ok"}"#);
}

#[tokio::test]
async fn persons_default_to_ten() {
    let (status, body) = get(router(), "/api/persons").await;

    assert_eq!(status, StatusCode::OK);
    let persons: Vec<Person> = serde_json::from_slice(&body).unwrap();
    assert_eq!(persons.len(), 10);
}

#[tokio::test]
async fn persons_honour_n() {
    let (status, body) = get(router(), "/api/persons?n=5").await;

    assert_eq!(status, StatusCode::OK);
    let persons: Vec<Person> = serde_json::from_slice(&body).unwrap();
    assert_eq!(persons.len(), 5);

    for person in persons {
        assert!(!person.first_name.is_empty());
        assert!(!person.last_name.is_empty());
        assert!(!person.email.is_empty());
    }
}

#[tokio::test]
async fn bad_counts_are_rejected() {
    let cases = [
        ("abc", "Invalid number of records"),
        ("0", "Number of records must be greater than 0"),
        ("-5", "Number of records must be greater than 0"),
    ];

    for (n, message) in cases {
        let (status, body) = get(router(), &format!("/api/persons?n={}", n)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "n={}", n);
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, message);
    }
}

#[tokio::test]
async fn phones_by_category() {
    let (status, body) = get(router(), "/api/persons?n=3&phones=by-category").await;

    assert_eq!(status, StatusCode::OK);
    let persons: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(persons.len(), 3);
    for person in persons {
        assert!(person["phone"].is_object());
    }
}

#[tokio::test]
async fn repeated_keys_use_the_first_value() {
    let (status, body) = get(router(), "/api/persons?n=5&n=6").await;

    assert_eq!(status, StatusCode::OK);
    let persons: Vec<Person> = serde_json::from_slice(&body).unwrap();
    assert_eq!(persons.len(), 5);

    let (status, body) = get(router(), "/api/persons?n=2&phones=single&phones=by-category").await;

    assert_eq!(status, StatusCode::OK);
    let persons: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(persons.len(), 2);
    for person in persons {
        assert!(person["phone"].is_string());
    }
}

#[tokio::test]
async fn repeated_bad_key_is_a_json_400() {
    let (status, body) = get(router(), "/api/persons?n=abc&n=5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Invalid number of records");
}

#[tokio::test]
async fn unknown_phone_mode_is_rejected() {
    let (status, body) = get(router(), "/api/persons?phones=fax").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert!(error.error.contains("fax"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get(router(), "/api/people").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
