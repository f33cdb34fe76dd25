use kaapi_core_contact_contracts::MockContactFeatureService;
use kaapi_core_contact_impl::{validate_contact, ContactFeatureServiceImpl};
use kaapi_core_supplier_contracts::MockSupplierFeatureService;
use kaapi_demo::contact::CONTACT;
use kaapi_models::issue::{IssueCode, ValidationIssue, ValidationIssues};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common::TestServer;

mod common;

const PATH: &str = "/api/contact";

#[tokio::test]
async fn ok() {
    // Arrange
    let submission = validate_contact(&CONTACT).unwrap();
    let contact = MockContactFeatureService::new().with_submit(CONTACT.clone(), Ok(submission));
    let server = TestServer::spawn(contact, MockSupplierFeatureService::new()).await;

    // Act
    let response = reqwest::Client::new()
        .post(server.url(PATH))
        .json(&*CONTACT)
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({"ok": true}));
}

#[tokio::test]
async fn validation_failed() {
    // Arrange
    let payload = json!({"name": "A"});
    let issues = ValidationIssues::from(ValidationIssue::new(
        IssueCode::TooSmall,
        "name",
        "Name must be at least 2 characters",
    ));
    let contact = MockContactFeatureService::new().with_submit(payload.clone(), Err(issues));
    let server = TestServer::spawn(contact, MockSupplierFeatureService::new()).await;

    // Act
    let response = reqwest::Client::new()
        .post(server.url(PATH))
        .json(&payload)
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "ok": false,
            "issues": [{
                "code": "too_small",
                "path": ["name"],
                "message": "Name must be at least 2 characters",
            }],
        })
    );
}

#[tokio::test]
async fn every_issue_is_returned() {
    // Arrange
    let server = TestServer::spawn(ContactFeatureServiceImpl, MockSupplierFeatureService::new()).await;
    let mut payload = CONTACT.clone();
    payload["email"] = json!("anita.example.com");
    payload["consent"] = json!(false);

    // Act
    let response = reqwest::Client::new()
        .post(server.url(PATH))
        .json(&payload)
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["ok"], json!(false));
    assert_eq!(
        body["issues"]
            .as_array()
            .unwrap()
            .iter()
            .map(|issue| (issue["path"].clone(), issue["code"].clone()))
            .collect::<Vec<_>>(),
        [
            (json!(["email"]), json!("invalid_email")),
            (json!(["consent"]), json!("invalid_literal")),
        ]
    );
}

#[tokio::test]
async fn not_an_object() {
    // Arrange
    let server = TestServer::spawn(ContactFeatureServiceImpl, MockSupplierFeatureService::new()).await;

    // Act
    let response = reqwest::Client::new()
        .post(server.url(PATH))
        .json(&json!(["Anita Rao"]))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["issues"][0]["path"], json!([]));
    assert_eq!(body["issues"][0]["code"], json!("invalid_type"));
}

#[tokio::test]
async fn malformed_body() {
    // Arrange
    let server = TestServer::spawn(
        MockContactFeatureService::new(),
        MockSupplierFeatureService::new(),
    )
    .await;

    for body in ["{\"name\": ", "", "name=Anita"] {
        // Act
        let response = reqwest::Client::new()
            .post(server.url(PATH))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{body}");
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({"ok": false, "message": "Unexpected error"})
        );
    }
}
