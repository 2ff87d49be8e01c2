mod common;

use common::spawn_app;
use serde_json::{Value, json};

fn valid_submission() -> Value {
    json!({
        "name": "Alice Smith",
        "email": "alice@example.com",
        "mobile": "07123 456789",
        "message": "I'd like a weekly three hour clean, please."
    })
}

#[tokio::test]
async fn valid_submission_relays_exactly_one_email() {
    let (address, mock_emailer) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{address}/api/contact"))
        .json(&valid_submission())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON body");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Email sent successfully"));

    assert_eq!(mock_emailer.sent_count(), 1);
    let email = mock_emailer.last_sent_email().expect("No email was sent");
    assert_eq!(email.recipient, "hello@siobhansluxe.co.uk");
    assert_eq!(
        email.subject,
        "New Enquiry from Alice Smith - Siobhans Luxe Website"
    );
    assert!(email.body_text.contains("Name: Alice Smith"));
    assert!(email.body_text.contains("Email: alice@example.com"));
    assert!(email.body_text.contains("Mobile: 07123 456789"));
    assert!(
        email
            .body_text
            .contains("I'd like a weekly three hour clean, please.")
    );
    assert!(email.body_html.contains("<strong>Name:</strong> Alice Smith"));
}

#[tokio::test]
async fn missing_required_fields_return_400_and_send_nothing() {
    let (address, mock_emailer) = spawn_app().await;
    let client = reqwest::Client::new();

    let payloads = [
        json!({ "email": "alice@example.com", "message": "A long enough message" }),
        json!({ "name": "Alice", "message": "A long enough message" }),
        json!({ "name": "Alice", "email": "alice@example.com" }),
        json!({ "name": "", "email": "alice@example.com", "message": "A long enough message" }),
        json!({ "name": "Alice", "email": "   ", "message": "A long enough message" }),
        json!({ "name": "Alice", "email": "alice@example.com", "message": "" }),
        json!({}),
    ];

    for payload in payloads {
        let response = client
            .post(format!("{address}/api/contact"))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(
            response.status(),
            reqwest::StatusCode::BAD_REQUEST,
            "payload: {payload}"
        );
        let body: Value = response.json().await.expect("Failed to parse JSON body");
        assert_eq!(body["error"], json!("Name, email, and message are required"));
    }

    assert_eq!(mock_emailer.sent_count(), 0);
}

#[tokio::test]
async fn mobile_is_optional_and_defaults_to_not_provided() {
    let (address, mock_emailer) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{address}/api/contact"))
        .json(&json!({
            "name": "Bob",
            "email": "bob@example.com",
            "message": "A one-off deep clean before moving out."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let email = mock_emailer.last_sent_email().expect("No email was sent");
    assert!(email.body_text.contains("Mobile: Not provided"));
    assert!(email.body_html.contains("Not provided"));
}

#[tokio::test]
async fn malformed_email_shape_is_still_relayed() {
    // The relay checks presence only; format rules belong to the client.
    let (address, mock_emailer) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{address}/api/contact"))
        .json(&json!({
            "name": "Eve",
            "email": "not-an-email",
            "message": "hi"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(mock_emailer.sent_count(), 1);
}

#[tokio::test]
async fn transport_failure_returns_500_with_generic_message() {
    let (address, mock_emailer) = spawn_app().await;
    let client = reqwest::Client::new();
    mock_emailer.set_failing(true);

    let response = client
        .post(format!("{address}/api/contact"))
        .json(&valid_submission())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: Value = response.json().await.expect("Failed to parse JSON body");
    assert_eq!(
        body["error"],
        json!("Failed to send email. Please try again.")
    );
    assert_eq!(mock_emailer.sent_count(), 0);
}

#[tokio::test]
async fn repeated_submissions_produce_repeated_emails() {
    // No idempotency or deduplication is promised.
    let (address, mock_emailer) = spawn_app().await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let response = client
            .post(format!("{address}/api/contact"))
            .json(&valid_submission())
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    assert_eq!(mock_emailer.sent_count(), 3);
}

#[tokio::test]
async fn message_newlines_become_html_line_breaks() {
    let (address, mock_emailer) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{address}/api/contact"))
        .json(&json!({
            "name": "Carol",
            "email": "carol@example.com",
            "message": "First line\nSecond line"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let email = mock_emailer.last_sent_email().expect("No email was sent");
    assert!(email.body_html.contains("First line<br>Second line"));
    assert!(email.body_text.contains("First line\nSecond line"));
}
