mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_validate_valid_form() {
    let server = common::create_test_server();

    let response = server
        .post("/api/subscription/validate")
        .json(&json!({
            "full_name": "Jo Park",
            "email": "jo@example.com",
            "plan_id": "plan-plus",
            "consent": true,
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["valid"], true);
    assert_eq!(json["errors"], json!({}));
    assert_eq!(json["plan"]["id"], "plan-plus");
}

#[tokio::test]
async fn test_validate_hides_untouched_errors() {
    let server = common::create_test_server();

    let json = server
        .post("/api/subscription/validate")
        .json(&json!({
            "full_name": "J",
            "email": "not-an-email",
            "plan_id": "plan-plus",
            "consent": false,
            "touched": ["full_name"],
        }))
        .await
        .json::<Value>();

    assert_eq!(json["valid"], false);
    assert!(json["plan"].is_null());
    assert!(json["errors"].get("email").is_some());
    assert!(json["errors"].get("consent").is_some());

    let visible = json["visible_errors"].as_object().unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(
        json["visible_errors"]["full_name"]["message"],
        "Name must be at least 2 characters."
    );
}

#[tokio::test]
async fn test_validate_submit_reveals_everything() {
    let server = common::create_test_server();

    let json = server
        .post("/api/subscription/validate")
        .json(&json!({
            "full_name": "",
            "email": "",
            "plan_id": "plan-unknown",
            "consent": false,
            "submit": true,
        }))
        .await
        .json::<Value>();

    assert_eq!(json["valid"], false);
    let visible = json["visible_errors"].as_object().unwrap();
    for field in ["full_name", "email", "plan_id", "consent"] {
        assert!(visible.contains_key(field), "{field}");
    }
    assert_eq!(visible["plan_id"]["message"], "Please select a plan.");
}

#[tokio::test]
async fn test_validate_padded_plan_id_resolves_plan() {
    let server = common::create_test_server();

    let json = server
        .post("/api/subscription/validate")
        .json(&json!({
            "full_name": "Jo Park",
            "email": "jo@example.com",
            "plan_id": " plan-plus ",
            "consent": true,
        }))
        .await
        .json::<Value>();

    assert_eq!(json["valid"], true);
    assert_eq!(json["plan"]["id"], "plan-plus");
}
