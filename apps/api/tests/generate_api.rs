mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{app, Reply, ScriptedGenerator};

async fn send(router: axum::Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_generate(router: axum::Router, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, "/api/generate", Body::from(body.to_string())).await
}

#[tokio::test]
async fn test_healthz() {
    let router = app(ScriptedGenerator::new(Reply::Text("x")));
    let (status, body) = send(router, Method::GET, "/healthz", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_root() {
    let router = app(ScriptedGenerator::new(Reply::Text("x")));
    let (status, body) = send(router, Method::GET, "/", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Roast & Compliment API running");
}

#[tokio::test]
async fn test_savage_hinglish_roast() {
    let generator = ScriptedGenerator::new(Reply::Text(
        "Rahul online 24/7 but reply pending like government file 💀",
    ));
    let (status, body) = post_generate(
        app(generator.clone()),
        json!({"mode": "roast", "tone": "savage", "language": "hinglish", "name": "Rahul"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["line"].as_str().unwrap().is_empty());
    assert!(body.get("error").is_none());
    assert_eq!(generator.calls(), 1);

    let prompt = generator.last_prompt().unwrap();
    assert!(prompt.system.starts_with("You are a legendary roast writer"));
    assert!(prompt.user.contains("Tone: savage"));
    assert!(prompt.user.contains("- Relationship: friend"));
    assert!(prompt.user.contains("- Traits: none"));
}

#[tokio::test]
async fn test_soft_english_compliment_with_trait_list() {
    let generator = ScriptedGenerator::new(Reply::Text(
        "You forget everything but never forget to be kind, annoyingly perfect ✨",
    ));
    let (status, body) = post_generate(
        app(generator.clone()),
        json!({
            "mode": "compliment",
            "tone": "soft",
            "language": "english",
            "name": "Asha",
            "traits": ["kind", "forgetful"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["line"].as_str().unwrap().is_empty());

    let prompt = generator.last_prompt().unwrap();
    assert!(prompt.user.contains("Write a one-line compliment."));
    assert!(prompt.user.contains("- Traits: kind, forgetful"));
}

#[tokio::test]
async fn test_empty_object_is_validation_error_without_model_call() {
    let generator = ScriptedGenerator::new(Reply::Text("x"));
    let (status, body) = post_generate(app(generator.clone()), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "mode, tone, language, and name are required.");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_each_missing_required_field_rejected() {
    for key in ["mode", "tone", "language", "name"] {
        let generator = ScriptedGenerator::new(Reply::Text("x"));
        let mut body = json!({"mode": "roast", "tone": "normal", "language": "english", "name": "Rahul"});
        body.as_object_mut().unwrap().remove(key);

        let (status, reply) = post_generate(app(generator.clone()), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {key}");
        assert_eq!(reply["error"], "VALIDATION_ERROR");
        assert_eq!(generator.calls(), 0);
    }
}

#[tokio::test]
async fn test_malformed_and_empty_bodies_are_validation_errors() {
    let generator = ScriptedGenerator::new(Reply::Text("x"));
    let (status, body) = send(
        app(generator.clone()),
        Method::POST,
        "/api/generate",
        Body::from("{\"mode\": "),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let (status, body) = send(app(generator.clone()), Method::POST, "/api/generate", Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_model_failure_is_server_error_without_line() {
    let generator = ScriptedGenerator::new(Reply::Fail);
    let (status, body) = post_generate(
        app(generator),
        json!({"mode": "roast", "tone": "normal", "language": "english", "name": "Rahul"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "SERVER_ERROR");
    assert!(body.get("line").is_none());
}

#[tokio::test]
async fn test_whitespace_completion_is_empty_response() {
    let generator = ScriptedGenerator::new(Reply::Text("   \n  "));
    let (status, body) = post_generate(
        app(generator),
        json!({"mode": "roast", "tone": "normal", "language": "english", "name": "Rahul"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "EMPTY_RESPONSE");
    assert!(body.get("line").is_none());
}

#[tokio::test]
async fn test_oversized_fields_are_truncated_in_prompt() {
    let generator = ScriptedGenerator::new(Reply::Text("ok"));
    let long_name = "N".repeat(500);
    let (status, _) = post_generate(
        app(generator.clone()),
        json!({
            "mode": "roast",
            "tone": "normal",
            "language": "english",
            "name": long_name,
            "insideJoke": "J".repeat(5000)
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let prompt = generator.last_prompt().unwrap();
    assert!(prompt.user.contains(&format!("- Name: {}\n", "N".repeat(40))));
    assert!(prompt.user.contains(&format!("- Inside joke: {}\n", "J".repeat(200))));
}
