// Integration tests for the full request flow
// These tests verify the serialized shape the platform receives
#![allow(clippy::unwrap_used)]

use lambda_runtime::{Context, LambdaEvent};
use serde_json::{Value, json};
use serverless_greeting::config::GreetingConfig;
use serverless_greeting::handler::function_handler;

async fn invoke_to_wire(payload: Value) -> Value {
    let event = LambdaEvent::new(payload, Context::default());
    let response = function_handler(event, &GreetingConfig::default())
        .await
        .unwrap();
    serde_json::to_value(response).unwrap()
}

#[tokio::test]
async fn test_full_api_gateway_get_request() {
    let payload = json!({
        "resource": "/hello",
        "path": "/hello",
        "httpMethod": "GET",
        "headers": {"Accept": "application/json"},
        "queryStringParameters": {"name": "Ada"},
        "pathParameters": null,
        "requestContext": {"stage": "prod"},
        "body": null,
        "isBase64Encoded": false
    });

    let wire = invoke_to_wire(payload).await;
    assert_eq!(wire["statusCode"], 200);
    assert_eq!(wire["headers"], json!({"Content-Type": "application/json"}));

    let body: Value = serde_json::from_str(wire["body"].as_str().unwrap()).unwrap();
    assert_eq!(
        body["message"],
        "Merhaba Ada, bu fonksiyon bulutta (AWS Lambda) çalışıyor ve ödevimi tamamlıyor!"
    );
    assert_eq!(body["challenge"], "Göreviniz Başarıyla Tamamlandı!");
    assert_eq!(
        body["info"],
        "Parametreyi URL’den `?name=YeniIsim` şeklinde değiştirebilirsiniz."
    );
}

#[tokio::test]
async fn test_full_api_gateway_post_request() {
    let payload = json!({
        "httpMethod": "POST",
        "queryStringParameters": null,
        "body": json!({"name": "Grace"}).to_string()
    });

    let wire = invoke_to_wire(payload).await;
    let body: Value = serde_json::from_str(wire["body"].as_str().unwrap()).unwrap();
    assert!(body["message"].as_str().unwrap().contains("Merhaba Grace,"));
}

#[tokio::test]
async fn test_query_parameter_wins_over_body() {
    let payload = json!({
        "queryStringParameters": {"name": "Ada"},
        "body": json!({"name": "Grace"}).to_string()
    });

    let wire = invoke_to_wire(payload).await;
    let body: Value = serde_json::from_str(wire["body"].as_str().unwrap()).unwrap();
    assert!(body["message"].as_str().unwrap().contains("Merhaba Ada,"));
}

#[tokio::test]
async fn test_repeated_invocations_are_independent() {
    let first = invoke_to_wire(json!({"queryStringParameters": {"name": "Ada"}})).await;
    let second = invoke_to_wire(json!({})).await;
    let third = invoke_to_wire(json!({"queryStringParameters": {"name": "Ada"}})).await;

    assert_eq!(first, third);
    assert_ne!(first, second);
}
