//! End-to-end tests for the blocking client variant.

#![cfg(feature = "blocking")]

use assert_matches::assert_matches;
use httpmock::prelude::*;
use serde_json::json;

use randomstuff::{blocking, AiOptions, ApiVersion, ClientConfig, Error, JokeType, Plan};

fn client_for(server: &MockServer, version: ApiVersion) -> blocking::Client {
    let mut config = ClientConfig::new("test-key").version(version);
    config.base_url = server.base_url();
    config.warnings = false;
    blocking::Client::new(&config).unwrap()
}

#[test]
fn blocking_ai_response_round_trip() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v4/ai")
            .header("x-api-key", "test-key")
            .query_param("message", "Hi")
            .query_param("server", "primary");
        then.status(200)
            .json_body(json!([{ "message": "Hello there!" }, { "response_time": "3ms" }]));
    });

    let client = client_for(&server, ApiVersion::V4);
    let response = client
        .get_ai_response("Hi", Plan::Free, &AiOptions::default())
        .unwrap();

    mock.assert();
    assert_eq!(response.message, "Hello there!");
    assert_eq!(response.response_time.as_deref(), Some("3ms"));
}

#[test]
fn blocking_joke_round_trip() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v4/joke").query_param("type", "any");
        then.status(200).json_body(json!({
            "category": "Programming",
            "type": "single",
            "joke": "It works on my machine.",
            "flags": { "nsfw": false, "religious": false, "political": false, "racist": false, "sexist": false, "explicit": false },
            "id": 9,
            "safe": true,
            "lang": "en"
        }));
    });

    let client = client_for(&server, ApiVersion::V4);
    let joke = client.get_joke(JokeType::Any).unwrap();
    assert_eq!(joke.category, "Programming");
}

#[test]
fn blocking_status_mapping_matches_the_async_client() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v4/ai");
        then.status(429).body("Too many requests");
    });

    let client = client_for(&server, ApiVersion::V4);
    let err = client
        .get_ai_response("Hi", Plan::Free, &AiOptions::default())
        .unwrap_err();
    assert_matches!(err, Error::RateLimited(body) if body == "Too many requests");
}

#[test]
fn blocking_validation_stays_local() {
    let server = MockServer::start();
    let client = client_for(&server, ApiVersion::V3);
    let err = client.get_weather("Berlin").unwrap_err();
    assert_matches!(err, Error::UnsupportedOperation(_));
}
