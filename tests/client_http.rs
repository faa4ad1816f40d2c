//! End-to-end tests for the async client against a mock API server.

use assert_matches::assert_matches;
use httpmock::prelude::*;
use serde_json::json;

use randomstuff::{
    AiOptions, ApiVersion, Client, ClientConfig, CovidData, Error, ImageType, JokeBody, JokeType,
    Plan, WaifuType,
};

fn client_for(server: &MockServer, version: ApiVersion) -> Client {
    let mut config = ClientConfig::new("test-key").version(version);
    config.base_url = server.base_url();
    config.warnings = false;
    Client::new(&config).unwrap()
}

#[tokio::test]
async fn v4_ai_response_round_trip() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/ai")
                .header("x-api-key", "test-key")
                .query_param("message", "Hi")
                .query_param("server", "primary")
                .query_param("master", "PGamerX")
                .query_param("bot", "RSA")
                .query_param("uid", "")
                .query_param("language", "en");
            then.status(200)
                .json_body(json!([{ "message": "Hello there!" }, { "response_time": "2ms" }]));
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let response = client
        .get_ai_response("Hi", Plan::Free, &AiOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.message, "Hello there!");
    assert_eq!(response.response_time.as_deref(), Some("2ms"));
    assert_eq!(response.server.as_deref(), Some("primary"));
    assert_eq!(response.session_id, None);
    assert_eq!(response.success, None);
}

#[tokio::test]
async fn v3_ai_response_round_trip() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/ai/response")
                .query_param("message", "Hi")
                .query_param("lang", "en")
                .query_param("type", "stable")
                .query_param("bot_name", "RSA")
                .query_param("dev_name", "PGamerX");
            then.status(200)
                .json_body(json!([{ "message": "Hello!", "success": true, "api_key": "test-key" }]));
        })
        .await;

    let client = client_for(&server, ApiVersion::V3);
    let response = client
        .get_ai_response("Hi", Plan::Free, &AiOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.success, Some(true));
    assert_eq!(response.api_key.as_deref(), Some("test-key"));
    assert_eq!(response.response_time, None);
}

#[tokio::test]
async fn paid_plan_changes_the_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v5/premium/pro/ai");
            then.status(200).json_body(json!({ "message": "Hello!" }));
        })
        .await;

    let client = client_for(&server, ApiVersion::V5);
    let response = client
        .get_ai_response("Hi", Plan::Pro, &AiOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.server.as_deref(), Some("main"));
}

#[tokio::test]
async fn rate_limited_carries_the_body_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/ai");
            then.status(429).body("Too many requests, slow down");
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let err = client
        .get_ai_response("Hi", Plan::Free, &AiOptions::default())
        .await
        .unwrap_err();
    assert_matches!(err, Error::RateLimited(body) if body == "Too many requests, slow down");
}

#[tokio::test]
async fn bad_credentials_and_entitlement_map_to_their_kinds() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/ai");
            then.status(401).body("invalid api key");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/pro/ai");
            then.status(403).body("plan not bought");
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let err = client
        .get_ai_response("Hi", Plan::Free, &AiOptions::default())
        .await
        .unwrap_err();
    assert_matches!(err, Error::Unauthorized(body) if body == "invalid api key");

    let err = client
        .get_ai_response("Hi", Plan::Pro, &AiOptions::default())
        .await
        .unwrap_err();
    assert_matches!(err, Error::Forbidden(body) if body == "plan not bought");
}

#[tokio::test]
async fn upstream_5xx_maps_to_remote_fault() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/joke");
            then.status(503).body("maintenance");
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let err = client.get_joke(JokeType::Any).await.unwrap_err();
    assert_matches!(
        err,
        Error::RemoteFault { status: 503, body } if body == "maintenance"
    );
}

#[tokio::test]
async fn joke_round_trip() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/joke").query_param("type", "pun");
            then.status(200).json_body(json!({
                "category": "Pun",
                "type": "twopart",
                "setup": "Why did the chicken cross the road?",
                "delivery": "To get to the other side.",
                "flags": { "nsfw": false, "religious": false, "political": false, "racist": false, "sexist": false, "explicit": false },
                "id": 180,
                "safe": true,
                "lang": "en"
            }));
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let joke = client.get_joke(JokeType::Pun).await.unwrap();

    mock.assert_async().await;
    assert_eq!(joke.category, "Pun");
    assert_matches!(joke.body, JokeBody::Twopart { .. });
    assert!(joke.safe);
}

#[tokio::test]
async fn v3_joke_tag_rides_the_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/joke/dev");
            then.status(200).json_body(json!({
                "category": "Programming",
                "type": "single",
                "joke": "It works on my machine.",
                "flags": { "nsfw": false, "religious": false, "political": false, "racist": false, "sexist": false, "explicit": false },
                "id": 5,
                "safe": true,
                "lang": "en"
            }));
        })
        .await;

    let client = client_for(&server, ApiVersion::V3);
    let joke = client.get_joke(JokeType::Dev).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        joke.body,
        JokeBody::Single("It works on my machine.".to_owned())
    );
}

#[tokio::test]
async fn safe_joke_refetches_until_safe() {
    let server = MockServer::start_async().await;
    let flags =
        json!({ "nsfw": false, "religious": false, "political": false, "racist": false, "sexist": false, "explicit": false });
    let mut unsafe_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/joke");
            then.status(200).json_body(json!({
                "category": "Dark", "type": "single", "joke": "An unsafe one.",
                "flags": flags.clone(), "id": 1, "safe": false, "lang": "en"
            }));
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let first = client.get_joke(JokeType::Any).await.unwrap();
    assert!(!first.safe);

    unsafe_mock.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/joke");
            then.status(200).json_body(json!({
                "category": "Pun", "type": "single", "joke": "A safe one.",
                "flags": flags.clone(), "id": 2, "safe": true, "lang": "en"
            }));
        })
        .await;

    let joke = client.get_safe_joke(JokeType::Any).await.unwrap();
    assert!(joke.safe);
}

#[tokio::test]
async fn image_round_trip() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/image").query_param("type", "cat");
            then.status(200).json_body(json!(["https://i.example/cat.png"]));
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let url = client.get_image(ImageType::Cat).await.unwrap();
    assert_eq!(url, "https://i.example/cat.png");
}

#[tokio::test]
async fn waifu_round_trip_under_a_plan() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/pro/waifu")
                .query_param("type", "neko");
            then.status(200)
                .json_body(json!([{ "url": "https://i.example/neko.png" }]));
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let waifu = client.get_waifu(WaifuType::Neko, Plan::Pro).await.unwrap();

    mock.assert_async().await;
    assert_eq!(waifu.url, "https://i.example/neko.png");
}

#[tokio::test]
async fn weather_round_trip() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/weather")
                .query_param("city", "Berlin");
            then.status(200).json_body(json!([{
                "location": { "name": "Berlin, Germany", "degreetype": "C" },
                "current": { "temperature": "21", "skytext": "Sunny" },
                "forecast": [ { "day": "Monday", "low": "12", "high": "24" } ]
            }]));
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let weather = client.get_weather("Berlin").await.unwrap();
    assert_eq!(weather.location.name.as_deref(), Some("Berlin, Germany"));
    assert_eq!(weather.forecast.len(), 1);
}

#[tokio::test]
async fn unknown_city_is_reported_in_band() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/weather");
            then.status(200)
                .json_body(json!([{ "error": true, "message": "city not found" }]));
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let err = client.get_weather("Atlantis").await.unwrap_err();
    assert_matches!(err, Error::InvalidCity(msg) if msg == "city not found");
}

#[tokio::test]
async fn covid_scope_follows_the_country_argument() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v5/covid").query_param("country", "Germany");
            then.status(200).json_body(json!([{
                "country": { "name": "Germany", "flag_img": "https://i.example/de.png" },
                "cases": { "total": "100", "recovered": "90", "deaths": "1" },
                "closed_cases": { "percentage": { "death": "1", "discharge": "99" }, "total": "91" }
            }]));
        })
        .await;

    let client = client_for(&server, ApiVersion::V5);
    let data = client.get_covid_stats(Some("Germany")).await.unwrap();
    assert_matches!(
        data,
        CovidData::Country(inner)
            if inner.cases.as_ref().and_then(|c| c.total.as_deref()) == Some("100")
    );
}

#[tokio::test]
async fn contract_breaking_payload_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/ai");
            then.status(200).json_body(json!([{ "greeting": "Hello!" }]));
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let err = client
        .get_ai_response("Hi", Plan::Free, &AiOptions::default())
        .await
        .unwrap_err();
    assert_matches!(err, Error::MalformedResponse(_));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/ai");
            then.status(200).body("<html>oops</html>");
        })
        .await;

    let client = client_for(&server, ApiVersion::V4);
    let err = client
        .get_ai_response("Hi", Plan::Free, &AiOptions::default())
        .await
        .unwrap_err();
    assert_matches!(err, Error::MalformedResponse(_));
}
