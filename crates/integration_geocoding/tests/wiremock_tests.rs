//! Integration tests for the geocoding client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_geocoding::{GeocodingClient, GeocodingConfig, GoogleGeocodingClient};

fn config_for_mock(base_url: &str) -> GeocodingConfig {
    GeocodingConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        api_key: None,
    }
}

const fn white_house_json() -> &'static str {
    r#"{
        "status": "OK",
        "results": [{
            "formatted_address": "1600 Pennsylvania Avenue NW, Washington, DC 20500, USA",
            "geometry": {
                "location": { "lat": 38.8976763, "lng": -77.0365298 },
                "location_type": "ROOFTOP"
            }
        }]
    }"#
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", "1600 Pennsylvania Avenue NW"))
        .respond_with(ResponseTemplate::new(200).set_body_string(white_house_json()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleGeocodingClient::new(&config).unwrap();

    let location = client
        .geocode("1600 Pennsylvania Avenue NW")
        .await
        .unwrap()
        .expect("a location");

    assert!((location.latitude() - 38.8976763).abs() < 1e-6);
    assert!((location.longitude() + 77.0365298).abs() < 1e-6);
}

#[tokio::test]
async fn test_geocode_sends_api_key_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("key", "sk-geo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(white_house_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = GeocodingConfig {
        api_key: Some("sk-geo".to_string()),
        ..config_for_mock(&server.uri())
    };
    let client = GoogleGeocodingClient::new(&config).unwrap();

    let location = client.geocode("White House").await.unwrap();
    assert!(location.is_some());
}

#[tokio::test]
async fn test_geocode_zero_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{ "status": "ZERO_RESULTS", "results": [] }"#),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleGeocodingClient::new(&config).unwrap();

    let location = client.geocode("asdfghjkl").await.unwrap();
    assert!(location.is_none());
}

#[tokio::test]
async fn test_geocode_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleGeocodingClient::new(&config).unwrap();

    let result = client.geocode("Dupont Circle").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().is_retryable());
}

#[tokio::test]
async fn test_geocode_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = GoogleGeocodingClient::new(&config).unwrap();

    let result = client.geocode("Dupont Circle").await;
    assert!(result.is_err());
    assert!(!result.unwrap_err().is_retryable());
}
