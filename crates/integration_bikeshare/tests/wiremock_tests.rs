//! Integration tests for the station feed client (wiremock-based)

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_bikeshare::{BikeshareFeedClient, FeedConfig, StationFeedClient};

fn config_for_mock(base_url: &str) -> FeedConfig {
    FeedConfig {
        feed_url: format!("{base_url}/data/stations/bikeStations.xml"),
        timeout_secs: 5,
    }
}

const fn sample_feed_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="utf-8"?>
<stations lastUpdate="1454809560321" version="2.0">
  <station>
    <id>31228</id>
    <name>8th &amp; H St NW</name>
    <terminalName>31228</terminalName>
    <lat>38.899972</lat>
    <long>-76.994985</long>
    <nbBikes>6</nbBikes>
    <nbEmptyDocks>13</nbEmptyDocks>
    <latestUpdateTime>1454806409404</latestUpdateTime>
  </station>
  <station>
    <id>31200</id>
    <name>Massachusetts Ave &amp; Dupont Circle NW</name>
    <terminalName>31200</terminalName>
    <lat>38.910100</lat>
    <long>-77.044400</long>
    <nbBikes>0</nbBikes>
    <nbEmptyDocks>18</nbEmptyDocks>
    <latestUpdateTime>1454806333830</latestUpdateTime>
  </station>
</stations>"#
}

#[tokio::test]
async fn test_fetch_stations_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/stations/bikeStations.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_feed_xml()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = BikeshareFeedClient::new(&config).unwrap();

    let stations = client.fetch_stations().await.unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].name, "8th & H St NW");
    assert_eq!(stations[0].bikes_available, 6);
    assert_eq!(stations[1].bikes_available, 0);
    assert_eq!(stations[1].docks_available, 18);
}

#[tokio::test]
async fn test_fetch_stations_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/stations/bikeStations.xml"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = BikeshareFeedClient::new(&config).unwrap();

    let result = client.fetch_stations().await;
    assert!(result.is_err());
    assert!(result.unwrap_err().is_retryable());
}

#[tokio::test]
async fn test_one_corrupt_station_fails_whole_fetch() {
    let server = MockServer::start().await;

    let corrupt = r#"<stations>
  <station>
    <id>1</id><name>Good</name><lat>38.8</lat><long>-77.0</long>
    <nbBikes>3</nbBikes><nbEmptyDocks>5</nbEmptyDocks>
    <latestUpdateTime>1454806409404</latestUpdateTime>
  </station>
  <station>
    <id>2</id><name>Corrupt</name><lat>38.9</lat>
    <nbBikes>1</nbBikes><nbEmptyDocks>5</nbEmptyDocks>
    <latestUpdateTime>1454806409404</latestUpdateTime>
  </station>
</stations>"#;

    Mock::given(method("GET"))
        .and(path("/data/stations/bikeStations.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(corrupt))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = BikeshareFeedClient::new(&config).unwrap();

    let result = client.fetch_stations().await;
    assert!(result.is_err());
    assert!(!result.unwrap_err().is_retryable());
}

#[tokio::test]
async fn test_empty_feed_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/stations/bikeStations.xml"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<stations version="2.0"></stations>"#),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = BikeshareFeedClient::new(&config).unwrap();

    let stations = client.fetch_stations().await.unwrap();
    assert!(stations.is_empty());
}
