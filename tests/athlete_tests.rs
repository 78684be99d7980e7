//! Integration tests for the athlete root resource.
//!
//! Mock expectations double as call counters: `expect(n)` verifies how many
//! fetches actually happened, which is how the laziness and no-caching
//! contracts are checked.

use chrono::NaiveDate;
use serde_json::json;
use strava_api::{ApiClient, Athlete, StravaConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = StravaConfig::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    ApiClient::new(&config)
}

#[tokio::test]
async fn test_rides_maps_listing_entries_without_further_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rides"))
        .and(query_param("athleteId", "103227"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rides": [{"id": 1, "name": "Loop"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    // No /rides/<id>, /streams/<id>, or efforts mocks: any further fetch
    // would 404 and the expect(1) above would catch extra listing calls.

    let client = client_for(&server);
    let rides = Athlete::new(103_227).rides(&client).await.unwrap();

    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0].id(), 1);
    assert_eq!(rides[0].name(), "Loop");
}

#[tokio::test]
async fn test_rides_is_not_cached_between_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rides"))
        .and(query_param("athleteId", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rides": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let athlete = Athlete::new(5);
    athlete.rides(&client).await.unwrap();
    athlete.rides(&client).await.unwrap();
}

#[tokio::test]
async fn test_rides_since_sends_iso_start_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rides"))
        .and(query_param("athleteId", "5"))
        .and(query_param("startDate", "2012-07-03"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rides": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let start = NaiveDate::from_ymd_opt(2012, 7, 3).unwrap();
    let rides = Athlete::new(5).rides_since(&client, start).await.unwrap();

    assert!(rides.is_empty());
}

#[tokio::test]
async fn test_ride_returns_first_identity_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rides"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rides": [
                {"id": 1, "name": "Loop"},
                {"id": 2, "name": "Climb"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ride = Athlete::new(5).ride(&client, 2).await.unwrap();

    let ride = ride.expect("ride 2 should be found");
    assert_eq!(ride.name(), "Climb");
}

#[tokio::test]
async fn test_ride_returns_none_not_error_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rides"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rides": [{"id": 1, "name": "Loop"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ride = Athlete::new(5).ride(&client, 999).await.unwrap();

    assert!(ride.is_none());
}

#[tokio::test]
async fn test_malformed_listing_entry_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rides"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rides": [{"id": 1}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Athlete::new(5).rides(&client).await.unwrap_err();

    assert!(error.to_string().contains("parsing response failed"));
}

#[tokio::test]
async fn test_ride_stats_aggregates_one_detail_fetch_per_ride() {
    let server = MockServer::start().await;

    // Three rides in the window, each movingTime=600, distance=10000.
    Mock::given(method("GET"))
        .and(path("/rides"))
        .and(query_param("athleteId", "103227"))
        .and(query_param("startDate", "2012-07-03"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rides": [
                {"id": 11, "name": "Mon"},
                {"id": 12, "name": "Wed"},
                {"id": 13, "name": "Fri"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    for id in [11, 12, 13] {
        Mock::given(method("GET"))
            .and(path(format!("/rides/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ride": {"movingTime": 600.0, "distance": 10000.0}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let today = NaiveDate::from_ymd_opt(2012, 7, 10).unwrap();
    let stats = Athlete::new(103_227)
        .ride_stats_as_of(&client, today, 7)
        .await
        .unwrap();

    assert_eq!(stats.rides, 3);
    assert!((stats.moving_time - 1_800.0).abs() < f64::EPSILON);
    assert!((stats.distance - 30_000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_ride_stats_on_empty_window_is_all_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rides"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rides": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let today = NaiveDate::from_ymd_opt(2012, 7, 10).unwrap();
    let stats = Athlete::new(5)
        .ride_stats_as_of(&client, today, 7)
        .await
        .unwrap();

    assert_eq!(stats.rides, 0);
    assert!(stats.moving_time.abs() < f64::EPSILON);
    assert!(stats.distance.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_ride_stats_surfaces_detail_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rides"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rides": [{"id": 11, "name": "Mon"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rides/11"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let today = NaiveDate::from_ymd_opt(2012, 7, 10).unwrap();
    let error = Athlete::new(5)
        .ride_stats_as_of(&client, today, 7)
        .await
        .unwrap_err();

    assert!(error.to_string().contains("/rides/11"));
}
