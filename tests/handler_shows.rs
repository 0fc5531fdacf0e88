mod common;

use axum::http::StatusCode;
use chrono::Weekday;
use fyyur::domain::availability::Availability;
use serde_json::{Value, json};

use common::{MemoryStore, at, create_test_server, seed_artist, seed_venue};

fn monday_only() -> Availability {
    Availability::NONE.with(Weekday::Mon, true)
}

#[tokio::test]
async fn test_check_accepts_available_day() {
    let store = MemoryStore::new();
    let artist = seed_artist(&store, "Guns N Petals", |a| a.availability = monday_only()).await;
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    let server = create_test_server(store);

    let response = server
        .post("/api/shows/check")
        .json(&json!({
            "artist_id": artist.id,
            "venue_id": venue.id,
            "start_time": "2024-06-03T19:00:00"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["admissible"], true);
    assert_eq!(body["artist_name"], "Guns N Petals");
    assert_eq!(body["venue_name"], "The Musical Hop");
}

#[tokio::test]
async fn test_check_rejects_unavailable_day() {
    let store = MemoryStore::new();
    let artist = seed_artist(&store, "Guns N Petals", |a| a.availability = monday_only()).await;
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    let server = create_test_server(store);

    let response = server
        .post("/api/shows/check")
        .json(&json!({
            "artist_id": artist.id,
            "venue_id": venue.id,
            "start_time": "2024-06-04T19:00:00"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["details"]["kind"], "unavailable_day");
    assert_eq!(
        body["error"]["message"],
        "Guns N Petals is not available on Tuesday; Guns N Petals is available on Monday"
    );
}

#[tokio::test]
async fn test_check_rejects_second_show_same_day() {
    let store = MemoryStore::new();
    let artist = seed_artist(&store, "Guns N Petals", |_| {}).await;
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    store.insert_show(artist.id, venue.id, at(2024, 6, 10, 20));
    let server = create_test_server(store);

    let response = server
        .post("/api/shows/check")
        .json(&json!({
            "artist_id": artist.id,
            "venue_id": venue.id,
            "start_time": "2024-06-10T14:00:00"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["details"]["kind"], "double_booked");
    assert_eq!(
        body["error"]["message"],
        "Guns N Petals already has a show booked on 2024-06-10"
    );
}

#[tokio::test]
async fn test_check_rejects_past_time() {
    let store = MemoryStore::new();
    let artist = seed_artist(&store, "Guns N Petals", |_| {}).await;
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    let server = create_test_server(store);

    let response = server
        .post("/api/shows/check")
        .json(&json!({
            "artist_id": artist.id,
            "venue_id": venue.id,
            "start_time": "2024-06-01T11:59:00"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["kind"],
        "past_date"
    );
}

#[tokio::test]
async fn test_check_unknown_artist_is_not_found() {
    let store = MemoryStore::new();
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    let server = create_test_server(store);

    let response = server
        .post("/api/shows/check")
        .json(&json!({
            "artist_id": 999,
            "venue_id": venue.id,
            "start_time": "2024-06-10T19:00:00"
        }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_check_rejects_non_positive_ids() {
    let server = create_test_server(MemoryStore::new());

    let response = server
        .post("/api/shows/check")
        .json(&json!({
            "artist_id": 0,
            "venue_id": 1,
            "start_time": "2024-06-10T19:00:00"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"].get("artist_id").is_some());
}

#[tokio::test]
async fn test_create_show_then_same_day_conflicts() {
    let store = MemoryStore::new();
    let artist = seed_artist(&store, "Guns N Petals", |_| {}).await;
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    let server = create_test_server(store.clone());

    let first = server
        .post("/api/shows")
        .json(&json!({
            "artist_id": artist.id,
            "venue_id": venue.id,
            "start_time": "2024-06-12T18:00:00"
        }))
        .await;

    first.assert_status(StatusCode::CREATED);
    let body = first.json::<Value>();
    assert_eq!(body["artist_id"], artist.id);
    assert_eq!(body["start_time"], "2024-06-12T18:00:00");

    let second = server
        .post("/api/shows")
        .json(&json!({
            "artist_id": artist.id,
            "venue_id": venue.id,
            "start_time": "2024-06-12T22:00:00"
        }))
        .await;

    second.assert_status(StatusCode::CONFLICT);
    assert_eq!(store.show_count(), 1);
}

#[tokio::test]
async fn test_list_shows_ordered_by_start_time() {
    let store = MemoryStore::new();
    let artist = seed_artist(&store, "Guns N Petals", |_| {}).await;
    let other = seed_artist(&store, "Matt Quevedo", |_| {}).await;
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    store.insert_show(artist.id, venue.id, at(2024, 6, 20, 20));
    store.insert_show(other.id, venue.id, at(2024, 5, 21, 21));
    let server = create_test_server(store);

    let response = server.get("/api/shows").await;

    response.assert_status_ok();
    let items = response.json::<Value>()["items"].as_array().unwrap().clone();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["artist_name"], "Matt Quevedo");
    assert_eq!(items[1]["artist_name"], "Guns N Petals");
    assert_eq!(items[1]["venue_name"], "The Musical Hop");
}

#[tokio::test]
async fn test_availability_endpoint() {
    let store = MemoryStore::new();
    let artist = seed_artist(&store, "The Wild Sax Band", |a| {
        a.availability = Availability::from_flags([true, false, true, false, true, false, false]);
    })
    .await;
    let server = create_test_server(store);

    let response = server
        .get(&format!("/api/artists/{}/availability", artist.id))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "The Wild Sax Band");
    assert_eq!(body["days"]["monday"], true);
    assert_eq!(body["days"]["tuesday"], false);
    assert_eq!(body["summary"], "available on Monday, Wednesday and Friday");
}

#[tokio::test]
async fn test_availability_unknown_artist() {
    let server = create_test_server(MemoryStore::new());
    server
        .get("/api/artists/42/availability")
        .await
        .assert_status_not_found();
}
