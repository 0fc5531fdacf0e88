mod common;

use axum::http::StatusCode;

use common::{MemoryStore, at, create_test_server, seed_artist, seed_venue};

fn venue_form(name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("city", "San Francisco".to_string()),
        ("state", "CA".to_string()),
        ("address", "1015 Folsom Street".to_string()),
        ("genres", "Jazz".to_string()),
        ("genres", "Reggae".to_string()),
        ("website", "https://www.themusicalhop.com".to_string()),
        ("seeking_talent", "y".to_string()),
    ]
}

#[tokio::test]
async fn test_venues_grouped_by_area() {
    let store = MemoryStore::new();
    let hop = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(&store, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    seed_venue(&store, "The Dueling Pianos Bar", "New York", "NY").await;
    let artist = seed_artist(&store, "Guns N Petals", |_| {}).await;
    store.insert_show(artist.id, hop.id, at(2024, 6, 10, 19));
    store.insert_show(artist.id, hop.id, at(2024, 5, 10, 19));
    let server = create_test_server(store);

    let response = server.get("/venues").await;

    response.assert_status_ok();
    let body = response.text();
    let sf = body.find("San Francisco, CA").unwrap();
    let ny = body.find("New York, NY").unwrap();
    assert!(sf < ny);
    assert_eq!(body.matches("San Francisco, CA").count(), 1);
    assert!(body.contains("1 upcoming shows"));
    assert!(body.contains("Park Square Live Music &amp; Coffee"));
}

#[tokio::test]
async fn test_create_venue_redirects_to_page() {
    let store = MemoryStore::new();
    let server = create_test_server(store);

    let response = server
        .post("/venues/create")
        .form(&venue_form("The Musical Hop"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let location = response.header("location").to_str().unwrap().to_string();
    assert_eq!(location, "/venues/1?notice=listed");

    let body = server.get(&location).await.text();
    assert!(body.contains("Venue The Musical Hop was listed successfully!"));
    assert!(body.contains("Currently seeking talent"));
    assert!(body.contains("https://www.themusicalhop.com"));
}

#[tokio::test]
async fn test_create_venue_requires_genres_and_address() {
    let server = create_test_server(MemoryStore::new());

    let mut form = venue_form("The Musical Hop");
    form.retain(|(k, _)| *k != "genres" && *k != "address");

    let response = server.post("/venues/create").form(&form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text();
    assert!(body.contains("Please select at least one genre"));
    assert!(body.contains("data-field=\"address\""));
}

#[tokio::test]
async fn test_edit_venue_form_is_prefilled() {
    let store = MemoryStore::new();
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    let server = create_test_server(store);

    let response = server.get(&format!("/venues/{}/edit", venue.id)).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("value=\"The Musical Hop\""));
    assert!(body.contains("<option value=\"CA\" selected>"));
    assert!(body.contains("<option value=\"Jazz\" selected>"));
    assert!(body.contains("name=\"seeking_talent\" value=\"y\" checked"));
}

#[tokio::test]
async fn test_venue_page_shows() {
    let store = MemoryStore::new();
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&store, "Guns N Petals", |_| {}).await;
    store.insert_show(artist.id, venue.id, at(2024, 6, 10, 19));
    store.insert_show(artist.id, venue.id, at(2024, 6, 11, 19));
    let server = create_test_server(store);

    let body = server.get(&format!("/venues/{}", venue.id)).await.text();

    assert!(body.contains("2 Upcoming Shows"));
    assert!(body.contains("0 Past Shows"));
    assert!(body.contains("Tuesday June 11, 2024 at 7:00PM"));
}

#[tokio::test]
async fn test_search_venues_matches_city() {
    let store = MemoryStore::new();
    seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(&store, "The Dueling Pianos Bar", "New York", "NY").await;
    let server = create_test_server(store);

    let response = server
        .post("/venues/search")
        .form(&[("search_term", "new york")])
        .await;

    let body = response.text();
    assert!(body.contains("Number of search results for \"new york\": 1"));
    assert!(body.contains("The Dueling Pianos Bar"));
}

#[tokio::test]
async fn test_delete_venue() {
    let store = MemoryStore::new();
    let venue = seed_venue(&store, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&store, "Guns N Petals", |_| {}).await;
    store.insert_show(artist.id, venue.id, at(2024, 6, 10, 19));
    let server = create_test_server(store.clone());

    let response = server.post(&format!("/venues/{}/delete", venue.id)).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "/?notice=venue_deleted"
    );
    assert_eq!(store.show_count(), 0);

    server
        .get(&format!("/venues/{}", venue.id))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let server = create_test_server(MemoryStore::new());
    let response = server.get("/nowhere").await;
    response.assert_status_not_found();
    assert!(response.text().contains("doesn"));
}
