//! Catalog API client tests against a mock backend

use flicktui::api::{CatalogClient, CatalogError};
use flicktui::models::{Language, MediaKind, SectionKind, TimeWindow};

#[tokio::test]
async fn test_page_parses_sections() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/page?type=inicio&time_window=day")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "sections": {
                    "trending_day_movies": {"results": [
                        {"id": 11, "title": "Dune", "release_date": "2021-09-15",
                         "genres": ["Sci-Fi"], "vote_average": 8.1,
                         "overview": "Spice.", "poster": "https://img/11.jpg"}
                    ]},
                    "now_playing_movies": {"results": [
                        {"id": 12, "title": "Oppenheimer"}
                    ]},
                    "top_rated_movies": {"results": [
                        {"id": 13, "title": "Heat", "vote_average": 8.3}
                    ]},
                    "upcoming_movies": {"results": [
                        {"id": 14, "title": "Dune Part Three"}
                    ]}
                }
            }"#,
        )
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), "test-key");
    let page = client.page(TimeWindow::Day).await.unwrap();

    assert_eq!(page.sections.len(), 4);
    assert_eq!(
        page.sections[0].kind,
        SectionKind::Trending(TimeWindow::Day)
    );
    let dune = &page.sections[0].titles[0];
    assert_eq!(dune.id, "11");
    assert_eq!(dune.year, 2021);
    assert_eq!(dune.rating, Some(8.1));
    assert_eq!(page.hero().unwrap().title, "Dune");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_page_week_window_hits_week_bucket() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/page?type=inicio&time_window=week")
        .with_status(200)
        .with_body(
            r#"{"sections": {"trending_week_movies": {"results": [{"id": 9, "title": "W"}]}}}"#,
        )
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), "test-key");
    let page = client.page(TimeWindow::Week).await.unwrap();
    assert_eq!(page.sections.len(), 1);
    assert_eq!(
        page.sections[0].kind,
        SectionKind::Trending(TimeWindow::Week)
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn test_movie_detail_with_servers() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/get-movie?id=550")
        .with_status(200)
        .with_body(
            r#"{
                "success": true,
                "data": {
                    "title": "Fight Club",
                    "release_date": "1999-10-15",
                    "age_rating": "18",
                    "genres": ["Drama"],
                    "overview": "Rules apply.",
                    "servers": [
                        {"name": "StreamWish", "url": "https://sw/550", "language": "Latino"},
                        {"name": "Filemoon", "url": "https://fm/550", "language": "Castellano"}
                    ],
                    "similar_movies": [{"id": 551, "title": "Se7en"}]
                }
            }"#,
        )
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), "test-key");
    let detail = client.movie("550").await.unwrap();

    assert_eq!(detail.title, "Fight Club");
    assert_eq!(detail.year, 1999);
    assert_eq!(detail.age_rating.as_deref(), Some("18"));
    assert_eq!(detail.servers.len(), 2);
    assert_eq!(detail.servers[0].language, Language::Latino);
    assert_eq!(detail.similar.len(), 1);

    let groups = detail.servers_by_language();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, Language::Latino);
}

#[tokio::test]
async fn test_movie_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/get-movie?id=999")
        .with_status(404)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), "test-key");
    let err = client.movie("999").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::NotFound)
    ));
}

#[tokio::test]
async fn test_search_maps_series_tag() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/search?query=breaking%20bad")
        .with_status(200)
        .with_body(
            r#"{"results": [
                {"id": 1, "title": "Breaking Bad", "type": "serie",
                 "release_date": "2008-01-20", "vote_average": 9.5},
                {"id": 2, "title": "El Camino", "type": "pelicula"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), "test-key");
    let hits = client.search("breaking bad").await.unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].kind, MediaKind::Tv);
    assert_eq!(hits[0].year, Some(2008));
    assert_eq!(hits[1].kind, MediaKind::Movie);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/search?query=x")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), "test-key");
    let err = client.search("x").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_server_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/search?query=x")
        .with_status(503)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), "test-key");
    let err = client.search("x").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::ServerError(503))
    ));
}

#[tokio::test]
async fn test_auth_header_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/search?query=x")
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), "secret");
    let hits = client.search("x").await.unwrap();
    assert!(hits.is_empty());

    mock.assert_async().await;
}
