#![allow(clippy::unwrap_used, reason = "test code")]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use pokedex_catalog::CatalogClient;
use pokedex_core::PokemonRecord;
use pokedex_http::{create_router, AppState, DeleteResponse, SeedResponse};
use pokedex_service::{PokemonService, SeedService};
use pokedex_storage::StorageBackend;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_with(catalog_url: &str, public_dir: Option<PathBuf>) -> Router {
    let storage = Arc::new(StorageBackend::new_memory());
    let catalog = Arc::new(CatalogClient::new(catalog_url, Duration::from_secs(5)).unwrap());
    let state = Arc::new(AppState {
        pokemon_service: Arc::new(PokemonService::new(Arc::clone(&storage), 6)),
        seed_service: Arc::new(SeedService::new(storage, catalog, 650)),
        public_dir,
    });
    create_router(state)
}

fn app() -> Router {
    // Nothing listens here; only seed tests talk to the catalog
    app_with("http://127.0.0.1:9", None)
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create(app: &Router, name: &str, no: i32) -> PokemonRecord {
    let body = serde_json::json!({ "name": name, "no": no }).to_string();
    let resp = app.clone().oneshot(json_request("POST", "/api/v2/pokemon", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[tokio::test]
async fn health_is_ok() {
    let resp = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn version_reports_package_version() {
    let resp = app().oneshot(get("/api/v2/version")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn create_returns_201_with_lowercased_name() {
    let app = app();
    let record = create(&app, "Pikachu", 25).await;
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.no, 25);
}

#[tokio::test]
async fn create_duplicate_returns_400() {
    let app = app();
    create(&app, "pikachu", 25).await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v2/pokemon", r#"{"name":"pikachu","no":26}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn create_with_unknown_field_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/v2/pokemon", r#"{"name":"mew","no":151,"x":1}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_non_positive_no_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/v2/pokemon", r#"{"name":"mew","no":0}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_by_no_name_and_id() {
    let app = app();
    let created = create(&app, "pikachu", 25).await;

    for term in ["25".to_owned(), "PIKACHU".to_owned(), created.id.to_string()] {
        let resp = app.clone().oneshot(get(&format!("/api/v2/pokemon/{term}"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "term {term}");
        let found: PokemonRecord = body_json(resp).await;
        assert_eq!(found, created);
    }
}

#[tokio::test]
async fn get_unknown_returns_404() {
    let resp = app().oneshot(get("/api/v2/pokemon/nonexistent")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_paginates_by_no() {
    let app = app();
    for (name, no) in [("squirtle", 7), ("bulbasaur", 1), ("charmander", 4)] {
        create(&app, name, no).await;
    }

    let resp = app.clone().oneshot(get("/api/v2/pokemon?limit=2&offset=1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Vec<PokemonRecord> = body_json(resp).await;
    let names: Vec<&str> = page.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["charmander", "squirtle"]);
}

#[tokio::test]
async fn list_items_expose_only_public_fields() {
    let app = app();
    create(&app, "bulbasaur", 1).await;

    let resp = app.clone().oneshot(get("/api/v2/pokemon")).await.unwrap();
    let page: serde_json::Value = body_json(resp).await;
    let item = page[0].as_object().unwrap();
    let mut keys: Vec<&str> = item.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "name", "no"]);
}

#[tokio::test]
async fn list_with_bad_limit_returns_400() {
    let resp = app().oneshot(get("/api/v2/pokemon?limit=0")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app().oneshot(get("/api/v2/pokemon?limit=many")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_merges_fields() {
    let app = app();
    create(&app, "pikachu", 25).await;

    let resp = app
        .clone()
        .oneshot(json_request("PATCH", "/api/v2/pokemon/pikachu", r#"{"name":"Raichu"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: PokemonRecord = body_json(resp).await;
    assert_eq!(updated.name, "raichu");
    assert_eq!(updated.no, 25);
}

#[tokio::test]
async fn patch_unknown_returns_404() {
    let resp = app()
        .oneshot(json_request("PATCH", "/api/v2/pokemon/ghost", r#"{"no":3}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_present_then_absent() {
    let app = app();
    let created = create(&app, "pikachu", 25).await;
    let uri = format!("/api/v2/pokemon/{}", created.id);

    let resp = app.clone().oneshot(json_request("DELETE", &uri, "")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: DeleteResponse = body_json(resp).await;
    assert_eq!(deleted.id, created.id);

    let resp = app.clone().oneshot(json_request("DELETE", &uri, "")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_malformed_id_returns_400() {
    let resp =
        app().oneshot(json_request("DELETE", "/api/v2/pokemon/pikachu", "")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn seed_imports_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"}
            ]
        })))
        .mount(&server)
        .await;
    let app = app_with(&server.uri(), None);

    let resp = app.clone().oneshot(get("/api/v2/seed")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let report: SeedResponse = body_json(resp).await;
    assert_eq!(report.message, "Seed executed");
    assert_eq!(report.inserted, 1);

    let resp = app.clone().oneshot(get("/api/v2/pokemon/25")).await.unwrap();
    let pikachu: PokemonRecord = body_json(resp).await;
    assert_eq!(pikachu.name, "pikachu");
}

#[tokio::test]
async fn seed_with_failing_catalog_returns_502() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let app = app_with(&server.uri(), None);

    let resp = app.oneshot(get("/api/v2/seed")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn static_files_served_outside_api() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Pokedex</h1>").unwrap();
    let app = app_with("http://127.0.0.1:9", Some(dir.path().to_path_buf()));

    let resp = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>Pokedex</h1>");

    let resp = app.oneshot(get("/missing.css")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
